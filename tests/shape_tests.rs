use flotilla::{shape_for, standard_fleet, ShipShape, NUM_SHAPES, SHAPES};

#[test]
fn test_catalog_ids_and_lengths() {
    assert_eq!(SHAPES.len(), NUM_SHAPES);
    let ids: Vec<u8> = SHAPES.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    let lens: Vec<usize> = SHAPES.iter().map(|s| s.len()).collect();
    assert_eq!(lens, vec![2, 3, 4, 4, 4, 4, 6]);
}

#[test]
fn test_catalog_offsets_are_versioned() {
    // compatibility tables: changing any entry breaks existing fleets
    let destroyer: &[(i8, i8)] = &[(0, 0), (1, 0)];
    let monitor: &[(i8, i8)] = &[(0, 0), (1, 0), (2, 0), (1, 1)];
    let corvette: &[(i8, i8)] = &[(0, 1), (1, 1), (1, 0), (2, 0)];
    let carrier: &[(i8, i8)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (3, 1)];

    assert_eq!(shape_for(1).unwrap().offsets(), destroyer);
    assert_eq!(shape_for(4).unwrap().offsets(), monitor);
    assert_eq!(shape_for(6).unwrap().offsets(), corvette);
    assert_eq!(shape_for(7).unwrap().offsets(), carrier);
}

#[test]
fn test_shape_for_unknown_id() {
    assert!(shape_for(0).is_none());
    assert!(shape_for(8).is_none());
    for shape in &SHAPES {
        assert_eq!(shape_for(shape.id()), Some(shape));
    }
}

#[test]
fn test_project_translates_by_anchor() {
    let battleship = shape_for(3).unwrap();
    let cells = battleship.project(2, 5).unwrap();
    assert_eq!(cells, vec![(2, 5), (3, 5), (4, 5), (5, 5)]);
}

#[test]
fn test_project_rejects_negative_cells() {
    const HOOK: [(i8, i8); 2] = [(-1, 0), (0, 0)];
    let shape = ShipShape::new(9, "Test", &HOOK);
    assert!(shape.project(0, 0).is_none());
    assert_eq!(shape.project(1, 0).unwrap(), vec![(0, 0), (1, 0)]);
}

#[test]
fn test_standard_fleet_one_of_each() {
    let fleet = standard_fleet();
    assert_eq!(fleet.total(), 7);
    for shape in &SHAPES {
        assert_eq!(fleet.count(shape.id()), 1);
    }
}
