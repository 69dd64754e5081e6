use flotilla::Fleet;

#[test]
fn test_add_accumulates() {
    let mut fleet = Fleet::new();
    fleet.add(3, 1);
    fleet.add(3, 2);
    fleet.add(5, 1);
    assert_eq!(fleet.count(3), 3);
    assert_eq!(fleet.count(5), 1);
    assert_eq!(fleet.count(1), 0);
    assert_eq!(fleet.total(), 4);
}

#[test]
fn test_sink_next_afloat_follows_id_order() {
    let mut fleet: Fleet = [(1u8, 1u32), (2, 2)].into_iter().collect();
    assert_eq!(fleet.sink_next_afloat(), Some(1));
    assert_eq!(fleet.count(1), 0);
    assert_eq!(fleet.sink_next_afloat(), Some(2));
    assert_eq!(fleet.sink_next_afloat(), Some(2));
    assert!(fleet.all_sunk());
    assert_eq!(fleet.sink_next_afloat(), None);
}

#[test]
fn test_all_sunk_iff_total_zero() {
    let mut fleet: Fleet = [(4u8, 2u32)].into_iter().collect();
    assert!(!fleet.all_sunk());
    fleet.sink_next_afloat();
    assert!(!fleet.all_sunk());
    assert_eq!(fleet.total(), 1);
    fleet.sink_next_afloat();
    assert!(fleet.all_sunk());
    assert_eq!(fleet.total(), 0);

    // an empty fleet has nothing left to sink
    assert!(Fleet::new().all_sunk());
}

#[test]
fn test_iter_ascending() {
    let fleet: Fleet = [(6u8, 1u32), (2, 3), (4, 2)].into_iter().collect();
    let pairs: Vec<_> = fleet.iter().collect();
    assert_eq!(pairs, vec![(2, 3), (4, 2), (6, 1)]);
}
