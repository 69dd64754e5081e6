use flotilla::{standard_fleet, SetupError, Skirmish};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // A full-board budget always suffices: once every cell has been attacked,
    // the last hit on each ship has fired a sunk report, so the strategy's
    // inventory must have reached zero.
    #[test]
    fn skirmish_always_ends_sunk_within_full_budget(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut skirmish = Skirmish::new(10, 10, standard_fleet());
        match skirmish.setup(&mut rng) {
            Ok(()) => {
                let summary = skirmish.run(&mut rng, 100).unwrap();
                prop_assert!(summary.all_sunk);
                prop_assert!(summary.shots <= 100);
                prop_assert_eq!(summary.stats.occupied, 27);
            }
            Err(SetupError::PlacementExhausted(_)) => {}
            Err(e) => prop_assert!(false, "unexpected setup error: {}", e),
        }
    }
}
