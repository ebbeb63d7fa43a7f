//! Contract generation rules: route picking, pricing and pool refresh.

use starhaul_core::{
    contracts,
    error::SimError,
    rng::ScriptedRng,
    SimConfig,
};

#[test]
fn minimum_draws_produce_the_floor_contract() {
    // Empty queues fall back to every range minimum and a 0.0
    // payout multiplier.
    let mut rng = ScriptedRng::new();
    let c = contracts::generate(&SimConfig::default(), 1, &mut rng).unwrap();

    assert_eq!(c.origin, "Terra");
    assert_eq!(c.destination, "Luna");
    assert_eq!(c.distance, 20);
    assert_eq!(c.weight_tons, 5);
    assert_eq!(c.deadline_day, 3); // day 1 + offset 2
    // base = 20*8 + 5*15 = 235, multiplier 1.0
    assert_eq!(c.payout, 235);
    assert_eq!(c.penalty, 118); // round(235 * 0.5)
}

#[test]
fn payout_multiplier_scales_the_base_rate() {
    let mut rng = ScriptedRng::with_floats([0.5]);
    rng.ints.extend([0, 0, 100, 10, 4]);
    let c = contracts::generate(&SimConfig::default(), 10, &mut rng).unwrap();

    assert_eq!(c.distance, 100);
    assert_eq!(c.weight_tons, 10);
    assert_eq!(c.deadline_day, 14);
    // base = 100*8 + 10*15 = 950, *1.5 = 1425
    assert_eq!(c.payout, 1425);
    assert_eq!(c.penalty, 713); // round(1425 * 0.5)
}

#[test]
fn origin_and_destination_never_coincide() {
    let config = SimConfig::default();
    // The destination index addresses the catalog minus the origin, so
    // even index 0 for both picks two different places.
    for origin_idx in 0..config.locations.len() as i64 {
        let mut rng = ScriptedRng::with_ints([origin_idx, 0]);
        let c = contracts::generate(&config, 1, &mut rng).unwrap();
        assert_ne!(c.origin, c.destination);
    }
}

#[test]
fn refresh_replaces_the_pool_with_distinct_offers() {
    let mut rng = ScriptedRng::new();
    let pool = contracts::refresh_pool(&SimConfig::default(), 1, 5, &mut rng).unwrap();

    assert_eq!(pool.len(), 5);
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            assert_ne!(pool[i].id, pool[j].id);
        }
    }
}

#[test]
fn undersized_location_catalog_is_rejected() {
    let config = SimConfig {
        locations: vec!["Terra".to_string()],
        ..SimConfig::default()
    };
    let mut rng = ScriptedRng::new();
    assert!(matches!(
        contracts::generate(&config, 1, &mut rng),
        Err(SimError::InsufficientLocations { found: 1 })
    ));
}
