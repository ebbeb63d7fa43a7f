//! Contract generation.
//!
//! Offers are produced from the location catalog and the current day.
//! A refresh replaces the whole open pool; unassigned offers are
//! discarded, not archived.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    rng::{choose, SimRng},
    state::Contract,
    types::Day,
};
use uuid::Uuid;

/// Produce one delivery offer for `day`.
///
/// Draw order (fixed for reproducibility): origin, destination,
/// distance, weight, deadline offset, payout multiplier, id words.
pub fn generate(config: &SimConfig, day: Day, rng: &mut dyn SimRng) -> SimResult<Contract> {
    if config.locations.len() < 2 {
        return Err(SimError::InsufficientLocations {
            found: config.locations.len(),
        });
    }

    let origin = choose(rng, &config.locations)?.clone();
    let candidates: Vec<&String> = config.locations.iter().filter(|l| **l != origin).collect();
    let destination = (*choose(rng, &candidates)?).clone();

    let distance = rng.uniform_int(config.distance_min, config.distance_max) as u32;
    let weight_tons = rng.uniform_int(config.weight_min, config.weight_max) as u32;
    let deadline_day =
        day + rng.uniform_int(config.deadline_offset_min, config.deadline_offset_max) as Day;

    let base = distance as i64 * config.rate_per_distance + weight_tons as i64 * config.rate_per_ton;
    let payout = (base as f64 * (1.0 + rng.uniform01())).round() as i64;
    let penalty = (payout as f64 * config.penalty_rate).round() as i64;

    // Ids come from the RNG stream, not the OS, so seeded runs emit
    // byte-identical event logs.
    let id = Uuid::from_u64_pair(rng.next_u64(), rng.next_u64());

    Ok(Contract {
        id,
        origin,
        destination,
        distance,
        weight_tons,
        deadline_day,
        payout,
        penalty,
    })
}

/// Replace the entire open pool with `n` fresh offers.
pub fn refresh_pool(
    config: &SimConfig,
    day: Day,
    n: usize,
    rng: &mut dyn SimRng,
) -> SimResult<Vec<Contract>> {
    (0..n).map(|_| generate(config, day, rng)).collect()
}
