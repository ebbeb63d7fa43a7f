//! Mission resolution — the day-advance state machine.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Increment the day counter.
//!   2. Fuel-price drift roll.
//!   3. Per ship, in fleet order: age the mission, roll breakdown,
//!      settle the contract if the ship arrives.
//!
//! RNG draws are consumed strictly in that order so a seeded run is
//! reproducible ship-for-ship.

use crate::{
    config::SimConfig,
    error::SimResult,
    event::SimEvent,
    rng::SimRng,
    state::CompanyState,
};

/// Advance one simulated day over the whole fleet.
pub fn advance_day(
    state: &mut CompanyState,
    config: &SimConfig,
    rng: &mut dyn SimRng,
) -> SimResult<Vec<SimEvent>> {
    state.day += 1;
    let day = state.day;
    let mut events = Vec::new();

    if rng.chance(config.fuel_price_drift_chance) {
        let delta = rng.uniform_int(config.fuel_price_drift_min, config.fuel_price_drift_max);
        state.fuel_price = config.fuel_price_floor.max(state.fuel_price + delta);
        events.push(SimEvent::FuelPriceDrift {
            day,
            delta,
            price: state.fuel_price,
        });
    }

    let params = if state.difficulty.is_hardcore() {
        &config.hardcore
    } else {
        &config.normal
    };

    for idx in 0..state.fleet.len() {
        // Each iteration borrows one ship, then releases it before the
        // settlement touches credits/reputation on the aggregate.
        let (mut breakdown, mut settlement) = (None, None);
        {
            let ship = &mut state.fleet[idx];
            if ship.days_remaining == 0 {
                continue;
            }
            ship.days_remaining -= 1;

            if rng.chance(params.breakdown_chance) {
                let damage = rng.uniform_int(
                    config.breakdown_damage_min as i64,
                    params.breakdown_damage_max as i64,
                ) as u32;
                ship.hp = ship.hp.saturating_sub(damage);
                breakdown = Some(SimEvent::BreakdownSuffered {
                    day,
                    ship_id: ship.id,
                    ship: ship.name.clone(),
                    damage,
                    hp_left: ship.hp,
                });
            }

            if ship.days_remaining == 0 {
                // Invariant: a busy ship always carries a contract.
                let contract = ship
                    .active_contract
                    .take()
                    .expect("busy ship without an active contract");
                settlement = Some((ship.id, ship.name.clone(), contract));
            }
        }

        if let Some(ev) = breakdown {
            events.push(ev);
        }

        if let Some((ship_id, ship_name, contract)) = settlement {
            if day <= contract.deadline_day {
                let bonus = (contract.payout as f64 * params.on_time_bonus_rate).round() as i64;
                let amount = contract.payout + bonus;
                state.credits += amount;
                state.reputation += 1;
                events.push(SimEvent::DeliveredOnTime {
                    day,
                    ship_id,
                    ship: ship_name,
                    contract_id: contract.id,
                    amount,
                    reputation: state.reputation,
                });
            } else {
                let penalty =
                    (contract.penalty as f64 * params.late_penalty_multiplier).round() as i64;
                state.credits -= penalty;
                state.reputation = state.reputation.saturating_sub(1);
                events.push(SimEvent::DeliveredLate {
                    day,
                    ship_id,
                    ship: ship_name,
                    contract_id: contract.id,
                    penalty,
                    reputation: state.reputation,
                });
            }
        }
    }

    Ok(events)
}
