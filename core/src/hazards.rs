//! World events — the hazard roll.
//!
//! One continuous roll partitions into five bands. Magnitudes come
//! from the difficulty table; hardcore widens most of them. Piracy
//! targets the whole fleet uniformly, while storms only delay busy
//! ships — intentional asymmetry.

use crate::{
    config::SimConfig,
    error::SimResult,
    event::SimEvent,
    rng::SimRng,
    state::CompanyState,
};

/// Apply one randomly selected world event to company/fleet state.
pub fn trigger_random_event(
    state: &mut CompanyState,
    config: &SimConfig,
    rng: &mut dyn SimRng,
) -> SimResult<Vec<SimEvent>> {
    let params = if state.difficulty.is_hardcore() {
        &config.hardcore
    } else {
        &config.normal
    };
    let day = state.day;
    let roll = rng.uniform01();

    let event = if roll < 0.20 {
        let delta = rng.uniform_int(config.fuel_surge_min, params.fuel_surge_max);
        state.fuel_price += delta;
        SimEvent::FuelSurge {
            day,
            delta,
            price: state.fuel_price,
        }
    } else if roll < 0.40 {
        let amount = rng.uniform_int(config.customs_fine_min, params.customs_fine_max);
        state.credits = (state.credits - amount).max(0);
        SimEvent::CustomsFine {
            day,
            amount,
            credits: state.credits,
        }
    } else if roll < 0.55 {
        let amount = rng.uniform_int(config.grant_min, params.grant_max);
        state.credits += amount;
        SimEvent::GovernmentGrant {
            day,
            amount,
            credits: state.credits,
        }
    } else if roll < 0.75 {
        // Target drawn from the ENTIRE fleet, busy or not.
        // Draw order: target, credit loss, hull damage.
        let target_idx = rng.uniform_int(0, state.fleet.len() as i64 - 1) as usize;
        let credits_lost = rng.uniform_int(config.piracy_loss_min, params.piracy_loss_max);
        let damage = rng.uniform_int(
            config.piracy_damage_min as i64,
            params.piracy_damage_max as i64,
        ) as u32;
        state.credits = (state.credits - credits_lost).max(0);
        let target = &mut state.fleet[target_idx];
        target.hp = target.hp.saturating_sub(damage);
        SimEvent::PirateAmbush {
            day,
            ship: target.name.clone(),
            credits_lost,
            damage,
        }
    } else {
        let mut delayed = 0usize;
        for ship in state.fleet.iter_mut().filter(|s| s.days_remaining > 0) {
            ship.days_remaining += 1;
            delayed += 1;
        }
        if delayed > 0 {
            SimEvent::SolarStorm {
                day,
                ships_delayed: delayed,
            }
        } else {
            SimEvent::SolarStormPassed { day }
        }
    };

    Ok(vec![event])
}
