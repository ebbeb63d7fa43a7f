//! Fleet economy — fuel, repairs, hull purchases and sales.
//!
//! All operations are gated by available credits and processed in
//! fleet order, so earlier hulls get priority when credits are scarce.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    event::SimEvent,
    rng::SimRng,
    state::{ship_name, CompanyState, ShipSpec},
};

/// Top up every ship, fleet order, as far as credits allow.
/// Partial fills are fine; a broke company simply buys nothing.
pub fn refuel_all(state: &mut CompanyState, _config: &SimConfig) -> Vec<SimEvent> {
    let mut units: u32 = 0;
    let mut spent: i64 = 0;
    for idx in 0..state.fleet.len() {
        let need = state.fleet[idx].fuel_max - state.fleet[idx].fuel;
        let budget = (state.credits / state.fuel_price).max(0);
        let affordable = (need as i64).min(budget);
        if affordable > 0 {
            state.fleet[idx].fuel += affordable as u32;
            let cost = affordable * state.fuel_price;
            state.credits -= cost;
            units += affordable as u32;
            spent += cost;
        }
    }
    vec![SimEvent::FleetRefueled {
        day: state.day,
        units,
        spent,
    }]
}

/// Fully repair each ship that can be fully paid for; a ship that
/// cannot be brought back to max HP is skipped entirely.
pub fn repair_all(state: &mut CompanyState, config: &SimConfig) -> Vec<SimEvent> {
    let mut spent: i64 = 0;
    for idx in 0..state.fleet.len() {
        let need = (state.fleet[idx].hp_max - state.fleet[idx].hp) as i64;
        let cost = need * config.repair_cost_per_hp;
        if need > 0 && state.credits >= cost {
            state.fleet[idx].hp = state.fleet[idx].hp_max;
            state.credits -= cost;
            spent += cost;
        }
    }
    vec![SimEvent::FleetRepaired {
        day: state.day,
        spent,
    }]
}

/// Buy a new hull at the flat yard price.
pub fn buy_ship(
    state: &mut CompanyState,
    config: &SimConfig,
    rng: &mut dyn SimRng,
) -> SimResult<Vec<SimEvent>> {
    if state.credits < config.ship_price {
        return Err(SimError::InsufficientCredits {
            needed: config.ship_price,
            available: state.credits,
        });
    }
    state.credits -= config.ship_price;
    let capacity =
        rng.uniform_int(config.new_ship_capacity_min, config.new_ship_capacity_max) as u32;
    let id = state.add_ship(ShipSpec {
        name: String::new(),
        fuel_max: config.new_ship_fuel_max,
        hp_max: config.new_ship_hp_max,
        capacity_tons: capacity,
    });
    let name = ship_name(id);
    state.fleet.last_mut().expect("just pushed").name = name.clone();
    Ok(vec![SimEvent::ShipPurchased {
        day: state.day,
        ship_id: id,
        ship: name,
        capacity_tons: capacity,
        price: config.ship_price,
    }])
}

/// Sell the newest hull at the flat scrapyard price. The payout does
/// not depend on the ship — a deliberate simplification.
pub fn sell_ship(state: &mut CompanyState, config: &SimConfig) -> SimResult<Vec<SimEvent>> {
    let sold = state.remove_last()?;
    state.credits += config.ship_sale_price;
    Ok(vec![SimEvent::ShipSold {
        day: state.day,
        ship: sold.name,
        price: config.ship_sale_price,
    }])
}
