//! Contract assignment: ship selection, fuel gating and travel time.

use starhaul_core::{
    engine::SimEngine,
    error::SimError,
    rng::ScriptedRng,
    state::Contract,
    store::SimStore,
    SimConfig, SimEvent,
};
use uuid::Uuid;

fn engine_with(rng: ScriptedRng) -> SimEngine {
    let store = SimStore::in_memory().unwrap();
    store.migrate().unwrap();
    SimEngine::with_rng(Box::new(rng), SimConfig::default(), store)
}

fn offer(distance: u32, weight_tons: u32) -> Contract {
    Contract {
        id: Uuid::from_u64_pair(0xA, 0xB),
        origin: "Terra".into(),
        destination: "Mars".into(),
        distance,
        weight_tons,
        deadline_day: 9,
        payout: 1000,
        penalty: 500,
    }
}

#[test]
fn assignment_departs_the_first_capable_ship() {
    let mut engine = engine_with(ScriptedRng::new());
    let contract = offer(50, 10);
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    let events = engine.assign_contract(id).unwrap();

    // fuel = ceil(50*0.4 + 10*0.2) = 22, travel = ceil(50/30) = 2
    let ship = &engine.state.fleet[0];
    assert_eq!(ship.fuel, 78);
    assert_eq!(ship.days_remaining, 2);
    assert_eq!(ship.active_contract.as_ref().map(|c| c.id), Some(id));
    assert!(engine.state.open_contracts.is_empty());
    assert!(matches!(
        events.as_slice(),
        [SimEvent::ShipDeparted { eta_days: 2, .. }]
    ));
}

#[test]
fn reputation_shaves_a_day_off_travel() {
    let mut engine = engine_with(ScriptedRng::new());
    engine.state.reputation = 5;
    let contract = offer(50, 10);
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    engine.assign_contract(id).unwrap();
    assert_eq!(engine.state.fleet[0].days_remaining, 1);
}

#[test]
fn travel_time_never_drops_below_one_day() {
    let mut engine = engine_with(ScriptedRng::new());
    engine.state.reputation = 9;
    let contract = offer(20, 5); // ceil(20/30) = 1, minus bonus
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    engine.assign_contract(id).unwrap();
    assert_eq!(engine.state.fleet[0].days_remaining, 1);
}

#[test]
fn insufficient_fuel_rejects_and_leaves_state_untouched() {
    let mut engine = engine_with(ScriptedRng::new());
    engine.state.fleet[0].fuel = 10;
    let contract = offer(50, 10);
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    let err = engine.assign_contract(id).unwrap_err();
    assert!(matches!(
        err,
        SimError::InsufficientFuel {
            needed: 22,
            available: 10,
            ..
        }
    ));
    assert!(err.is_rejection());

    let ship = &engine.state.fleet[0];
    assert_eq!(ship.fuel, 10);
    assert!(ship.is_idle());
    assert_eq!(engine.state.open_contracts.len(), 1);
}

#[test]
fn oversized_cargo_rejects_with_no_capable_ship() {
    let mut engine = engine_with(ScriptedRng::new());
    let contract = offer(50, 45); // seed ship carries 30t
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    assert!(matches!(
        engine.assign_contract(id),
        Err(SimError::NoCapableShip { min_capacity: 45 })
    ));
    assert_eq!(engine.state.open_contracts.len(), 1);
}

#[test]
fn unknown_contract_id_rejects() {
    let mut engine = engine_with(ScriptedRng::new());
    let ghost = Uuid::from_u64_pair(9, 9);
    assert!(matches!(
        engine.assign_contract(ghost),
        Err(SimError::ContractNotFound(id)) if id == ghost
    ));
}

#[test]
fn command_boundary_downgrades_rejections() {
    use starhaul_core::PlayerCommand;

    let mut engine = engine_with(ScriptedRng::new());
    let ghost = Uuid::from_u64_pair(9, 9);
    let events = engine
        .apply(PlayerCommand::AssignContract { contract_id: ghost })
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn busy_ships_are_skipped_in_favor_of_idle_ones() {
    use starhaul_core::state::ShipSpec;

    let mut engine = engine_with(ScriptedRng::new());
    engine.state.add_ship(ShipSpec {
        name: "ST-102".into(),
        fuel_max: 100,
        hp_max: 100,
        capacity_tons: 40,
    });
    // Seed ship is already en route with its own cargo.
    engine.state.fleet[0].days_remaining = 3;
    engine.state.fleet[0].active_contract = Some(Contract {
        id: Uuid::from_u64_pair(0xC, 0xD),
        ..offer(80, 20)
    });

    let contract = offer(50, 10);
    let id = contract.id;
    engine.state.open_contracts.push(contract);

    engine.assign_contract(id).unwrap();
    assert_ne!(
        engine.state.fleet[0].active_contract.as_ref().map(|c| c.id),
        Some(id)
    );
    assert_eq!(
        engine.state.fleet[1].active_contract.as_ref().map(|c| c.id),
        Some(id)
    );
}
