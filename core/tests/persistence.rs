//! Save slots, leaderboard and the event log.

use starhaul_core::{store::SimStore, PlayerCommand, SimEngine};

#[test]
fn save_and_load_round_trips_the_whole_state() {
    let mut engine = SimEngine::build_test(3).unwrap();

    engine
        .apply(PlayerCommand::RefreshContracts { count: 4 })
        .unwrap();
    let offers: Vec<_> = engine.state.open_contracts.iter().map(|c| c.id).collect();
    for contract_id in offers {
        engine
            .apply(PlayerCommand::AssignContract { contract_id })
            .unwrap();
    }
    engine.apply(PlayerCommand::NextDay).unwrap();
    engine.apply(PlayerCommand::NextDay).unwrap();

    let snapshot = engine.state.clone();
    engine.save_game(2).unwrap();

    // Drift the session, then restore.
    engine.apply(PlayerCommand::NextDay).unwrap();
    engine.apply(PlayerCommand::RefuelAll).unwrap();
    assert_ne!(engine.state, snapshot);

    assert!(engine.load_game(2).unwrap());
    assert_eq!(engine.state, snapshot);
}

#[test]
fn saving_twice_overwrites_the_slot() {
    let mut engine = SimEngine::build_test(5).unwrap();
    // Autosave also writes slot 1 on every day advance; park it.
    engine
        .apply(PlayerCommand::SetAutosave { enabled: false })
        .unwrap();

    engine.save_game(1).unwrap();
    engine.apply(PlayerCommand::NextDay).unwrap();
    let later = engine.state.clone();
    engine.save_game(1).unwrap();

    engine.apply(PlayerCommand::NextDay).unwrap();
    assert!(engine.load_game(1).unwrap());
    assert_eq!(engine.state, later);
}

#[test]
fn loading_an_empty_slot_is_no_data_not_an_error() {
    let mut engine = SimEngine::build_test(5).unwrap();
    let before = engine.state.clone();

    assert!(!engine.load_game(9).unwrap());
    assert_eq!(engine.state, before);
}

#[test]
fn leaderboard_ranks_by_profit_with_ties_in_submission_order() {
    let store = SimStore::in_memory().unwrap();
    store.migrate().unwrap();

    store.submit_score("Alpha", 500).unwrap();
    store.submit_score("Bravo", 900).unwrap();
    store.submit_score("Chase", 500).unwrap();

    let top = store.top_scores(10).unwrap();
    let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bravo", "Alpha", "Chase"]);

    let capped = store.top_scores(2).unwrap();
    assert_eq!(capped.len(), 2);
}

#[test]
fn blank_player_names_become_anonymous() {
    let mut engine = SimEngine::build_test(5).unwrap();
    let board = engine.submit_score("   ").unwrap();
    assert_eq!(board[0].name, "Anonymous");
    assert_eq!(board[0].profit, engine.state.profit());
}

#[test]
fn player_names_are_trimmed_and_capped() {
    let mut engine = SimEngine::build_test(5).unwrap();
    let board = engine
        .submit_score("  The Very Long Haulage Company Ltd  ")
        .unwrap();
    assert_eq!(board[0].name.chars().count(), 24);
    assert_eq!(board[0].name, "The Very Long Haulage Co");
}

#[test]
fn every_transition_lands_in_the_event_log() {
    let mut engine = SimEngine::build_test(11).unwrap();
    engine
        .apply(PlayerCommand::RefreshContracts { count: 3 })
        .unwrap();
    engine.apply(PlayerCommand::NextDay).unwrap();

    let day1 = engine.store_events_for_day(1).unwrap();
    assert!(day1.iter().any(|e| e.event_type == "contracts_refreshed"));

    let day2 = engine.store_events_for_day(2).unwrap();
    assert!(day2.iter().any(|e| e.event_type == "day_started"));
    assert!(day2.iter().any(|e| e.event_type == "day_completed"));
}
