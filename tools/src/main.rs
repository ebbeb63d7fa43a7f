//! dispatch-runner: headless autopilot for the freight simulation.
//!
//! Usage:
//!   dispatch-runner --seed 12345 --days 60 --db run.db
//!   dispatch-runner --seed 12345 --days 90 --hardcore --name "Iron Route"

use anyhow::Result;
use starhaul_core::{
    engine::SimEngine, state::Difficulty, store::SimStore, PlayerCommand, SimConfig,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let days = parse_arg(&args, "--days", 30u32);
    let pool = parse_arg(&args, "--pool", 5usize);
    let hardcore = args.iter().any(|a| a == "--hardcore");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let name = args
        .windows(2)
        .find(|w| w[0] == "--name")
        .map(|w| w[1].as_str())
        .unwrap_or("Autopilot");
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SimConfig::load(&w[1])?,
        None => SimConfig::default(),
    };

    println!("StarHaul — dispatch-runner");
    println!("  seed:     {seed}");
    println!("  days:     {days}");
    println!("  db:       {db}");
    println!("  hardcore: {hardcore}");
    println!();

    let store = SimStore::open(db)?;
    store.migrate()?;
    let mut engine = SimEngine::new(seed, config, store);
    if hardcore {
        engine.apply(PlayerCommand::SetDifficulty {
            difficulty: Difficulty::Hardcore,
        })?;
    }

    run_autopilot(&mut engine, days, pool)?;

    let board = engine.submit_score(name)?;
    print_summary(&engine, days, &board);
    Ok(())
}

/// A simple dispatcher policy: keep the pool stocked, put every idle
/// ship to work, keep the fleet fueled and patched, grow when flush.
fn run_autopilot(engine: &mut SimEngine, days: u32, pool: usize) -> Result<()> {
    for _ in 0..days {
        if engine.state.open_contracts.is_empty() {
            engine.apply(PlayerCommand::RefreshContracts { count: pool })?;
        }

        // Offer every open contract; rejections are logged and skipped.
        let offers: Vec<_> = engine.state.open_contracts.iter().map(|c| c.id).collect();
        for contract_id in offers {
            engine.apply(PlayerCommand::AssignContract { contract_id })?;
        }

        engine.apply(PlayerCommand::RefuelAll)?;
        engine.apply(PlayerCommand::RepairAll)?;
        if engine.state.credits >= 2 * engine.config().ship_price {
            engine.apply(PlayerCommand::BuyShip)?;
        }

        engine.apply(PlayerCommand::NextDay)?;
        // World events land every fourth day on the autopilot cadence.
        if engine.state.day % 4 == 0 {
            engine.apply(PlayerCommand::TriggerEvent)?;
        }
    }
    Ok(())
}

fn print_summary(engine: &SimEngine, days: u32, board: &[starhaul_core::store::ScoreRow]) {
    let state = &engine.state;
    let busy = state.fleet.iter().filter(|s| !s.is_idle()).count();

    println!("=== RUN SUMMARY ===");
    println!("  days run:    {days}");
    println!("  final day:   {}", state.day);
    println!("  credits:     {}", state.credits);
    println!("  reputation:  {}", state.reputation);
    println!("  fuel price:  {}", state.fuel_price);
    println!("  fleet:       {} ship(s), {busy} en route", state.fleet.len());
    for ship in &state.fleet {
        println!(
            "    {} | fuel {}/{} | hp {}/{} | cap {}t",
            ship.name, ship.fuel, ship.fuel_max, ship.hp, ship.hp_max, ship.capacity_tons
        );
    }

    println!();
    println!("=== LEADERBOARD (Top 10) ===");
    if board.is_empty() {
        println!("  (No scores yet)");
    } else {
        for (rank, row) in board.iter().enumerate() {
            println!("  {:>2}. {:<24} {}", rank + 1, row.name, row.profit);
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
