//! Deterministic turn-based freight simulation.
//!
//! The engine owns a single `CompanyState` aggregate and advances it
//! through explicit transitions: day resolution, contract assignment,
//! fleet economy and random world events. Every transition reports its
//! outcome as `SimEvent`s, which are appended to a SQLite-backed event
//! log; a seeded run replays byte-for-byte.

pub mod command;
pub mod config;
pub mod contracts;
pub mod economy;
pub mod engine;
pub mod error;
pub mod event;
pub mod hazards;
pub mod missions;
pub mod rng;
pub mod state;
pub mod store;
pub mod types;

pub use command::PlayerCommand;
pub use config::SimConfig;
pub use engine::SimEngine;
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use state::{CompanyState, Difficulty};
pub use store::SimStore;
