//! Simulation events — everything a transition did to the state.
//!
//! RULE: Transitions communicate outcomes ONLY through events. The
//! engine appends each event to the persistent log and renders its
//! `Display` form through the `log` facade; the UI layer consumes the
//! same stream. Variants are added as rules grow — never removed or
//! reordered.

use crate::{
    state::Difficulty,
    types::{ContractId, Credits, Day, Location, SaveSlot, ShipId},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine frame ───────────────────────────────
    DayStarted {
        day: Day,
    },
    DayCompleted {
        day: Day,
    },

    // ── Contracts ──────────────────────────────────
    ContractsRefreshed {
        day: Day,
        count: usize,
    },
    ShipDeparted {
        day: Day,
        ship_id: ShipId,
        ship: String,
        contract_id: ContractId,
        origin: Location,
        destination: Location,
        eta_days: u32,
    },

    // ── Daily resolution ───────────────────────────
    FuelPriceDrift {
        day: Day,
        delta: i64,
        price: i64,
    },
    BreakdownSuffered {
        day: Day,
        ship_id: ShipId,
        ship: String,
        damage: u32,
        hp_left: u32,
    },
    DeliveredOnTime {
        day: Day,
        ship_id: ShipId,
        ship: String,
        contract_id: ContractId,
        amount: Credits,
        reputation: u32,
    },
    DeliveredLate {
        day: Day,
        ship_id: ShipId,
        ship: String,
        contract_id: ContractId,
        penalty: Credits,
        reputation: u32,
    },

    // ── Economy ────────────────────────────────────
    FleetRefueled {
        day: Day,
        units: u32,
        spent: Credits,
    },
    FleetRepaired {
        day: Day,
        spent: Credits,
    },
    ShipPurchased {
        day: Day,
        ship_id: ShipId,
        ship: String,
        capacity_tons: u32,
        price: Credits,
    },
    ShipSold {
        day: Day,
        ship: String,
        price: Credits,
    },

    // ── World events ───────────────────────────────
    FuelSurge {
        day: Day,
        delta: i64,
        price: i64,
    },
    CustomsFine {
        day: Day,
        amount: Credits,
        credits: Credits,
    },
    GovernmentGrant {
        day: Day,
        amount: Credits,
        credits: Credits,
    },
    PirateAmbush {
        day: Day,
        ship: String,
        credits_lost: Credits,
        damage: u32,
    },
    SolarStorm {
        day: Day,
        ships_delayed: usize,
    },
    SolarStormPassed {
        day: Day,
    },

    // ── Session control ────────────────────────────
    DifficultyChanged {
        day: Day,
        difficulty: Difficulty,
    },
    AutosaveToggled {
        day: Day,
        enabled: bool,
    },
    GameSaved {
        day: Day,
        slot: SaveSlot,
    },
    GameLoaded {
        day: Day,
        slot: SaveSlot,
    },
    ScoreSubmitted {
        day: Day,
        name: String,
        profit: Credits,
    },
}

impl SimEvent {
    /// Stable string name, used for the event_type column of the log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::DayStarted { .. } => "day_started",
            Self::DayCompleted { .. } => "day_completed",
            Self::ContractsRefreshed { .. } => "contracts_refreshed",
            Self::ShipDeparted { .. } => "ship_departed",
            Self::FuelPriceDrift { .. } => "fuel_price_drift",
            Self::BreakdownSuffered { .. } => "breakdown_suffered",
            Self::DeliveredOnTime { .. } => "delivered_on_time",
            Self::DeliveredLate { .. } => "delivered_late",
            Self::FleetRefueled { .. } => "fleet_refueled",
            Self::FleetRepaired { .. } => "fleet_repaired",
            Self::ShipPurchased { .. } => "ship_purchased",
            Self::ShipSold { .. } => "ship_sold",
            Self::FuelSurge { .. } => "fuel_surge",
            Self::CustomsFine { .. } => "customs_fine",
            Self::GovernmentGrant { .. } => "government_grant",
            Self::PirateAmbush { .. } => "pirate_ambush",
            Self::SolarStorm { .. } => "solar_storm",
            Self::SolarStormPassed { .. } => "solar_storm_passed",
            Self::DifficultyChanged { .. } => "difficulty_changed",
            Self::AutosaveToggled { .. } => "autosave_toggled",
            Self::GameSaved { .. } => "game_saved",
            Self::GameLoaded { .. } => "game_loaded",
            Self::ScoreSubmitted { .. } => "score_submitted",
        }
    }
}

/// Human log lines, phrased the way the dispatcher console prints them.
impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayStarted { day } => write!(f, "Day {day} begins."),
            Self::DayCompleted { day } => write!(f, "Day {day} complete."),
            Self::ContractsRefreshed { count, .. } => {
                write!(f, "{count} new contracts posted.")
            }
            Self::ShipDeparted {
                ship,
                origin,
                destination,
                eta_days,
                ..
            } => write!(f, "{ship} departed {origin}→{destination} (ETA {eta_days}d)."),
            Self::FuelPriceDrift { delta, price, .. } => {
                write!(f, "Fuel price drifted {delta:+} to {price}.")
            }
            Self::BreakdownSuffered { ship, damage, .. } => {
                write!(f, "{ship} suffered a breakdown (-{damage} HP).")
            }
            Self::DeliveredOnTime { ship, amount, .. } => {
                write!(f, "{ship} delivered on time. +{amount} cr, +1 rep.")
            }
            Self::DeliveredLate { ship, penalty, .. } => {
                write!(f, "{ship} delivered late. -{penalty} cr, -1 rep.")
            }
            Self::FleetRefueled { spent, .. } => {
                write!(f, "Refueled fleet for {spent} credits.")
            }
            Self::FleetRepaired { spent, .. } => {
                write!(f, "Repaired fleet for {spent} credits.")
            }
            Self::ShipPurchased {
                ship,
                capacity_tons,
                ..
            } => write!(f, "Bought new ship {ship} (cap {capacity_tons}t)."),
            Self::ShipSold { ship, price, .. } => {
                write!(f, "Sold {ship} for {price} credits.")
            }
            Self::FuelSurge { delta, .. } => write!(f, "Fuel price surge +{delta}."),
            Self::CustomsFine { amount, .. } => {
                write!(f, "Customs inspection fine -{amount}.")
            }
            Self::GovernmentGrant { amount, .. } => {
                write!(f, "Government grant +{amount}.")
            }
            Self::PirateAmbush {
                ship,
                credits_lost,
                damage,
                ..
            } => write!(
                f,
                "Pirate ambush! Lost {credits_lost} credits, {ship} took -{damage} HP."
            ),
            Self::SolarStorm { ships_delayed, .. } => {
                write!(f, "Solar storm! Travel delayed for {ships_delayed} ship(s).")
            }
            Self::SolarStormPassed { .. } => write!(f, "Solar storm passed harmlessly."),
            Self::DifficultyChanged { difficulty, .. } => {
                let label = if difficulty.is_hardcore() { "ON" } else { "OFF" };
                write!(f, "Hardcore mode {label}.")
            }
            Self::AutosaveToggled { enabled, .. } => {
                let label = if *enabled { "enabled" } else { "disabled" };
                write!(f, "Auto-save {label}.")
            }
            Self::GameSaved { slot, .. } => write!(f, "Game saved in slot {slot}."),
            Self::GameLoaded { slot, .. } => write!(f, "Game loaded from slot {slot}."),
            Self::ScoreSubmitted { name, profit, .. } => {
                write!(f, "Score submitted for {name}: {profit}.")
            }
        }
    }
}

/// One row of the persisted event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: Option<i64>,
    pub day: Day,
    pub event_type: String,
    pub payload: String, // JSON-serialized SimEvent
}
