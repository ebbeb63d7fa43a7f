//! The canonical company state and its constituent records.
//!
//! RULE: `CompanyState` is the single aggregate root. Transitions in
//! `missions`, `economy`, `hazards` and the engine mutate it in place;
//! nothing else holds mutable references to it. The whole struct
//! round-trips losslessly through JSON for save slots.

use crate::{
    config::SimConfig,
    types::{ContractId, Credits, Day, Location, ShipId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Normal,
    Hardcore,
}

impl Difficulty {
    pub fn is_hardcore(&self) -> bool {
        matches!(self, Self::Hardcore)
    }
}

/// An offered point-to-point cargo delivery. Immutable once generated;
/// assignment moves it from the open pool onto a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub origin: Location,
    pub destination: Location,
    pub distance: u32,
    pub weight_tons: u32,
    pub deadline_day: Day,
    pub payout: Credits,
    pub penalty: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    pub fuel: u32,
    pub fuel_max: u32,
    pub hp: u32,
    pub hp_max: u32,
    pub capacity_tons: u32,
    pub days_remaining: u32,
    pub active_contract: Option<Contract>,
}

impl Ship {
    pub fn is_idle(&self) -> bool {
        self.days_remaining == 0
    }
}

/// Blueprint for a ship entering the fleet; the ledger assigns the id.
#[derive(Debug, Clone)]
pub struct ShipSpec {
    pub name: String,
    pub fuel_max: u32,
    pub hp_max: u32,
    pub capacity_tons: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyState {
    pub day: Day,
    pub credits: Credits,
    pub reputation: u32,
    pub fuel_price: i64,
    /// Insertion order = purchase order. Never empty.
    pub fleet: Vec<Ship>,
    pub next_ship_id: ShipId,
    pub open_contracts: Vec<Contract>,
    pub difficulty: Difficulty,
    pub autosave: bool,
}

impl CompanyState {
    /// Fresh session: one seed ship, day 1.
    pub fn new(config: &SimConfig) -> Self {
        let mut state = Self {
            day: 1,
            credits: config.starting_credits,
            reputation: 0,
            fuel_price: config.starting_fuel_price,
            fleet: Vec::new(),
            next_ship_id: 1,
            open_contracts: Vec::new(),
            difficulty: Difficulty::Normal,
            autosave: true,
        };
        state.add_ship(ShipSpec {
            name: String::new(), // replaced below with the id-based name
            fuel_max: config.new_ship_fuel_max,
            hp_max: config.new_ship_hp_max,
            capacity_tons: config.seed_ship_capacity,
        });
        let seed = &mut state.fleet[0];
        seed.name = ship_name(seed.id);
        state
    }

    // ── Fleet Ledger ───────────────────────────────────────────────

    /// Append a ship at the end of the fleet, assigning the next id.
    pub fn add_ship(&mut self, spec: ShipSpec) -> ShipId {
        let id = self.next_ship_id;
        self.next_ship_id += 1;
        self.fleet.push(Ship {
            id,
            name: spec.name,
            fuel: spec.fuel_max,
            fuel_max: spec.fuel_max,
            hp: spec.hp_max,
            hp_max: spec.hp_max,
            capacity_tons: spec.capacity_tons,
            days_remaining: 0,
            active_contract: None,
        });
        id
    }

    /// Remove the last ship in fleet order. At least one ship must
    /// always remain.
    pub fn remove_last(&mut self) -> crate::error::SimResult<Ship> {
        if self.fleet.len() < 2 {
            return Err(crate::error::SimError::FleetFloor);
        }
        Ok(self.fleet.pop().expect("fleet checked non-empty"))
    }

    /// First-fit: the first ship in fleet order that is idle and can
    /// carry `min_capacity` tons. First-fit (not best-fit) is part of
    /// the determinism contract.
    pub fn find_idle_capable(&self, min_capacity: u32) -> Option<usize> {
        self.fleet
            .iter()
            .position(|s| s.is_idle() && s.capacity_tons >= min_capacity)
    }

    /// Total profit figure reported to the leaderboard.
    pub fn profit(&self) -> Credits {
        self.credits
    }
}

/// Hull registry naming scheme for the ST line.
pub fn ship_name(id: ShipId) -> String {
    format!("ST-{}", 100 + id)
}
