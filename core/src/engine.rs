//! The simulation engine — owner of the canonical `CompanyState`.
//!
//! RULES:
//!   - Every transition runs to completion before the next; the engine
//!     is single-threaded and never suspends mid-transition.
//!   - All randomness flows through the injected `SimRng`.
//!   - Every state change is described by events, which are rendered
//!     through the log facade and appended to the persistent event log.
//!   - Persistence failures are reported, never allowed to corrupt the
//!     in-memory state; the local state stays authoritative.

use crate::{
    command::PlayerCommand,
    config::SimConfig,
    contracts, economy,
    error::{SimError, SimResult},
    event::{EventLogEntry, SimEvent},
    hazards, missions,
    rng::{SeededRng, SimRng},
    state::{CompanyState, Difficulty},
    store::{ScoreRow, SimStore},
    types::{ContractId, SaveSlot},
};

pub struct SimEngine {
    pub state: CompanyState,
    config: SimConfig,
    rng: Box<dyn SimRng>,
    store: SimStore,
    /// Slot used by autosave after each day advance.
    pub save_slot: SaveSlot,
}

impl SimEngine {
    /// Build a fully wired engine with a seeded production RNG.
    pub fn new(seed: u64, config: SimConfig, store: SimStore) -> Self {
        Self::with_rng(Box::new(SeededRng::new(seed)), config, store)
    }

    /// Build with an explicit RNG. Tests inject `ScriptedRng` here.
    pub fn with_rng(rng: Box<dyn SimRng>, config: SimConfig, store: SimStore) -> Self {
        let state = CompanyState::new(&config);
        Self {
            state,
            config,
            rng,
            store,
            save_slot: 1,
        }
    }

    /// In-memory engine with default config, for tests.
    pub fn build_test(seed: u64) -> SimResult<Self> {
        let store = SimStore::in_memory()?;
        store.migrate()?;
        Ok(Self::new(seed, SimConfig::default(), store))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Advance one simulated day, then autosave if enabled.
    pub fn advance_day(&mut self) -> SimResult<Vec<SimEvent>> {
        let mut events = vec![SimEvent::DayStarted {
            day: self.state.day + 1,
        }];
        events.extend(missions::advance_day(
            &mut self.state,
            &self.config,
            self.rng.as_mut(),
        )?);
        events.push(SimEvent::DayCompleted {
            day: self.state.day,
        });
        self.record(&events)?;

        if self.state.autosave {
            // Fire-and-forget relative to the simulation: a failed
            // save is a log line, not a corrupted session.
            if let Err(e) = self.save_game(self.save_slot) {
                log::warn!("Autosave failed: {e}");
            }
        }
        Ok(events)
    }

    /// Assign an open contract to the first idle ship that can carry
    /// it. Rejections leave the state untouched.
    pub fn assign_contract(&mut self, contract_id: ContractId) -> SimResult<Vec<SimEvent>> {
        let pos = self
            .state
            .open_contracts
            .iter()
            .position(|c| c.id == contract_id)
            .ok_or(SimError::ContractNotFound(contract_id))?;

        let contract = &self.state.open_contracts[pos];
        let ship_idx = self
            .state
            .find_idle_capable(contract.weight_tons)
            .ok_or(SimError::NoCapableShip {
                min_capacity: contract.weight_tons,
            })?;

        let fuel_needed = (contract.distance as f64 * self.config.fuel_per_distance
            + contract.weight_tons as f64 * self.config.fuel_per_ton)
            .ceil() as u32;
        let ship = &self.state.fleet[ship_idx];
        if ship.fuel < fuel_needed {
            return Err(SimError::InsufficientFuel {
                ship: ship.name.clone(),
                needed: fuel_needed,
                available: ship.fuel,
            });
        }

        let contract = self.state.open_contracts.remove(pos);
        let divisor = self.config.travel_days_divisor;
        let base_travel = contract.distance.div_ceil(divisor);
        let rep_bonus = u32::from(self.state.reputation >= self.config.rep_speed_bonus_threshold);
        let eta_days = (base_travel.saturating_sub(rep_bonus)).max(1);

        let ship = &mut self.state.fleet[ship_idx];
        ship.fuel -= fuel_needed;
        ship.days_remaining = eta_days;
        let event = SimEvent::ShipDeparted {
            day: self.state.day,
            ship_id: ship.id,
            ship: ship.name.clone(),
            contract_id: contract.id,
            origin: contract.origin.clone(),
            destination: contract.destination.clone(),
            eta_days,
        };
        ship.active_contract = Some(contract);

        let events = vec![event];
        self.record(&events)?;
        Ok(events)
    }

    /// Replace the open pool with `n` fresh offers.
    pub fn refresh_contracts(&mut self, n: usize) -> SimResult<Vec<SimEvent>> {
        self.state.open_contracts =
            contracts::refresh_pool(&self.config, self.state.day, n, self.rng.as_mut())?;
        let events = vec![SimEvent::ContractsRefreshed {
            day: self.state.day,
            count: n,
        }];
        self.record(&events)?;
        Ok(events)
    }

    pub fn refuel_all(&mut self) -> SimResult<Vec<SimEvent>> {
        let events = economy::refuel_all(&mut self.state, &self.config);
        self.record(&events)?;
        Ok(events)
    }

    pub fn repair_all(&mut self) -> SimResult<Vec<SimEvent>> {
        let events = economy::repair_all(&mut self.state, &self.config);
        self.record(&events)?;
        Ok(events)
    }

    pub fn buy_ship(&mut self) -> SimResult<Vec<SimEvent>> {
        let events = economy::buy_ship(&mut self.state, &self.config, self.rng.as_mut())?;
        self.record(&events)?;
        Ok(events)
    }

    pub fn sell_ship(&mut self) -> SimResult<Vec<SimEvent>> {
        let events = economy::sell_ship(&mut self.state, &self.config)?;
        self.record(&events)?;
        Ok(events)
    }

    pub fn trigger_random_event(&mut self) -> SimResult<Vec<SimEvent>> {
        let events = hazards::trigger_random_event(&mut self.state, &self.config, self.rng.as_mut())?;
        self.record(&events)?;
        Ok(events)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> SimResult<Vec<SimEvent>> {
        self.state.difficulty = difficulty;
        let events = vec![SimEvent::DifficultyChanged {
            day: self.state.day,
            difficulty,
        }];
        self.record(&events)?;
        Ok(events)
    }

    pub fn set_autosave(&mut self, enabled: bool) -> SimResult<Vec<SimEvent>> {
        self.state.autosave = enabled;
        let events = vec![SimEvent::AutosaveToggled {
            day: self.state.day,
            enabled,
        }];
        self.record(&events)?;
        Ok(events)
    }

    // ── Persistence gateway ────────────────────────────────────────

    pub fn save_game(&self, slot: SaveSlot) -> SimResult<()> {
        let json = serde_json::to_string(&self.state)?;
        self.store.save_state(slot, &json, self.state.day)?;
        log::info!("Day {}: {}", self.state.day, SimEvent::GameSaved {
            day: self.state.day,
            slot,
        });
        Ok(())
    }

    /// Restore a session from `slot`. Returns false for an empty slot,
    /// which is valid "no data", not an error.
    pub fn load_game(&mut self, slot: SaveSlot) -> SimResult<bool> {
        let Some(json) = self.store.load_state(slot)? else {
            log::info!("Empty slot {slot}.");
            return Ok(false);
        };
        self.state = serde_json::from_str(&json)?;
        let events = vec![SimEvent::GameLoaded {
            day: self.state.day,
            slot,
        }];
        self.record(&events)?;
        Ok(true)
    }

    // ── Leaderboard gateway ────────────────────────────────────────

    pub fn submit_score(&mut self, name: &str) -> SimResult<Vec<ScoreRow>> {
        let name = sanitize_player_name(name);
        let profit = self.state.profit();
        self.store.submit_score(&name, profit)?;
        let events = vec![SimEvent::ScoreSubmitted {
            day: self.state.day,
            name,
            profit,
        }];
        self.record(&events)?;
        self.store.top_scores(10)
    }

    pub fn leaderboard(&self) -> SimResult<Vec<ScoreRow>> {
        self.store.top_scores(10)
    }

    // ── Command boundary ───────────────────────────────────────────

    /// Dispatch one UI intent. Rejection-class errors are reported on
    /// the log channel and leave the state unchanged; infrastructure
    /// errors propagate.
    pub fn apply(&mut self, cmd: PlayerCommand) -> SimResult<Vec<SimEvent>> {
        let result = match cmd {
            PlayerCommand::NextDay => self.advance_day(),
            PlayerCommand::AssignContract { contract_id } => self.assign_contract(contract_id),
            PlayerCommand::RefreshContracts { count } => self.refresh_contracts(count),
            PlayerCommand::RefuelAll => self.refuel_all(),
            PlayerCommand::RepairAll => self.repair_all(),
            PlayerCommand::BuyShip => self.buy_ship(),
            PlayerCommand::SellShip => self.sell_ship(),
            PlayerCommand::TriggerEvent => self.trigger_random_event(),
            PlayerCommand::SetDifficulty { difficulty } => self.set_difficulty(difficulty),
            PlayerCommand::SetAutosave { enabled } => self.set_autosave(enabled),
            PlayerCommand::SaveGame { slot } => self.save_game(slot).map(|()| Vec::new()),
            PlayerCommand::LoadGame { slot } => self.load_game(slot).map(|_| Vec::new()),
            PlayerCommand::SubmitScore { name } => {
                self.submit_score(&name).map(|_| Vec::new())
            }
        };
        match result {
            Err(e) if e.is_rejection() => {
                log::warn!("Day {}: {e}", self.state.day);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    // ── Event log access ───────────────────────────────────────────

    /// Query stored events for one day. Used by the determinism test
    /// and replay tooling.
    pub fn store_events_for_day(&self, day: u32) -> SimResult<Vec<EventLogEntry>> {
        self.store.events_for_day(day)
    }

    fn record(&self, events: &[SimEvent]) -> SimResult<()> {
        for event in events {
            log::info!("Day {}: {event}", self.state.day);
            let entry = EventLogEntry {
                id: None,
                day: self.state.day,
                event_type: event.type_name().to_string(),
                payload: serde_json::to_string(event)?,
            };
            self.store.append_event(&entry)?;
        }
        Ok(())
    }
}

/// Original backend rules: trim, cap at 24 chars, default Anonymous.
fn sanitize_player_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Anonymous".to_string();
    }
    trimmed.chars().take(24).collect()
}
