//! Simulation tunables.
//!
//! Every numeric rule the engine applies lives here, so a run can be
//! re-tuned without touching transition code. `SimConfig::default()`
//! carries the canonical values; `load()` reads a JSON override file.

use serde::{Deserialize, Serialize};

/// Per-difficulty magnitude table. Hardcore widens risk and reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Per-day breakdown probability for each busy ship.
    pub breakdown_chance: f64,
    /// Upper bound of breakdown hull damage (lower bound is shared).
    pub breakdown_damage_max: u32,
    /// On-time settlement bonus as a fraction of payout.
    pub on_time_bonus_rate: f64,
    /// Multiplier applied to the contract penalty when late.
    pub late_penalty_multiplier: f64,
    /// Fuel surge price delta upper bound.
    pub fuel_surge_max: i64,
    /// Customs fine upper bound.
    pub customs_fine_max: i64,
    /// Government grant upper bound.
    pub grant_max: i64,
    /// Piracy credit loss upper bound.
    pub piracy_loss_max: i64,
    /// Piracy hull damage upper bound.
    pub piracy_damage_max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    // ── World ──────────────────────────────────────────────────────
    /// Location catalog. Needs at least 2 entries to generate routes.
    pub locations: Vec<String>,

    // ── Company seed state ─────────────────────────────────────────
    pub starting_credits: i64,
    pub starting_fuel_price: i64,
    pub seed_ship_capacity: u32,

    // ── Contract generation ────────────────────────────────────────
    pub distance_min: i64,
    pub distance_max: i64,
    pub weight_min: i64,
    pub weight_max: i64,
    pub deadline_offset_min: i64,
    pub deadline_offset_max: i64,
    pub rate_per_distance: i64,
    pub rate_per_ton: i64,
    pub penalty_rate: f64,
    pub default_pool_size: usize,

    // ── Assignment ─────────────────────────────────────────────────
    pub fuel_per_distance: f64,
    pub fuel_per_ton: f64,
    pub travel_days_divisor: u32,
    /// Reputation at or above this shaves one day off travel time.
    pub rep_speed_bonus_threshold: u32,

    // ── Daily resolution ───────────────────────────────────────────
    pub fuel_price_drift_chance: f64,
    pub fuel_price_drift_min: i64,
    pub fuel_price_drift_max: i64,
    pub fuel_price_floor: i64,
    pub breakdown_damage_min: u32,

    // ── Economy ────────────────────────────────────────────────────
    pub ship_price: i64,
    pub ship_sale_price: i64,
    pub repair_cost_per_hp: i64,
    pub new_ship_capacity_min: i64,
    pub new_ship_capacity_max: i64,
    pub new_ship_fuel_max: u32,
    pub new_ship_hp_max: u32,

    // ── World events ───────────────────────────────────────────────
    pub fuel_surge_min: i64,
    pub customs_fine_min: i64,
    pub grant_min: i64,
    pub piracy_loss_min: i64,
    pub piracy_damage_min: u32,

    pub normal: DifficultyParams,
    pub hardcore: DifficultyParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            locations: [
                "Terra",
                "Luna",
                "Mars",
                "Ganymede",
                "Europa",
                "Titan",
                "Ceres",
                "Vesta",
                "Kepler-22b",
                "Proxima-b",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),

            starting_credits: 5000,
            starting_fuel_price: 4,
            seed_ship_capacity: 30,

            distance_min: 20,
            distance_max: 220,
            weight_min: 5,
            weight_max: 45,
            deadline_offset_min: 2,
            deadline_offset_max: 8,
            rate_per_distance: 8,
            rate_per_ton: 15,
            penalty_rate: 0.5,
            default_pool_size: 5,

            fuel_per_distance: 0.4,
            fuel_per_ton: 0.2,
            travel_days_divisor: 30,
            rep_speed_bonus_threshold: 5,

            fuel_price_drift_chance: 0.5,
            fuel_price_drift_min: -1,
            fuel_price_drift_max: 2,
            fuel_price_floor: 2,
            breakdown_damage_min: 5,

            ship_price: 2000,
            ship_sale_price: 1200,
            repair_cost_per_hp: 5,
            new_ship_capacity_min: 25,
            new_ship_capacity_max: 45,
            new_ship_fuel_max: 100,
            new_ship_hp_max: 100,

            fuel_surge_min: 2,
            customs_fine_min: 120,
            grant_min: 160,
            piracy_loss_min: 100,
            piracy_damage_min: 8,

            normal: DifficultyParams {
                breakdown_chance: 0.15,
                breakdown_damage_max: 18,
                on_time_bonus_rate: 0.0,
                late_penalty_multiplier: 1.0,
                fuel_surge_max: 4,
                customs_fine_max: 360,
                grant_max: 520,
                piracy_loss_max: 350,
                piracy_damage_max: 18,
            },
            hardcore: DifficultyParams {
                breakdown_chance: 0.22,
                breakdown_damage_max: 28,
                on_time_bonus_rate: 0.15,
                late_penalty_multiplier: 1.25,
                fuel_surge_max: 6,
                customs_fine_max: 600,
                // Lower than the normal-mode ceiling; kept as-is on
                // purpose, see DESIGN.md.
                grant_max: 420,
                piracy_loss_max: 600,
                piracy_damage_max: 30,
            },
        }
    }
}

impl SimConfig {
    /// Load a full config from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }
}
