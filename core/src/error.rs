use crate::types::{ContractId, Credits};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // ── User-input rejections: reported, never fatal, state unchanged ──
    #[error("No idle ship with capacity >= {min_capacity}t")]
    NoCapableShip { min_capacity: u32 },

    #[error("{ship} lacks fuel ({needed} needed, {available} aboard)")]
    InsufficientFuel {
        ship: String,
        needed: u32,
        available: u32,
    },

    #[error("Not enough credits ({needed} needed, {available} available)")]
    InsufficientCredits {
        needed: Credits,
        available: Credits,
    },

    #[error("Keep at least one ship")]
    FleetFloor,

    #[error("Contract {0} not found in the open pool")]
    ContractNotFound(ContractId),

    // ── Invariant violations: programming/config errors ────────────────
    #[error("Cannot choose from an empty pool")]
    EmptyPool,

    #[error("Location catalog too small: {found} entries, need at least 2")]
    InsufficientLocations { found: usize },

    // ── Infrastructure ─────────────────────────────────────────────────
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SimError {
    /// The non-fatal band of the taxonomy. The command boundary
    /// downgrades these to a log line with no state change.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NoCapableShip { .. }
                | Self::InsufficientFuel { .. }
                | Self::InsufficientCredits { .. }
                | Self::FleetFloor
                | Self::ContractNotFound(_)
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
