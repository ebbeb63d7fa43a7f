use crate::{
    state::Difficulty,
    types::{ContractId, SaveSlot},
};
use serde::{Deserialize, Serialize};

/// All dispatcher-issued commands — the full set of UI intents.
/// Variants are added as the surface grows, never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    NextDay,
    AssignContract { contract_id: ContractId },
    RefreshContracts { count: usize },
    RefuelAll,
    RepairAll,
    BuyShip,
    SellShip,
    TriggerEvent,
    SetDifficulty { difficulty: Difficulty },
    SetAutosave { enabled: bool },
    SaveGame { slot: SaveSlot },
    LoadGame { slot: SaveSlot },
    SubmitScore { name: String },
}
