//! Shared primitive types used across the entire simulation.

/// A simulation day. The company starts on day 1.
pub type Day = u32;

/// Stable, monotonically assigned ship identifier.
pub type ShipId = u32;

/// Company credits. Signed: late-delivery penalties may push the
/// balance below zero; fines clamp at zero instead.
pub type Credits = i64;

/// A delivery contract identifier.
pub type ContractId = uuid::Uuid;

/// A named point in the location catalog.
pub type Location = String;

/// A persistence bucket for one saved session.
pub type SaveSlot = u32;
