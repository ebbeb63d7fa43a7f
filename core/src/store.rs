//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database. The engine calls store
//! methods; transition code never sees SQL. The store backs three
//! concerns: save slots (opaque JSON snapshots of `CompanyState`),
//! the leaderboard, and the append-only event log used by replay and
//! determinism checks.

use crate::{
    error::SimResult,
    event::EventLogEntry,
    types::{Credits, Day, SaveSlot},
};
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS save_slot (
    slot        INTEGER PRIMARY KEY,
    state_json  TEXT NOT NULL,
    saved_day   INTEGER NOT NULL,
    saved_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS score (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    profit       INTEGER NOT NULL,
    submitted_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_score_profit ON score(profit DESC);

CREATE TABLE IF NOT EXISTS event_log (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    day        INTEGER NOT NULL,
    event_type TEXT NOT NULL,
    payload    TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_event_log_day ON event_log(day);
";

/// One leaderboard row, ranked by profit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub name: String,
    pub profit: Credits,
}

pub struct SimStore {
    conn: Connection,
}

impl SimStore {
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open(path)?;
        // WAL only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        Ok(Self {
            conn: Connection::open(":memory:")?,
        })
    }

    /// Apply the schema. Idempotent.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ── Save slots ─────────────────────────────────────────────────

    /// Upsert the serialized state into `slot`.
    pub fn save_state(&self, slot: SaveSlot, state_json: &str, day: Day) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO save_slot (slot, state_json, saved_day, saved_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(slot) DO UPDATE SET
                 state_json = excluded.state_json,
                 saved_day  = excluded.saved_day,
                 saved_at   = excluded.saved_at",
            params![slot, state_json, day, now_rfc3339()],
        )?;
        Ok(())
    }

    /// A missing slot is a valid "no data" result, not an error.
    pub fn load_state(&self, slot: SaveSlot) -> SimResult<Option<String>> {
        let row = self
            .conn
            .query_row(
                "SELECT state_json FROM save_slot WHERE slot = ?1",
                params![slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(row)
    }

    // ── Leaderboard ────────────────────────────────────────────────

    pub fn submit_score(&self, name: &str, profit: Credits) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO score (name, profit, submitted_at) VALUES (?1, ?2, ?3)",
            params![name, profit, now_rfc3339()],
        )?;
        Ok(())
    }

    /// Ranked descending by profit; earlier submissions win ties.
    pub fn top_scores(&self, limit: usize) -> SimResult<Vec<ScoreRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, profit FROM score
             ORDER BY profit DESC, id ASC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(ScoreRow {
                    name: row.get(0)?,
                    profit: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ── Event log ──────────────────────────────────────────────────

    pub fn append_event(&self, entry: &EventLogEntry) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO event_log (day, event_type, payload, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![entry.day, entry.event_type, entry.payload, now_rfc3339()],
        )?;
        Ok(())
    }

    pub fn events_for_day(&self, day: Day) -> SimResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, day, event_type, payload
             FROM event_log WHERE day = ?1 ORDER BY id ASC",
        )?;
        let entries = stmt
            .query_map(params![day], |row| {
                Ok(EventLogEntry {
                    id: Some(row.get(0)?),
                    day: row.get(1)?,
                    event_type: row.get(2)?,
                    payload: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn event_count(&self) -> SimResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM event_log", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
