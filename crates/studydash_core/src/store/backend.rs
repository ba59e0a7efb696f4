//! Durable slot media behind the collection store.
//!
//! # Responsibility
//! - Read, write and clear raw JSON payloads by slot key.
//! - Keep SQL details out of the store and services.
//!
//! # Invariants
//! - A write replaces any prior payload for the same key.
//! - `clear` removes every slot the medium holds.

use crate::db::DbError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of the underlying durable medium.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Medium refused the operation (disabled, read-only, over quota).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "slot storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value medium holding one serialized payload per slot.
pub trait SlotBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&mut self, key: &str, payload: &str) -> StorageResult<()>;
    fn clear(&mut self) -> StorageResult<()>;
    /// Slot keys currently present, sorted.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

/// SQLite-backed slot medium over the `store_slots` table.
pub struct SqliteSlotBackend<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotBackend<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotBackend for SqliteSlotBackend<'_> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM store_slots WHERE slot_key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&mut self, key: &str, payload: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO store_slots (slot_key, payload)
             VALUES (?1, ?2)
             ON CONFLICT(slot_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, payload],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        let removed = self.conn.execute("DELETE FROM store_slots;", [])?;
        debug!("event=slot_clear module=store status=ok removed={removed}");
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slot_key FROM store_slots ORDER BY slot_key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

/// Process-local slot medium.
///
/// Survives only as long as the value itself; handing it to a new store
/// simulates a reload against the same payloads.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotBackend {
    slots: BTreeMap<String, String>,
}

impl MemorySlotBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one raw payload, bypassing serialization.
    pub fn with_payload(mut self, key: &str, payload: &str) -> Self {
        self.slots.insert(key.to_string(), payload.to_string());
        self
    }

    /// Raw payload currently held for `key`.
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotBackend for MemorySlotBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> StorageResult<()> {
        self.slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.slots.clear();
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.slots.keys().cloned().collect())
    }
}
