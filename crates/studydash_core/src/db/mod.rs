//! The SQLite file holding every store slot.
//!
//! One table, `store_slots`, maps a slot key to its raw payload. Only the
//! table layout is versioned (`PRAGMA user_version`); payload formats are
//! owned by the slot values themselves.
//!
//! A file written by a newer binary is refused rather than read, so an old
//! binary never clobbers slots it does not understand.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or migrating the slot database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The directory meant to hold the slot file could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The slot table was laid out by a newer binary.
    NewerSlotTable { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot database: {err}"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create slot directory `{}`: {source}", path.display())
            }
            Self::NewerSlotTable { found, supported } => write!(
                f,
                "slot table version {found} was written by a newer studydash (this one reads up to {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::CreateDir { source, .. } => Some(source),
            Self::NewerSlotTable { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
