//! The persisted identity slot.
//!
//! The logged-in user's public profile is serialized under the key `user`
//! and read back on startup as the initial identity. A stored literal
//! `undefined` counts as absent — earlier front ends left that string
//! behind and it must not be parsed.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use campo_client_core::model::User;
use campo_client_core::IdentityStorageError;
use parking_lot::Mutex;

const USER_KEY: &str = "user";
const ABSENT_LITERAL: &str = "undefined";

/// Key/value slot for the persisted identity. `Disk` survives restarts;
/// `Memory` lives as long as the process.
#[derive(Clone, Debug)]
pub enum IdentityStorage {
    Disk { dir: PathBuf },
    Memory(Arc<Mutex<Option<String>>>),
}

impl IdentityStorage {
    pub fn on_disk(dir: impl Into<PathBuf>) -> Self {
        IdentityStorage::Disk { dir: dir.into() }
    }

    pub fn in_memory() -> Self {
        IdentityStorage::Memory(Arc::new(Mutex::new(None)))
    }

    pub fn read(&self) -> Result<Option<User>, IdentityStorageError> {
        let raw = match self {
            IdentityStorage::Disk { dir } => match fs::read_to_string(dir.join(USER_KEY)) {
                Ok(raw) => Some(raw),
                Err(error) if error.kind() == ErrorKind::NotFound => None,
                Err(error) => return Err(error.into()),
            },
            IdentityStorage::Memory(slot) => slot.lock().clone(),
        };

        match raw {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() || raw.trim() == ABSENT_LITERAL => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        }
    }

    pub fn write(&self, user: &User) -> Result<(), IdentityStorageError> {
        let raw = serde_json::to_string(user)?;
        match self {
            IdentityStorage::Disk { dir } => {
                fs::create_dir_all(dir)?;
                fs::write(dir.join(USER_KEY), raw)?;
            }
            IdentityStorage::Memory(slot) => *slot.lock() = Some(raw),
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), IdentityStorageError> {
        match self {
            IdentityStorage::Disk { dir } => match fs::remove_file(dir.join(USER_KEY)) {
                Ok(()) => Ok(()),
                Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
                Err(error) => Err(error.into()),
            },
            IdentityStorage::Memory(slot) => {
                *slot.lock() = None;
                Ok(())
            }
        }
    }
}
