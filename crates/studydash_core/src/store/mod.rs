//! Persisted collection store.
//!
//! # Responsibility
//! - Hand out the current value of a named slot, falling back to a caller
//!   default when nothing usable was ever written.
//! - Persist every new value synchronously before it becomes current.
//!
//! # Invariants
//! - The backend is read at most once per key for the store lifetime.
//! - After `set(key, v)`, `get_or_init(key, _)` returns `v` for the rest of
//!   the session, whether or not the write reached the medium.
//! - Corrupt or mis-shaped payloads behave exactly like absent ones.
//! - Storage failures are logged, never returned from `get_or_init`/`set`.

pub mod backend;
pub mod slot;

use backend::{SlotBackend, StorageResult};
use log::{debug, info, warn};
use slot::{SlotKey, SlotValue};
use std::any::Any;
use std::collections::HashMap;

/// Whether a `set` reached the durable medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Written to the medium; survives a reload.
    Durable,
    /// Kept in memory only; lost on reload.
    MemoryOnly,
}

enum CachedSlot {
    Absent,
    Value(Box<dyn Any>),
}

/// Keyed slots of durable state over one backend.
pub struct CollectionStore<B: SlotBackend> {
    backend: B,
    slots: HashMap<&'static str, CachedSlot>,
}

impl<B: SlotBackend> CollectionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: HashMap::new(),
        }
    }

    /// Returns the current value of `key`, or `default` if none exists.
    ///
    /// The first call for a key reads the backend; later calls are served
    /// from the session cache.
    pub fn get_or_init<T: SlotValue>(&mut self, key: &SlotKey<T>, default: T) -> T {
        if let Some(cached) = self.slots.get(key.name()) {
            match cached {
                CachedSlot::Absent => return default,
                CachedSlot::Value(value) => {
                    if let Some(value) = value.downcast_ref::<T>() {
                        return value.clone();
                    }
                }
            }
        }

        match self.load(key) {
            Some(value) => {
                self.slots
                    .insert(key.name(), CachedSlot::Value(Box::new(value.clone())));
                value
            }
            None => {
                self.slots.insert(key.name(), CachedSlot::Absent);
                default
            }
        }
    }

    /// Persists `value` under `key`, then makes it current.
    pub fn set<T: SlotValue>(&mut self, key: &SlotKey<T>, value: T) -> Persistence {
        let persistence = match value.encode() {
            Ok(payload) => match self.backend.write(key.name(), &payload) {
                Ok(()) => {
                    debug!(
                        "event=slot_write module=store status=ok key={} bytes={}",
                        key.name(),
                        payload.len()
                    );
                    Persistence::Durable
                }
                Err(err) => {
                    warn!(
                        "event=slot_write module=store status=memory_only key={} error_code=storage_write_failed error={}",
                        key.name(),
                        err
                    );
                    Persistence::MemoryOnly
                }
            },
            Err(err) => {
                warn!(
                    "event=slot_write module=store status=memory_only key={} error_code=serialize_failed error={}",
                    key.name(),
                    err
                );
                Persistence::MemoryOnly
            }
        };

        self.slots.insert(key.name(), CachedSlot::Value(Box::new(value)));
        persistence
    }

    /// Clears every durable slot and the session cache.
    ///
    /// The cache is dropped even when the medium refuses the clear, so the
    /// running session falls back to defaults either way.
    pub fn reset_all(&mut self) -> StorageResult<()> {
        self.slots.clear();
        match self.backend.clear() {
            Ok(()) => {
                info!("event=store_reset module=store status=ok");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=store_reset module=store status=error error_code=storage_clear_failed error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Slot keys currently present in the durable medium.
    pub fn persisted_keys(&self) -> StorageResult<Vec<String>> {
        self.backend.keys()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases the backend; a new store over it behaves like a reload.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn load<T: SlotValue>(&self, key: &SlotKey<T>) -> Option<T> {
        let payload = match self.backend.read(key.name()) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(
                    "event=slot_read module=store status=absent key={}",
                    key.name()
                );
                return None;
            }
            Err(err) => {
                warn!(
                    "event=slot_read module=store status=fallback key={} error_code=storage_read_failed error={}",
                    key.name(),
                    err
                );
                return None;
            }
        };

        let value = match T::decode(&payload) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=slot_read module=store status=fallback key={} error_code=payload_corrupt error={}",
                    key.name(),
                    err
                );
                return None;
            }
        };

        if let Err(err) = value.check_shape() {
            warn!(
                "event=slot_read module=store status=fallback key={} error_code=shape_mismatch error={}",
                key.name(),
                err
            );
            return None;
        }

        debug!("event=slot_read module=store status=ok key={}", key.name());
        Some(value)
    }
}
