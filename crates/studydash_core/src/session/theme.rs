//! Dark/light theme preference.
//!
//! Stored as the bare word `light` or `dark`, the same text a browser build
//! keeps under `theme`. A JSON string (`"dark"`) is still accepted on read.

use crate::store::backend::SlotBackend;
use crate::store::slot::{SlotKey, SlotValue, THEME_KEY};
use crate::store::{CollectionStore, Persistence};
use log::info;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

pub const THEME: SlotKey<ThemePreference> = SlotKey::new(THEME_KEY);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl SlotValue for ThemePreference {
    fn encode(&self) -> Result<String, serde_json::Error> {
        Ok(self.as_str().to_string())
    }

    fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        let raw = payload.trim();
        let word = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(raw);
        match word {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(serde_json::Error::custom(format!("unknown theme `{raw}`"))),
        }
    }
}

impl ThemePreference {
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Persisted preference, or the system preference when none is stored.
    pub fn load<B: SlotBackend>(store: &mut CollectionStore<B>, system_prefers_dark: bool) -> Self {
        store.get_or_init(&THEME, Self::from_system(system_prefers_dark))
    }

    /// Flips the current preference and persists it.
    pub fn toggle<B: SlotBackend>(
        store: &mut CollectionStore<B>,
        system_prefers_dark: bool,
    ) -> (Self, Persistence) {
        let next = Self::load(store, system_prefers_dark).toggled();
        let persistence = store.set(&THEME, next);
        info!(
            "event=theme_toggle module=session status=ok theme={}",
            next.as_str()
        );
        (next, persistence)
    }
}
