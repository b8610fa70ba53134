use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, KvError};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved light/dark preference; the system preference applies until the
/// user toggles once.
#[derive(Debug)]
pub struct ThemePreference<S> {
    kv: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn saved(&self) -> Option<Theme> {
        match self.kv.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                tracing::warn!(error = %err, "theme read failed; using system preference");
                None
            }
        }
    }

    pub fn current(&self, system_prefers_dark: bool) -> Theme {
        self.saved().unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Flip the effective theme and persist the result.
    pub fn toggle(&self, system_prefers_dark: bool) -> Result<Theme, KvError> {
        let next = self.current(system_prefers_dark).flipped();
        self.kv.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }
}
