//! Session settings loading
//!
//! JSON layout, one `default` section plus one section per session:
//!
//! ```json
//! {
//!   "default": { "LogOrderTraffic": "Y" },
//!   "sessions": {
//!     "FIX.4.2:BANZAI->EXEC": { "LogMarketIncrementalRefresh": false }
//!   }
//! }
//! ```
//!
//! A session section overrides the default section key by key.

use fixlog_core::SessionId;
use fixlog_ports::{ConfigError, ConfigResult, SettingsSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single setting value as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    /// Interpret as a boolean: `Y`/`N` or `true`/`false`, case-insensitive
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            SettingValue::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("y") || text.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if text.eq_ignore_ascii_case("n") || text.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// Settings for all sessions of an engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Applies to every session unless the session's own section sets the key
    #[serde(default)]
    pub default: HashMap<String, SettingValue>,

    /// Per-session sections
    #[serde(default)]
    pub sessions: HashMap<SessionId, HashMap<String, SettingValue>>,
}

impl SessionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Set a key in the default section
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.default.insert(name.into(), value.into());
        self
    }

    /// Set a key in a session's section, creating the section if needed
    pub fn with_session_setting(
        mut self,
        session: SessionId,
        name: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Self {
        self.sessions
            .entry(session)
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// Sessions that have their own section
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Resolve a key for a session, falling back to the default section
    pub fn get(&self, session: &SessionId, name: &str) -> Option<&SettingValue> {
        self.sessions
            .get(session)
            .and_then(|section| section.get(name))
            .or_else(|| self.default.get(name))
    }
}

impl SettingsSource for SessionSettings {
    fn is_setting(&self, session: &SessionId, name: &str) -> ConfigResult<bool> {
        Ok(self.get(session, name).is_some())
    }

    fn get_bool(&self, session: &SessionId, name: &str) -> ConfigResult<bool> {
        let value = self.get(session, name).ok_or_else(|| ConfigError::NotFound {
            session: session.clone(),
            setting: name.to_string(),
        })?;

        value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
            session: session.clone(),
            setting: name.to_string(),
            value: value.to_string(),
        })
    }
}
