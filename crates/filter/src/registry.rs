//! Session → filter registry
//!
//! Shared between the message-processing path (get or create on session
//! start) and the operator control path (lookup and reconfigure).

use crate::filter::SelectiveLogFilter;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use fixlog_core::{FilterConfiguration, SessionId};
use fixlog_ports::{ConfigResult, SettingsSource};
use log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Registry holding exactly one filter per session
#[derive(Debug, Default)]
pub struct SessionFilterRegistry {
    filters: DashMap<SessionId, Arc<SelectiveLogFilter>>,
}

impl SessionFilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session's filter, creating it from `settings` on first access
    ///
    /// Settings are read outside the map's locks. When two callers race on
    /// first access both may build a filter, but only the one inserted first
    /// is kept and returned to both. On a settings error nothing is inserted.
    pub fn get_or_create<S>(
        &self,
        session: &SessionId,
        settings: &S,
    ) -> ConfigResult<Arc<SelectiveLogFilter>>
    where
        S: SettingsSource + ?Sized,
    {
        if let Some(filter) = self.lookup(session) {
            return Ok(filter);
        }

        let filter = Arc::new(SelectiveLogFilter::from_settings(settings, session)?);
        match self.filters.entry(session.clone()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                info!("[{}] Log filter registered", session);
                Ok(Arc::clone(entry.insert(filter).value()))
            }
        }
    }

    /// Find a session's filter; `None` if never registered or already removed
    pub fn lookup(&self, session: &SessionId) -> Option<Arc<SelectiveLogFilter>> {
        self.filters.get(session).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a session's filter on teardown
    pub fn remove(&self, session: &SessionId) -> Option<Arc<SelectiveLogFilter>> {
        let removed = self.filters.remove(session).map(|(_, filter)| filter);
        if removed.is_some() {
            info!("[{}] Log filter removed", session);
        }
        removed
    }

    /// Control plane: apply operator overrides to a session's filter
    ///
    /// Returns the resulting toggles, or `None` if the session is unknown.
    pub fn set_custom_log_configuration(
        &self,
        session: &SessionId,
        overrides: &HashMap<String, String>,
    ) -> Option<FilterConfiguration> {
        let Some(filter) = self.lookup(session) else {
            debug!("[{}] No log filter to reconfigure", session);
            return None;
        };
        filter.apply_overrides(overrides);
        Some(filter.snapshot())
    }

    /// Control plane: current toggles for a session, keyed by setting name
    pub fn custom_log_configuration(&self, session: &SessionId) -> Option<BTreeMap<String, bool>> {
        self.lookup(session)
            .map(|filter| filter.current_configuration())
    }

    /// Registered sessions, in no particular order
    pub fn sessions(&self) -> Vec<SessionId> {
        self.filters.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlog_ports::ConfigError;

    /// Answers "not configured" for everything, or fails every call
    struct NoSettings {
        fail: bool,
    }

    impl SettingsSource for NoSettings {
        fn is_setting(&self, _session: &SessionId, _name: &str) -> ConfigResult<bool> {
            if self.fail {
                Err(ConfigError::Unavailable("settings store offline".to_string()))
            } else {
                Ok(false)
            }
        }

        fn get_bool(&self, session: &SessionId, name: &str) -> ConfigResult<bool> {
            Err(ConfigError::NotFound {
                session: session.clone(),
                setting: name.to_string(),
            })
        }
    }

    fn session(sender: &str) -> SessionId {
        SessionId::new("FIX.4.2", sender, "EXEC")
    }

    #[test]
    fn test_get_or_create_reuses_instance() {
        let registry = SessionFilterRegistry::new();
        let settings = NoSettings { fail: false };

        let first = registry.get_or_create(&session("A"), &settings).unwrap();
        let second = registry.get_or_create(&session("A"), &settings).unwrap();
        let other = registry.get_or_create(&session("B"), &settings).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let registry = SessionFilterRegistry::new();
        assert!(registry.lookup(&session("A")).is_none());
        assert!(registry.custom_log_configuration(&session("A")).is_none());
        assert!(
            registry
                .set_custom_log_configuration(&session("A"), &HashMap::new())
                .is_none()
        );
    }

    #[test]
    fn test_failed_creation_is_not_registered() {
        let registry = SessionFilterRegistry::new();

        let result = registry.get_or_create(&session("A"), &NoSettings { fail: true });

        assert!(matches!(result, Err(ConfigError::Unavailable(_))));
        assert!(registry.is_empty());
        assert!(registry.lookup(&session("A")).is_none());
    }

    #[test]
    fn test_control_plane_round_trip() {
        let registry = SessionFilterRegistry::new();
        let filter = registry
            .get_or_create(&session("A"), &NoSettings { fail: false })
            .unwrap();

        let overrides = HashMap::from([(
            "LogMarketIncrementalRefresh".to_string(),
            "false".to_string(),
        )]);
        let applied = registry
            .set_custom_log_configuration(&session("A"), &overrides)
            .unwrap();

        assert!(!applied.log_market_incremental_refresh);
        assert!(!filter.snapshot().log_market_incremental_refresh);

        let reported = registry.custom_log_configuration(&session("A")).unwrap();
        assert_eq!(reported["LogMarketIncrementalRefresh"], false);
        assert_eq!(reported["LogQuoteTraffic"], true);
    }

    #[test]
    fn test_remove_then_lookup_misses() {
        let registry = SessionFilterRegistry::new();
        let settings = NoSettings { fail: false };
        let first = registry.get_or_create(&session("A"), &settings).unwrap();

        assert!(registry.remove(&session("A")).is_some());
        assert!(registry.lookup(&session("A")).is_none());
        assert!(registry.remove(&session("A")).is_none());

        let recreated = registry.get_or_create(&session("A"), &settings).unwrap();
        assert!(!Arc::ptr_eq(&first, &recreated));
        assert_eq!(registry.sessions(), vec![session("A")]);
    }
}
