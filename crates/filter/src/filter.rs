//! Per-session logging toggles

use fixlog_core::{
    Direction, FilterConfiguration, FilterSetting, SessionId, TrafficCategory, classify,
};
use fixlog_ports::{ConfigResult, SettingsSource};
use log::{debug, trace, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

/// Selective log filter for one session
///
/// Holds one atomic flag per suppressible category. `Other` traffic has no
/// flag and always passes.
#[derive(Debug)]
pub struct SelectiveLogFilter {
    log_market_incremental_refresh: AtomicBool,
    log_quote_traffic: AtomicBool,
    log_order_traffic: AtomicBool,
}

impl SelectiveLogFilter {
    /// Create a filter that logs everything
    pub fn new() -> Self {
        Self::with_configuration(FilterConfiguration::default())
    }

    /// Create with explicit initial toggles
    pub fn with_configuration(config: FilterConfiguration) -> Self {
        Self {
            log_market_incremental_refresh: AtomicBool::new(config.log_market_incremental_refresh),
            log_quote_traffic: AtomicBool::new(config.log_quote_traffic),
            log_order_traffic: AtomicBool::new(config.log_order_traffic),
        }
    }

    /// Create from a session's settings
    ///
    /// Each toggle takes the configured value when present and `true` otherwise.
    /// Fails only when the settings source itself cannot answer.
    pub fn from_settings<S>(settings: &S, session: &SessionId) -> ConfigResult<Self>
    where
        S: SettingsSource + ?Sized,
    {
        let mut config = FilterConfiguration::default();
        for setting in FilterSetting::ALL {
            if settings.is_setting(session, setting.name())? {
                config.set(setting, settings.get_bool(session, setting.name())?);
            }
        }

        debug!(
            "[{}] Log filter created: incremental_refresh={} quote={} order={}",
            session,
            config.log_market_incremental_refresh,
            config.log_quote_traffic,
            config.log_order_traffic
        );

        Ok(Self::with_configuration(config))
    }

    fn flag(&self, setting: FilterSetting) -> &AtomicBool {
        match setting {
            FilterSetting::MarketIncrementalRefresh => &self.log_market_incremental_refresh,
            FilterSetting::QuoteTraffic => &self.log_quote_traffic,
            FilterSetting::OrderTraffic => &self.log_order_traffic,
        }
    }

    /// Current value of a single toggle
    pub fn is_enabled(&self, setting: FilterSetting) -> bool {
        self.flag(setting).load(Ordering::Acquire)
    }

    /// Set a single toggle
    pub fn set_enabled(&self, setting: FilterSetting, enabled: bool) {
        self.flag(setting).store(enabled, Ordering::Release);
    }

    /// Whether messages of `category` are currently logged
    pub fn allows(&self, category: TrafficCategory) -> bool {
        category
            .setting()
            .is_none_or(|setting| self.is_enabled(setting))
    }

    /// Gate for the log sink: classify `message` and check its toggle
    ///
    /// The decision is the same for both directions.
    pub fn should_log(&self, direction: Direction, message: &str) -> bool {
        let category = classify(message);
        let allowed = self.allows(category);
        if !allowed {
            trace!("Suppressed {} {} message", direction, category);
        }
        allowed
    }

    /// Replace all three toggles from an operator override map
    ///
    /// A toggle named in `overrides` is enabled only by a case-insensitive
    /// `"true"`; anything else disables it. A toggle not named is reset to
    /// enabled. Each toggle is stored independently.
    pub fn apply_overrides(&self, overrides: &HashMap<String, String>) {
        for setting in FilterSetting::ALL {
            let enabled = match overrides.get(setting.name()) {
                Some(value) => parse_override(setting, value),
                None => true,
            };
            self.set_enabled(setting, enabled);
        }

        for key in overrides.keys() {
            if FilterSetting::from_name(key).is_none() {
                warn!("Ignoring unknown log override {:?}", key);
            }
        }

        debug!("Log overrides applied: {:?}", self.snapshot());
    }

    /// Snapshot of the toggles
    ///
    /// Flags are read one at a time, so a concurrent `apply_overrides` may
    /// be partially visible.
    pub fn snapshot(&self) -> FilterConfiguration {
        FilterConfiguration {
            log_market_incremental_refresh: self.is_enabled(FilterSetting::MarketIncrementalRefresh),
            log_quote_traffic: self.is_enabled(FilterSetting::QuoteTraffic),
            log_order_traffic: self.is_enabled(FilterSetting::OrderTraffic),
        }
    }

    /// Snapshot keyed by setting name
    pub fn current_configuration(&self) -> BTreeMap<String, bool> {
        self.snapshot().to_map()
    }
}

impl Default for SelectiveLogFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_override(setting: FilterSetting, value: &str) -> bool {
    if value.eq_ignore_ascii_case("true") {
        true
    } else {
        if !value.eq_ignore_ascii_case("false") {
            warn!("Override {}={:?} is not a boolean, disabling", setting, value);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlog_ports::ConfigError;

    const INCREMENTAL_REFRESH: &str = "8=FIX.4.2\u{1}9=120\u{1}35=X\u{1}268=1\u{1}";
    const NEW_ORDER: &str = "8=FIX.4.2\u{1}9=65\u{1}35=D\u{1}11=ORD-1\u{1}";
    const QUOTE: &str = "8=FIX.4.2\u{1}9=50\u{1}35=R\u{1}131=REQ-1\u{1}";
    const HEARTBEAT: &str = "8=FIX.4.2\u{1}9=40\u{1}35=0\u{1}";

    /// Settings stub: configured values plus an optional failure
    struct StubSettings {
        values: HashMap<&'static str, bool>,
        fail: bool,
    }

    impl StubSettings {
        fn empty() -> Self {
            Self {
                values: HashMap::new(),
                fail: false,
            }
        }

        fn with(mut self, name: &'static str, value: bool) -> Self {
            self.values.insert(name, value);
            self
        }

        fn failing() -> Self {
            Self {
                values: HashMap::new(),
                fail: true,
            }
        }
    }

    impl SettingsSource for StubSettings {
        fn is_setting(&self, _session: &SessionId, name: &str) -> ConfigResult<bool> {
            if self.fail {
                return Err(ConfigError::Unavailable("stub".to_string()));
            }
            Ok(self.values.contains_key(name))
        }

        fn get_bool(&self, session: &SessionId, name: &str) -> ConfigResult<bool> {
            self.values
                .get(name)
                .copied()
                .ok_or_else(|| ConfigError::NotFound {
                    session: session.clone(),
                    setting: name.to_string(),
                })
        }
    }

    fn session() -> SessionId {
        SessionId::new("FIX.4.2", "BANZAI", "EXEC")
    }

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let filter = SelectiveLogFilter::from_settings(&StubSettings::empty(), &session()).unwrap();

        let config = filter.current_configuration();
        assert_eq!(config.len(), 3);
        assert!(config["LogMarketIncrementalRefresh"]);
        assert!(config["LogQuoteTraffic"]);
        assert!(config["LogOrderTraffic"]);
    }

    #[test]
    fn test_reads_configured_values() {
        let settings = StubSettings::empty()
            .with("LogMarketIncrementalRefresh", false)
            .with("LogOrderTraffic", true);
        let filter = SelectiveLogFilter::from_settings(&settings, &session()).unwrap();

        assert_eq!(
            filter.snapshot(),
            FilterConfiguration {
                log_market_incremental_refresh: false,
                log_quote_traffic: true,
                log_order_traffic: true,
            }
        );
    }

    #[test]
    fn test_settings_failure_is_propagated() {
        let result = SelectiveLogFilter::from_settings(&StubSettings::failing(), &session());
        assert!(matches!(result, Err(ConfigError::Unavailable(_))));
    }

    #[test]
    fn test_should_log_follows_toggles() {
        let filter = SelectiveLogFilter::new();
        assert!(filter.should_log(Direction::Inbound, INCREMENTAL_REFRESH));

        filter.set_enabled(FilterSetting::MarketIncrementalRefresh, false);
        assert!(!filter.should_log(Direction::Inbound, INCREMENTAL_REFRESH));
        assert!(!filter.should_log(Direction::Outbound, INCREMENTAL_REFRESH));
        assert!(filter.should_log(Direction::Inbound, NEW_ORDER));
        assert!(filter.should_log(Direction::Inbound, QUOTE));

        filter.set_enabled(FilterSetting::MarketIncrementalRefresh, true);
        assert!(filter.should_log(Direction::Inbound, INCREMENTAL_REFRESH));
    }

    #[test]
    fn test_other_is_never_suppressed() {
        let filter = SelectiveLogFilter::with_configuration(FilterConfiguration {
            log_market_incremental_refresh: false,
            log_quote_traffic: false,
            log_order_traffic: false,
        });

        assert!(filter.should_log(Direction::Inbound, HEARTBEAT));
        assert!(filter.should_log(Direction::Outbound, "garbage without a marker"));
        assert!(!filter.should_log(Direction::Outbound, NEW_ORDER));
        assert!(!filter.should_log(Direction::Outbound, QUOTE));
    }

    #[test]
    fn test_apply_overrides_resets_unmentioned() {
        let filter = SelectiveLogFilter::with_configuration(FilterConfiguration {
            log_market_incremental_refresh: false,
            log_quote_traffic: false,
            log_order_traffic: true,
        });

        filter.apply_overrides(&overrides(&[("LogOrderTraffic", "false")]));

        let config = filter.current_configuration();
        assert!(!config["LogOrderTraffic"]);
        assert!(config["LogQuoteTraffic"]);
        assert!(config["LogMarketIncrementalRefresh"]);
    }

    #[test]
    fn test_apply_overrides_lenient_parsing() {
        let filter = SelectiveLogFilter::new();

        filter.apply_overrides(&overrides(&[
            ("LogMarketIncrementalRefresh", "TRUE"),
            ("LogQuoteTraffic", "yes"),
            ("LogOrderTraffic", ""),
        ]));

        let config = filter.snapshot();
        assert!(config.log_market_incremental_refresh);
        assert!(!config.log_quote_traffic);
        assert!(!config.log_order_traffic);
    }

    #[test]
    fn test_apply_overrides_is_idempotent() {
        let filter = SelectiveLogFilter::new();
        let input = overrides(&[("LogQuoteTraffic", "False"), ("Unrelated", "false")]);

        filter.apply_overrides(&input);
        let once = filter.snapshot();
        filter.apply_overrides(&input);

        assert_eq!(filter.snapshot(), once);
        assert!(!once.log_quote_traffic);
        assert!(once.log_order_traffic);
    }

    #[test]
    fn test_empty_overrides_enable_everything() {
        let filter = SelectiveLogFilter::with_configuration(FilterConfiguration {
            log_market_incremental_refresh: false,
            log_quote_traffic: false,
            log_order_traffic: false,
        });

        filter.apply_overrides(&HashMap::new());

        assert_eq!(filter.snapshot(), FilterConfiguration::default());
    }
}
