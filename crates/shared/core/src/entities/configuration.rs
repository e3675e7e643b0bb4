use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::FilterSetting;

/// Point-in-time values of a session's three logging toggles
///
/// Every flag defaults to `true`: nothing is suppressed unless explicitly disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterConfiguration {
    pub log_market_incremental_refresh: bool,
    pub log_quote_traffic: bool,
    pub log_order_traffic: bool,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            log_market_incremental_refresh: true,
            log_quote_traffic: true,
            log_order_traffic: true,
        }
    }
}

impl FilterConfiguration {
    /// Value of a single toggle
    pub fn get(&self, setting: FilterSetting) -> bool {
        match setting {
            FilterSetting::MarketIncrementalRefresh => self.log_market_incremental_refresh,
            FilterSetting::QuoteTraffic => self.log_quote_traffic,
            FilterSetting::OrderTraffic => self.log_order_traffic,
        }
    }

    pub fn set(&mut self, setting: FilterSetting, enabled: bool) {
        match setting {
            FilterSetting::MarketIncrementalRefresh => self.log_market_incremental_refresh = enabled,
            FilterSetting::QuoteTraffic => self.log_quote_traffic = enabled,
            FilterSetting::OrderTraffic => self.log_order_traffic = enabled,
        }
    }

    /// Render as `setting name -> enabled`
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        FilterSetting::ALL
            .into_iter()
            .map(|setting| (setting.name().to_string(), self.get(setting)))
            .collect()
    }
}
