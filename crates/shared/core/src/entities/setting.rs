use serde::{Deserialize, Serialize};

use crate::values::SettingName;

/// The three per-session toggles, one per suppressible category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterSetting {
    MarketIncrementalRefresh,
    QuoteTraffic,
    OrderTraffic,
}

impl FilterSetting {
    pub const ALL: [FilterSetting; 3] = [
        FilterSetting::MarketIncrementalRefresh,
        FilterSetting::QuoteTraffic,
        FilterSetting::OrderTraffic,
    ];

    /// Setting name as it appears in session settings and override maps
    pub const fn name(&self) -> SettingName {
        match self {
            FilterSetting::MarketIncrementalRefresh => "LogMarketIncrementalRefresh",
            FilterSetting::QuoteTraffic => "LogQuoteTraffic",
            FilterSetting::OrderTraffic => "LogOrderTraffic",
        }
    }

    /// Look up a setting by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for FilterSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
