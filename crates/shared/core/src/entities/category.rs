use serde::{Deserialize, Serialize};

use super::FilterSetting;

/// Coarse bucket a wire message falls into for logging decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficCategory {
    /// NewOrderSingle (`D`) and ExecutionReport (`8`)
    OrderTraffic,
    /// Quote (`R`) and QuoteRequest (`S`)
    QuoteTraffic,
    /// MarketDataIncrementalRefresh (`X`)
    MarketIncrementalRefresh,
    /// Anything else, including messages with no message type marker
    Other,
}

impl TrafficCategory {
    /// All categories, in reporting order
    pub const ALL: [TrafficCategory; 4] = [
        TrafficCategory::OrderTraffic,
        TrafficCategory::QuoteTraffic,
        TrafficCategory::MarketIncrementalRefresh,
        TrafficCategory::Other,
    ];

    /// Map a message type key (the byte after `35=`) to its category
    pub fn from_key(key: Option<u8>) -> Self {
        match key {
            Some(b'D') | Some(b'8') => TrafficCategory::OrderTraffic,
            Some(b'R') | Some(b'S') => TrafficCategory::QuoteTraffic,
            Some(b'X') => TrafficCategory::MarketIncrementalRefresh,
            _ => TrafficCategory::Other,
        }
    }

    /// The setting that toggles this category, or `None` for `Other`
    pub fn setting(&self) -> Option<FilterSetting> {
        match self {
            TrafficCategory::OrderTraffic => Some(FilterSetting::OrderTraffic),
            TrafficCategory::QuoteTraffic => Some(FilterSetting::QuoteTraffic),
            TrafficCategory::MarketIncrementalRefresh => {
                Some(FilterSetting::MarketIncrementalRefresh)
            }
            TrafficCategory::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficCategory::OrderTraffic => "order",
            TrafficCategory::QuoteTraffic => "quote",
            TrafficCategory::MarketIncrementalRefresh => "market-incremental-refresh",
            TrafficCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for TrafficCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
