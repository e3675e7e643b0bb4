use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Name of a session setting, e.g. `LogOrderTraffic`
pub type SettingName = &'static str;
