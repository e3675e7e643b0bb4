//! fixlog Core Domain
//!
//! Pure domain types for selective FIX message logging.
//! This crate contains no I/O and no shared state, and is 100% unit testable.
//!
//! ## Classification
//!
//! ```text
//! 8=FIX.4.2|9=120|35=X|49=SENDER|...
//!                 ^^^
//!                 marker, the byte after it is the key
//!
//!   D, 8  -> OrderTraffic
//!   R, S  -> QuoteTraffic
//!   X     -> MarketIncrementalRefresh
//!   other -> Other (always logged)
//! ```

pub mod classifier;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use classifier::{MSG_TYPE_MARKER, classify, message_type_key};
pub use entities::{
    Direction, FilterConfiguration, FilterSetting, ParseSessionIdError, SessionId,
    TrafficCategory,
};
pub use values::{SettingName, Timestamp};
