//! fixlog Filter
//!
//! Decides, per message and per direction, whether a raw FIX message is
//! forwarded to the session's log store. Provides:
//! - `SelectiveLogFilter`: three atomic toggles (order, quote, incremental refresh)
//! - `FilteredLog`: a `MessageSink` decorator gated by a filter
//! - `SessionFilterRegistry`: exactly one filter per session
//! - `FilteredLogFactory`: builds filtered logs for new sessions
//!
//! ## Architecture
//!
//! ```text
//!   Protocol engine                 Operator control
//!         │ raw message                    │ overrides
//!    ┌────▼──────────┐   lookup    ┌───────▼──────────────┐
//!    │  FilteredLog  │◄────────────│ SessionFilterRegistry│
//!    │  should_log?  │  (shared    └──────────────────────┘
//!    └────┬──────────┘   filter)
//!         │ only when allowed
//!    ┌────▼────┐
//!    │  Sink   │
//!    └─────────┘
//! ```
//!
//! ## Consistency
//!
//! Each toggle is an independent atomic. A reader racing with
//! `apply_overrides` may see some toggles updated and others not;
//! the three categories are independent, so no cross-toggle snapshot is kept.

pub mod error;
pub mod factory;
pub mod filter;
pub mod filtered_log;
pub mod registry;

// Re-export commonly used types
pub use error::{FilterError, FilterResult};
pub use factory::FilteredLogFactory;
pub use filter::SelectiveLogFilter;
pub use filtered_log::FilteredLog;
pub use registry::SessionFilterRegistry;
