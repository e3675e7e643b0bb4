//! fixlog Adapters
//!
//! Concrete implementations of the fixlog ports:
//! - `SessionSettings`: JSON-backed settings with a default section and
//!   per-session overrides
//! - `MemoryLog`: in-process log store, useful for tests and replay
//! - `ScreenLog`: writes through the `log` facade

pub mod memory;
pub mod screen;
pub mod settings;

// Re-export commonly used types
pub use memory::{EntryKind, LogEntry, MemoryLog, MemoryLogFactory};
pub use screen::{ScreenLog, ScreenLogFactory};
pub use settings::{SessionSettings, SettingValue};
