//! fixlog Runner - capture replay
//!
//! Replays a recorded FIX capture through a session's filtered log, so the
//! effect of a logging configuration can be checked before it is rolled out:
//!
//! - **Args**: command line parsing for the `fixlog-replay` binary
//! - **Capture**: `IN ` / `OUT ` prefixed capture lines
//! - **Replay**: drives a `FilteredLog` and counts what was kept
//!
//! ## Flow
//!
//! ```text
//!   capture file ──► parse line ──► FilteredLog ──► sink (screen/memory)
//!                                       │
//!                                       └──► ReplayStats (logged/suppressed per category)
//! ```

pub mod args;
pub mod capture;
pub mod error;
pub mod replay;

// Re-export main types
pub use args::{Command, ReplayArgs};
pub use capture::{CaptureLine, parse_capture_line};
pub use error::ReplayError;
pub use replay::{Replay, ReplayStats};
