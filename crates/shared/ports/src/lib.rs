//! fixlog Ports
//!
//! Port definitions (traits) for selective message logging.
//! These define the boundaries between the filter and the systems around it:
//! where session settings come from and where logged messages go.

mod error;
mod settings;
mod sink;

pub use error::{ConfigError, ConfigResult, SinkError, SinkResult};
pub use settings::SettingsSource;
pub use sink::{MessageSink, SinkFactory};
