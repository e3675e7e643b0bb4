//! Screen log - writes through the `log` facade

use fixlog_core::SessionId;
use fixlog_ports::{MessageSink, SinkFactory, SinkResult};
use log::{error, info};

/// Log target used for every screen log line
pub const SCREEN_TARGET: &str = "fixlog::screen";

const SOH: char = '\u{1}';

/// Writes messages and events for one session to the active logger
#[derive(Debug, Clone)]
pub struct ScreenLog {
    session: SessionId,
}

impl ScreenLog {
    pub fn new(session: SessionId) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }
}

/// Render SOH delimiters as `|` so messages are readable on a terminal
pub fn printable(message: &str) -> String {
    message.replace(SOH, "|")
}

impl MessageSink for ScreenLog {
    fn log_inbound(&self, message: &str) -> SinkResult<()> {
        info!(target: SCREEN_TARGET, "{} <== {}", self.session, printable(message));
        Ok(())
    }

    fn log_outbound(&self, message: &str) -> SinkResult<()> {
        info!(target: SCREEN_TARGET, "{} ==> {}", self.session, printable(message));
        Ok(())
    }

    fn log_event(&self, text: &str) -> SinkResult<()> {
        info!(target: SCREEN_TARGET, "{}: {}", self.session, text);
        Ok(())
    }

    fn log_error_event(&self, text: &str) -> SinkResult<()> {
        error!(target: SCREEN_TARGET, "{}: {}", self.session, text);
        Ok(())
    }

    fn clear(&self) -> SinkResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "ScreenLog"
    }
}

/// Creates a `ScreenLog` per session
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLogFactory;

impl ScreenLogFactory {
    pub fn new() -> Self {
        Self
    }
}

impl SinkFactory for ScreenLogFactory {
    type Sink = ScreenLog;

    fn create(&self, session: &SessionId) -> SinkResult<Self::Sink> {
        Ok(ScreenLog::new(session.clone()))
    }
}
