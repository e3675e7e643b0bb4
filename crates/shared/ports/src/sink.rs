use fixlog_core::{Direction, SessionId};
use std::sync::Arc;

use crate::error::SinkResult;

/// Port for the underlying message log store
///
/// Implementations own the storage format; callers only hand over raw
/// wire messages and free-text session events.
pub trait MessageSink: Send + Sync {
    /// Append a message received from the counterparty
    fn log_inbound(&self, message: &str) -> SinkResult<()>;

    /// Append a message sent to the counterparty
    fn log_outbound(&self, message: &str) -> SinkResult<()>;

    /// Append a session event (logon, sequence reset, ...)
    fn log_event(&self, text: &str) -> SinkResult<()>;

    /// Append a session error event
    fn log_error_event(&self, text: &str) -> SinkResult<()> {
        self.log_event(text)
    }

    /// Discard everything logged so far
    fn clear(&self) -> SinkResult<()>;

    /// Dispatch a message to the inbound or outbound log
    fn log(&self, direction: Direction, message: &str) -> SinkResult<()> {
        match direction {
            Direction::Inbound => self.log_inbound(message),
            Direction::Outbound => self.log_outbound(message),
        }
    }

    /// Get the sink's name for debugging
    fn name(&self) -> &str {
        "MessageSink"
    }
}

macro_rules! forward_sink {
    ($ptr:ty) => {
        impl<S: MessageSink + ?Sized> MessageSink for $ptr {
            fn log_inbound(&self, message: &str) -> SinkResult<()> {
                (**self).log_inbound(message)
            }

            fn log_outbound(&self, message: &str) -> SinkResult<()> {
                (**self).log_outbound(message)
            }

            fn log_event(&self, text: &str) -> SinkResult<()> {
                (**self).log_event(text)
            }

            fn log_error_event(&self, text: &str) -> SinkResult<()> {
                (**self).log_error_event(text)
            }

            fn clear(&self) -> SinkResult<()> {
                (**self).clear()
            }

            fn name(&self) -> &str {
                (**self).name()
            }
        }
    };
}

forward_sink!(Arc<S>);
forward_sink!(Box<S>);

/// Port for creating one sink per session
pub trait SinkFactory: Send + Sync {
    type Sink: MessageSink;

    fn create(&self, session: &SessionId) -> SinkResult<Self::Sink>;

    /// Drop whatever the factory keeps for a session on teardown
    fn release(&self, _session: &SessionId) -> SinkResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure the sink trait is object-safe
    fn _assert_sink_object_safe(_: &dyn MessageSink) {}
}
