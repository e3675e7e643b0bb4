//! Filtered log - a `MessageSink` decorator
//!
//! Wraps a concrete sink and forwards inbound/outbound messages only when
//! the session's filter allows them. Events, error events and `clear`
//! are passed through untouched.

use crate::filter::SelectiveLogFilter;
use fixlog_core::{Direction, SessionId};
use fixlog_ports::{MessageSink, SinkResult};
use std::sync::Arc;

/// Log for one session, gated by that session's filter
pub struct FilteredLog<S> {
    session: SessionId,
    filter: Arc<SelectiveLogFilter>,
    inner: S,
}

impl<S: MessageSink> FilteredLog<S> {
    pub fn new(session: SessionId, filter: Arc<SelectiveLogFilter>, inner: S) -> Self {
        Self {
            session,
            filter,
            inner,
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The filter shared with the registry (the control-plane handle)
    pub fn filter(&self) -> &Arc<SelectiveLogFilter> {
        &self.filter
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Forward `message` if the filter allows it; returns whether it was forwarded
    pub fn log_if_allowed(&self, direction: Direction, message: &str) -> SinkResult<bool> {
        if !self.filter.should_log(direction, message) {
            return Ok(false);
        }
        match direction {
            Direction::Inbound => self.inner.log_inbound(message)?,
            Direction::Outbound => self.inner.log_outbound(message)?,
        }
        Ok(true)
    }
}

impl<S: MessageSink> MessageSink for FilteredLog<S> {
    fn log_inbound(&self, message: &str) -> SinkResult<()> {
        self.log_if_allowed(Direction::Inbound, message).map(|_| ())
    }

    fn log_outbound(&self, message: &str) -> SinkResult<()> {
        self.log_if_allowed(Direction::Outbound, message).map(|_| ())
    }

    fn log_event(&self, text: &str) -> SinkResult<()> {
        self.inner.log_event(text)
    }

    fn log_error_event(&self, text: &str) -> SinkResult<()> {
        self.inner.log_error_event(text)
    }

    fn clear(&self) -> SinkResult<()> {
        self.inner.clear()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl<S> std::fmt::Debug for FilteredLog<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredLog")
            .field("session", &self.session)
            .field("filter", &self.filter.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlog_core::{FilterConfiguration, FilterSetting};
    use fixlog_ports::SinkError;
    use std::sync::Mutex;

    /// Records every call as `(kind, text)`
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(&'static str, String)>>,
        fail_writes: bool,
    }

    impl RecordingSink {
        fn record(&self, kind: &'static str, text: &str) -> SinkResult<()> {
            if self.fail_writes {
                return Err(SinkError::Write("disk full".to_string()));
            }
            self.calls.lock().unwrap().push((kind, text.to_string()));
            Ok(())
        }

        fn calls(&self) -> Vec<(&'static str, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MessageSink for RecordingSink {
        fn log_inbound(&self, message: &str) -> SinkResult<()> {
            self.record("in", message)
        }

        fn log_outbound(&self, message: &str) -> SinkResult<()> {
            self.record("out", message)
        }

        fn log_event(&self, text: &str) -> SinkResult<()> {
            self.record("event", text)
        }

        fn log_error_event(&self, text: &str) -> SinkResult<()> {
            self.record("error", text)
        }

        fn clear(&self) -> SinkResult<()> {
            self.calls.lock().unwrap().clear();
            Ok(())
        }
    }

    fn filtered(config: FilterConfiguration) -> FilteredLog<RecordingSink> {
        FilteredLog::new(
            SessionId::new("FIX.4.2", "BANZAI", "EXEC"),
            Arc::new(SelectiveLogFilter::with_configuration(config)),
            RecordingSink::default(),
        )
    }

    #[test]
    fn test_suppressed_messages_do_not_reach_sink() {
        let log = filtered(FilterConfiguration {
            log_market_incremental_refresh: false,
            ..FilterConfiguration::default()
        });

        log.log_inbound("35=X|268=1|").unwrap();
        log.log_outbound("35=D|11=1|").unwrap();
        log.log(Direction::Inbound, "35=X|268=2|").unwrap();

        assert_eq!(log.inner().calls(), vec![("out", "35=D|11=1|".to_string())]);
    }

    #[test]
    fn test_events_pass_through() {
        let log = filtered(FilterConfiguration {
            log_market_incremental_refresh: false,
            log_quote_traffic: false,
            log_order_traffic: false,
        });

        log.log_event("Logon received").unwrap();
        log.log_error_event("35=X rejected").unwrap();

        assert_eq!(
            log.inner().calls(),
            vec![
                ("event", "Logon received".to_string()),
                ("error", "35=X rejected".to_string()),
            ]
        );
    }

    #[test]
    fn test_runtime_toggle_through_shared_filter() {
        let log = filtered(FilterConfiguration::default());
        let control = Arc::clone(log.filter());

        control.set_enabled(FilterSetting::QuoteTraffic, false);
        log.log_inbound("35=S|").unwrap();
        control.set_enabled(FilterSetting::QuoteTraffic, true);
        log.log_inbound("35=R|").unwrap();

        assert_eq!(log.inner().calls(), vec![("in", "35=R|".to_string())]);
    }

    #[test]
    fn test_log_if_allowed_reports_decision() {
        let log = filtered(FilterConfiguration {
            log_order_traffic: false,
            ..FilterConfiguration::default()
        });

        assert_eq!(log.log_if_allowed(Direction::Outbound, "35=D|"), Ok(false));
        assert_eq!(log.log_if_allowed(Direction::Outbound, "35=W|"), Ok(true));
        assert_eq!(log.inner().calls().len(), 1);
    }

    #[test]
    fn test_sink_errors_propagate_only_when_forwarded() {
        let log = FilteredLog::new(
            SessionId::new("FIX.4.2", "BANZAI", "EXEC"),
            Arc::new(SelectiveLogFilter::with_configuration(FilterConfiguration {
                log_order_traffic: false,
                ..FilterConfiguration::default()
            })),
            RecordingSink {
                fail_writes: true,
                ..RecordingSink::default()
            },
        );

        assert!(log.log_inbound("35=D|").is_ok());
        assert!(matches!(log.log_inbound("35=0|"), Err(SinkError::Write(_))));
    }
}
