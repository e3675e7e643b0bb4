//! Filtered log factory
//!
//! Builds a `FilteredLog` for each new session: the underlying sink from
//! the inner `SinkFactory`, and the session's filter from the shared registry.

use crate::error::FilterResult;
use crate::filter::SelectiveLogFilter;
use crate::filtered_log::FilteredLog;
use crate::registry::SessionFilterRegistry;
use fixlog_core::SessionId;
use fixlog_ports::{SettingsSource, SinkFactory};
use log::warn;
use std::sync::Arc;

/// Creates filtered logs and keeps their filters reachable by session
pub struct FilteredLogFactory<F, T: ?Sized> {
    sinks: F,
    settings: Arc<T>,
    registry: Arc<SessionFilterRegistry>,
}

impl<F, T> FilteredLogFactory<F, T>
where
    F: SinkFactory,
    T: SettingsSource + ?Sized,
{
    /// Create a factory with its own registry
    pub fn new(sinks: F, settings: Arc<T>) -> Self {
        Self::with_registry(sinks, settings, Arc::new(SessionFilterRegistry::new()))
    }

    /// Create a factory sharing an existing registry (e.g. with a control endpoint)
    pub fn with_registry(sinks: F, settings: Arc<T>, registry: Arc<SessionFilterRegistry>) -> Self {
        Self {
            sinks,
            settings,
            registry,
        }
    }

    /// Create the filtered log for a session
    ///
    /// A session that already has a filter reuses it, so every log created
    /// for the session is governed by the same toggles. If the filter cannot
    /// be built the sink is released again.
    pub fn create(&self, session: &SessionId) -> FilterResult<FilteredLog<F::Sink>> {
        let sink = self.sinks.create(session)?;
        let filter = match self.registry.get_or_create(session, &*self.settings) {
            Ok(filter) => filter,
            Err(err) => {
                drop(sink);
                if let Err(release_err) = self.sinks.release(session) {
                    warn!("[{}] Failed to release log sink: {}", session, release_err);
                }
                return Err(err.into());
            }
        };
        Ok(FilteredLog::new(session.clone(), filter, sink))
    }

    /// The filter for a session created through this factory
    pub fn filter(&self, session: &SessionId) -> Option<Arc<SelectiveLogFilter>> {
        self.registry.lookup(session)
    }

    /// Forget a session on teardown, releasing its filter and its sink
    pub fn remove(&self, session: &SessionId) -> FilterResult<Option<Arc<SelectiveLogFilter>>> {
        let filter = self.registry.remove(session);
        self.sinks.release(session)?;
        Ok(filter)
    }

    pub fn sinks(&self) -> &F {
        &self.sinks
    }

    pub fn registry(&self) -> &Arc<SessionFilterRegistry> {
        &self.registry
    }
}
