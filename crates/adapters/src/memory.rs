//! In-memory log store

use chrono::Utc;
use dashmap::DashMap;
use fixlog_core::{Direction, SessionId, Timestamp};
use fixlog_ports::{MessageSink, SinkFactory, SinkResult};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Inbound,
    Outbound,
    Event,
    ErrorEvent,
}

impl From<Direction> for EntryKind {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Inbound => EntryKind::Inbound,
            Direction::Outbound => EntryKind::Outbound,
        }
    }
}

/// One appended line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub kind: EntryKind,
    pub text: String,
}

/// Log store kept in process memory, in append order
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&self, kind: EntryKind, text: &str) -> SinkResult<()> {
        self.entries.lock().push(LogEntry {
            timestamp: Utc::now(),
            kind,
            text: text.to_string(),
        });
        Ok(())
    }

    /// Copy of all entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Raw messages logged in one direction
    pub fn messages(&self, direction: Direction) -> Vec<String> {
        let kind = EntryKind::from(direction);
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Event and error event texts
    pub fn events(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| matches!(entry.kind, EntryKind::Event | EntryKind::ErrorEvent))
            .map(|entry| entry.text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl MessageSink for MemoryLog {
    fn log_inbound(&self, message: &str) -> SinkResult<()> {
        self.append(EntryKind::Inbound, message)
    }

    fn log_outbound(&self, message: &str) -> SinkResult<()> {
        self.append(EntryKind::Outbound, message)
    }

    fn log_event(&self, text: &str) -> SinkResult<()> {
        self.append(EntryKind::Event, text)
    }

    fn log_error_event(&self, text: &str) -> SinkResult<()> {
        self.append(EntryKind::ErrorEvent, text)
    }

    fn clear(&self) -> SinkResult<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "MemoryLog"
    }
}

/// Hands out one shared `MemoryLog` per session
///
/// Creating a log for a session that already has one returns the same
/// store, so entries survive a session reconnect. The store is dropped
/// when the session is released.
#[derive(Debug, Default)]
pub struct MemoryLogFactory {
    logs: DashMap<SessionId, Arc<MemoryLog>>,
}

impl MemoryLogFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store for a session, if one was created
    pub fn log(&self, session: &SessionId) -> Option<Arc<MemoryLog>> {
        self.logs.get(session).map(|entry| Arc::clone(entry.value()))
    }
}

impl SinkFactory for MemoryLogFactory {
    type Sink = Arc<MemoryLog>;

    fn create(&self, session: &SessionId) -> SinkResult<Self::Sink> {
        let log = self
            .logs
            .entry(session.clone())
            .or_insert_with(|| Arc::new(MemoryLog::new()));
        Ok(Arc::clone(log.value()))
    }

    fn release(&self, session: &SessionId) -> SinkResult<()> {
        self.logs.remove(session);
        Ok(())
    }
}
