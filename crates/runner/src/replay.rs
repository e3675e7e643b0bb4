//! Replay - drives a filtered log from a capture

use crate::capture::{CaptureLine, parse_capture_line};
use crate::error::ReplayError;
use fixlog_core::{TrafficCategory, classify};
use fixlog_filter::FilteredLog;
use fixlog_ports::MessageSink;
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;

/// Logged and suppressed counts per traffic category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    logged: HashMap<TrafficCategory, usize>,
    suppressed: HashMap<TrafficCategory, usize>,
}

impl ReplayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: TrafficCategory, logged: bool) {
        let counts = if logged {
            &mut self.logged
        } else {
            &mut self.suppressed
        };
        *counts.entry(category).or_insert(0) += 1;
    }

    pub fn logged(&self, category: TrafficCategory) -> usize {
        self.logged.get(&category).copied().unwrap_or(0)
    }

    pub fn suppressed(&self, category: TrafficCategory) -> usize {
        self.suppressed.get(&category).copied().unwrap_or(0)
    }

    pub fn total_logged(&self) -> usize {
        self.logged.values().sum()
    }

    pub fn total_suppressed(&self) -> usize {
        self.suppressed.values().sum()
    }

    pub fn total(&self) -> usize {
        self.total_logged() + self.total_suppressed()
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<28} {:>10} {:>10}", "category", "logged", "suppressed")?;
        for category in TrafficCategory::ALL {
            writeln!(
                f,
                "{:<28} {:>10} {:>10}",
                category.as_str(),
                self.logged(category),
                self.suppressed(category)
            )?;
        }
        write!(
            f,
            "{:<28} {:>10} {:>10}",
            "total",
            self.total_logged(),
            self.total_suppressed()
        )
    }
}

/// Replays capture lines through one session's filtered log
pub struct Replay<S> {
    log: FilteredLog<S>,
    stats: ReplayStats,
}

impl<S: MessageSink> Replay<S> {
    pub fn new(log: FilteredLog<S>) -> Self {
        Self {
            log,
            stats: ReplayStats::new(),
        }
    }

    /// Push one message through the filtered log; returns whether it was logged
    pub fn feed(&mut self, line: &CaptureLine) -> Result<bool, ReplayError> {
        let logged = self.log.log_if_allowed(line.direction, &line.message)?;
        self.stats.record(classify(&line.message), logged);
        Ok(logged)
    }

    /// Replay every line from `reader`
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<&ReplayStats, ReplayError> {
        info!("[{}] Replay started", self.log.session());

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(capture) = parse_capture_line(idx + 1, &line)? {
                self.feed(&capture)?;
            }
        }

        debug!(
            "[{}] Replay finished: {} logged, {} suppressed",
            self.log.session(),
            self.stats.total_logged(),
            self.stats.total_suppressed()
        );
        Ok(&self.stats)
    }

    pub fn log(&self) -> &FilteredLog<S> {
        &self.log
    }

    pub fn stats(&self) -> &ReplayStats {
        &self.stats
    }

    pub fn into_parts(self) -> (FilteredLog<S>, ReplayStats) {
        (self.log, self.stats)
    }
}
