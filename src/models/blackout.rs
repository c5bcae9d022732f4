//! Blackout window and time window models.
//!
//! A blackout window is a protected time range during which work should
//! not run, and should not start or end nearby (e.g., a worship service
//! at a church lot, a school pickup rush). The evaluator never treats a
//! blackout as a hard conflict; it produces proximity suggestions.
//!
//! # Time Model
//! `TimeWindow` carries raw epoch milliseconds and is the unit of
//! interval arithmetic; `BlackoutWindow` carries absolute instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time interval [start, end) in epoch milliseconds.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

/// A protected time range to schedule around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackoutWindow {
    /// Unique blackout identifier.
    pub id: String,
    /// Display title (e.g., "Sunday Service").
    pub title: String,
    /// Why the window is protected.
    pub reason: String,
    /// Window start instant.
    pub start: DateTime<Utc>,
    /// Window end instant. Must be after `start` for a valid window.
    pub end: DateTime<Utc>,
}

impl BlackoutWindow {
    /// Creates a new blackout window.
    pub fn new(id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            reason: String::new(),
            start,
            end,
        }
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Start instant in epoch milliseconds.
    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// End instant in epoch milliseconds.
    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.end.timestamp_millis()
    }

    /// Whether the time range is well-formed (`start < end`).
    #[inline]
    pub fn has_valid_interval(&self) -> bool {
        self.start < self.end
    }

    /// The window as a raw millisecond interval.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_ms(), self.end_ms())
    }
}
