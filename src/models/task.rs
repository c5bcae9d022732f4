//! Mission task model.
//!
//! A mission task is a schedulable unit of field work: one job at one
//! site over one contiguous time range, staffed by zero or more crew
//! members. Tasks are read-only inputs to the constraint evaluator.
//!
//! # Time Representation
//! Timestamps are absolute instants (`DateTime<Utc>`, ISO-8601 on the
//! wire). Interval arithmetic downstream works in epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schedulable unit of work (one job visit).
///
/// A task with `start >= end` is malformed; the evaluator skips it
/// entirely rather than erroring (see `validation` for surfacing these).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionTask {
    /// Unique task identifier.
    pub id: String,
    /// Job this task belongs to (e.g., customer or contract name).
    pub job_name: String,
    /// Site label (lot, address, zone). `None` = unspecified.
    pub site: Option<String>,
    /// Scheduled start instant.
    pub start: DateTime<Utc>,
    /// Scheduled end instant. Must be after `start` for a valid task.
    pub end: DateTime<Utc>,
    /// Declared head count needed for this task.
    pub crew_required: u32,
    /// IDs of crew members assigned. Order is irrelevant; duplicates
    /// are ignored when counting demand.
    pub crew_assigned: Vec<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Scheduling priority.
    pub priority: TaskPriority,
    /// Impact on site accessibility while the task runs.
    pub accessibility_impact: AccessibilityImpact,
    /// Free-text notes.
    pub notes: String,
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Drafted but not yet on the calendar.
    Planned,
    /// On the calendar with a confirmed window.
    Scheduled,
    /// Crew is on site.
    InProgress,
    /// Work finished.
    Completed,
    /// Cannot proceed (weather, permits, dependencies).
    Blocked,
}

/// Scheduling priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Must not slip (e.g., contractual deadline).
    Critical,
    /// Normal priority.
    Standard,
    /// Fill-in work.
    Low,
}

/// How much the task restricts access to the site while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityImpact {
    /// Site stays fully usable.
    None,
    /// Some lanes/stalls closed.
    Partial,
    /// Site fully closed during the task.
    Full,
}

impl MissionTask {
    /// Creates a new task with the given ID and time range.
    pub fn new(id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            job_name: String::new(),
            site: None,
            start,
            end,
            crew_required: 0,
            crew_assigned: Vec::new(),
            status: TaskStatus::Planned,
            priority: TaskPriority::Standard,
            accessibility_impact: AccessibilityImpact::None,
            notes: String::new(),
        }
    }

    /// Sets the job name.
    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = job_name.into();
        self
    }

    /// Sets the site label.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the declared crew requirement.
    pub fn with_crew_required(mut self, crew_required: u32) -> Self {
        self.crew_required = crew_required;
        self
    }

    /// Assigns a crew member by ID.
    pub fn with_crew(mut self, crew_id: impl Into<String>) -> Self {
        self.crew_assigned.push(crew_id.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the accessibility impact.
    pub fn with_accessibility_impact(mut self, impact: AccessibilityImpact) -> Self {
        self.accessibility_impact = impact;
        self
    }

    /// Sets free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
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

    /// Scheduled duration in milliseconds (0 for malformed intervals).
    pub fn duration_ms(&self) -> i64 {
        (self.end_ms() - self.start_ms()).max(0)
    }

    /// Whether the given crew member is assigned to this task.
    pub fn has_crew(&self, crew_id: &str) -> bool {
        self.crew_assigned.iter().any(|c| c == crew_id)
    }

    /// Capacity demand: the larger of declared requirement and distinct
    /// assigned head count, floored at 1 so every active task consumes
    /// at least one unit.
    pub fn capacity_demand(&self) -> i64 {
        let mut assigned: Vec<&str> = self.crew_assigned.iter().map(String::as_str).collect();
        assigned.sort_unstable();
        assigned.dedup();
        (self.crew_required as i64)
            .max(assigned.len() as i64)
            .max(1)
    }
}
