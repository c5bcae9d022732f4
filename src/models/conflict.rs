//! Evaluator output models: conflicts and suggestions.
//!
//! Both are ephemeral: recomputed from scratch on every evaluation call,
//! never persisted, and carry IDs synthesized from their source slot or
//! task pair so identical inputs reproduce identical reports.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A detected scheduling conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConflict {
    /// Synthesized identifier (`capacity-<slot_ms>` or
    /// `rest-<crew>-<task>-<task>`).
    pub id: String,
    /// How severe the conflict is.
    pub severity: ConflictSeverity,
    /// What kind of constraint was breached.
    pub kind: ConflictKind,
    /// Tasks implicated in the conflict.
    pub task_ids: Vec<String>,
    /// Human-readable description.
    pub description: String,
    /// The implicated time interval.
    pub window: TimeWindow,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSeverity {
    /// Worth a look; the schedule may still work.
    Warning,
    /// Must be resolved before dispatch.
    Critical,
}

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// Aggregate crew demand in a slot exceeds shift capacity.
    Capacity,
    /// One crew member double-booked or under-rested between jobs.
    CrewOverlap,
}

/// A non-blocking scheduling recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSuggestion {
    /// Synthesized identifier.
    pub id: String,
    /// Human-readable recommendation.
    pub message: String,
    /// Tasks the recommendation refers to.
    pub related_task_ids: Vec<String>,
}

impl MissionConflict {
    /// Creates a capacity conflict for one timeline slot.
    pub fn capacity(
        slot: TimeWindow,
        severity: ConflictSeverity,
        task_ids: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("capacity-{}", slot.start_ms),
            severity,
            kind: ConflictKind::Capacity,
            task_ids,
            description: description.into(),
            window: slot,
        }
    }

    /// Creates a crew rest conflict between two consecutive assignments.
    pub fn crew_overlap(
        crew_id: &str,
        first_task: &str,
        second_task: &str,
        severity: ConflictSeverity,
        window: TimeWindow,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("rest-{crew_id}-{first_task}-{second_task}"),
            severity,
            kind: ConflictKind::CrewOverlap,
            task_ids: vec![first_task.to_string(), second_task.to_string()],
            description: description.into(),
            window,
        }
    }
}

impl MissionSuggestion {
    /// Creates a suggestion.
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        related_task_ids: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            related_task_ids,
        }
    }
}
