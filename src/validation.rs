//! Input validation for schedule data.
//!
//! Checks structural integrity of tasks, crew, and blackout windows
//! before evaluation. Detects:
//! - Duplicate IDs
//! - Assignments referencing unknown crew members
//! - Malformed intervals (`start >= end`)
//! - Declared crew requirements exceeding the roster
//!
//! The constraint evaluator deliberately skips malformed intervals
//! rather than erroring; run this first when they should be surfaced.

use std::collections::HashSet;

use crate::models::{BlackoutWindow, CrewMember, MissionTask};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task assigns a crew member that isn't on the roster.
    UnknownCrewReference,
    /// A task or blackout has `start >= end`.
    MalformedInterval,
    /// A task declares more crew than the roster holds.
    RequirementExceedsRoster,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates schedule input data.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No duplicate crew member IDs
/// 3. No duplicate blackout IDs
/// 4. All assigned crew IDs exist on the roster
/// 5. All task and blackout intervals have `start < end`
/// 6. No task requires more crew than the roster holds
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    tasks: &[MissionTask],
    crew: &[CrewMember],
    blackouts: &[BlackoutWindow],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect crew IDs
    let mut crew_ids = HashSet::new();
    for member in crew {
        if !crew_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate crew member ID: {}", member.id),
            ));
        }
    }

    // Task checks
    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if !task.has_valid_interval() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedInterval,
                format!("Task '{}' has start >= end", task.id),
            ));
        }

        for assigned in &task.crew_assigned {
            if !crew_ids.contains(assigned.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCrewReference,
                    format!(
                        "Task '{}' assigns unknown crew member '{}'",
                        task.id, assigned
                    ),
                ));
            }
        }

        if task.crew_required as usize > crew.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequirementExceedsRoster,
                format!(
                    "Task '{}' requires {} crew but the roster holds {}",
                    task.id,
                    task.crew_required,
                    crew.len()
                ),
            ));
        }
    }

    // Blackout checks
    let mut blackout_ids = HashSet::new();
    for blackout in blackouts {
        if !blackout_ids.insert(blackout.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate blackout ID: {}", blackout.id),
            ));
        }

        if !blackout.has_valid_interval() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedInterval,
                format!("Blackout '{}' has start >= end", blackout.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap()
    }

    fn sample_crew() -> Vec<CrewMember> {
        vec![
            CrewMember::foreman("C1").with_name("Dana"),
            CrewMember::operator("C2").with_name("Lee"),
            CrewMember::laborer("C3"),
        ]
    }

    fn sample_tasks() -> Vec<MissionTask> {
        vec![
            MissionTask::new("T1", at(8), at(12))
                .with_job_name("Maple Ave Lot")
                .with_crew_required(2)
                .with_crew("C1")
                .with_crew("C2"),
            MissionTask::new("T2", at(13), at(16))
                .with_job_name("Oak St Driveway")
                .with_crew("C3"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let blackouts = vec![BlackoutWindow::new("B1", at(9), at(10))];
        assert!(validate_input(&sample_tasks(), &sample_crew(), &blackouts).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![
            MissionTask::new("T1", at(8), at(9)),
            MissionTask::new("T1", at(10), at(11)),
        ];
        let errors = validate_input(&tasks, &sample_crew(), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_crew_id() {
        let crew = vec![CrewMember::laborer("C1"), CrewMember::foreman("C1")];
        let errors = validate_input(&[], &crew, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("crew")));
    }

    #[test]
    fn test_unknown_crew_reference() {
        let tasks = vec![MissionTask::new("T1", at(8), at(9)).with_crew("NOBODY")];
        let errors = validate_input(&tasks, &sample_crew(), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCrewReference));
    }

    #[test]
    fn test_malformed_task_interval() {
        let tasks = vec![MissionTask::new("T1", at(9), at(9))];
        let errors = validate_input(&tasks, &sample_crew(), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedInterval));
    }

    #[test]
    fn test_malformed_blackout_interval() {
        let blackouts = vec![BlackoutWindow::new("B1", at(10), at(9))];
        let errors = validate_input(&[], &sample_crew(), &blackouts).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedInterval
                && e.message.contains("Blackout")));
    }

    #[test]
    fn test_requirement_exceeds_roster() {
        let tasks = vec![MissionTask::new("T1", at(8), at(9)).with_crew_required(4)];
        let errors = validate_input(&tasks, &sample_crew(), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RequirementExceedsRoster));
    }

    #[test]
    fn test_multiple_errors() {
        // Malformed interval + unknown crew reference on the same task
        let tasks = vec![MissionTask::new("T1", at(9), at(8)).with_crew("NOBODY")];
        let errors = validate_input(&tasks, &sample_crew(), &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
