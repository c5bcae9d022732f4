//! Crew scheduling constraints for pavement job planning.
//!
//! Provides domain models and a pure constraint evaluator for field
//! crew schedules: capacity timelines, crew rest checks, and blackout
//! proximity hints. The evaluator is a leaf function — no I/O, no
//! shared state — intended to be re-run by a planning UI or service on
//! every schedule change.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `MissionTask`, `CrewMember`,
//!   `BlackoutWindow`, `MissionConflict`, `MissionSuggestion`
//! - **`evaluator`**: `evaluate_scheduler_constraints` and its options
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   crew references, malformed intervals)
//! - **`summary`**: Workload metrics (horizon, peak demand, booked hours)
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pave_schedule::evaluator::{
//!     evaluate_scheduler_constraints, EvaluatorOptions, ScheduleInput,
//! };
//! use pave_schedule::models::MissionTask;
//!
//! let tasks = vec![
//!     MissionTask::new(
//!         "T1",
//!         Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
//!     )
//!     .with_job_name("Maple Ave Lot")
//!     .with_crew_required(3),
//! ];
//!
//! let report = evaluate_scheduler_constraints(
//!     &ScheduleInput {
//!         tasks: &tasks,
//!         crew: &[],
//!         blackouts: &[],
//!         capacity_per_shift: 2,
//!     },
//!     &EvaluatorOptions::default(),
//! );
//! assert!(!report.is_clean()); // demand 3 against capacity 2
//! ```

pub mod evaluator;
pub mod models;
pub mod summary;
pub mod validation;

pub use evaluator::{
    evaluate_scheduler_constraints, ConstraintReport, EvaluatorOptions, ScheduleInput,
};
pub use models::{
    BlackoutWindow, ConflictKind, ConflictSeverity, CrewMember, MissionConflict,
    MissionSuggestion, MissionTask,
};
