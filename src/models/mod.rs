//! Pavement scheduling domain models.
//!
//! Core data types for crew scheduling: tasks to perform, the crew who
//! performs them, blackout windows to schedule around, and the conflict
//! and suggestion records the evaluator emits.
//!
//! # Domain Mappings
//!
//! | pave-schedule | Sealcoating | Striping | Snow Removal |
//! |---------------|-------------|----------|--------------|
//! | MissionTask | Coat Application | Layout Pass | Plow Route |
//! | CrewMember | Sealcoat Crew | Striper | Driver |
//! | BlackoutWindow | Service Hours | Business Hours | School Hours |

mod blackout;
mod conflict;
mod crew;
mod task;

pub use blackout::{BlackoutWindow, TimeWindow};
pub use conflict::{ConflictKind, ConflictSeverity, MissionConflict, MissionSuggestion};
pub use crew::{CrewMember, CrewRole, Weekday};
pub use task::{AccessibilityImpact, MissionTask, TaskPriority, TaskStatus};
