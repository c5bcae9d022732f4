//! Scheduling constraint evaluator.
//!
//! Pure function over tasks, crew, and blackout windows. Detects:
//! - **Capacity conflicts**: aggregate crew demand in a time slot
//!   exceeds per-shift capacity.
//! - **Crew rest conflicts**: one crew member double-booked or
//!   under-rested between consecutive assignments.
//! - **Blackout proximity**: tasks starting or ending too close to a
//!   protected window (suggestions only, never conflicts).
//!
//! # Edge-Case Policy
//! Tasks and blackouts with `start >= end` are skipped everywhere: they
//! contribute no load, appear in no conflict, and generate no
//! suggestion. Callers who want them surfaced run
//! [`crate::validation::validate_input`] first. A non-positive
//! `capacity_per_shift` is clamped to 1.
//!
//! # Ordering
//! Output order across conflict kinds is unspecified. Assert by
//! containment, not position.

use std::collections::BTreeMap;

use chrono::DateTime;

use crate::models::{
    BlackoutWindow, ConflictSeverity, CrewMember, MissionConflict, MissionSuggestion, MissionTask,
    TimeWindow,
};

const MS_PER_MINUTE: i64 = 60_000;

/// Read-only inputs to one evaluation pass.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleInput<'a> {
    /// Tasks on the calendar.
    pub tasks: &'a [MissionTask],
    /// Crew roster. Rest checks cover only members listed here.
    pub crew: &'a [CrewMember],
    /// Protected windows to schedule around.
    pub blackouts: &'a [BlackoutWindow],
    /// Head count available per shift. Clamped to a minimum of 1.
    pub capacity_per_shift: i32,
}

/// Tuning knobs for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Capacity timeline bucket width in minutes.
    pub slot_minutes: i64,
    /// Minimum idle time between consecutive assignments for one
    /// crew member, in minutes. Gaps are compared at millisecond
    /// precision, so sub-minute differences count.
    pub min_rest_minutes: i64,
    /// Proximity window around blackouts, in minutes.
    pub blackout_buffer_minutes: i64,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            min_rest_minutes: 60,
            blackout_buffer_minutes: 60,
        }
    }
}

/// Result of one evaluation pass. Freshly allocated per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintReport {
    /// Detected conflicts, all kinds mixed.
    pub conflicts: Vec<MissionConflict>,
    /// Non-blocking recommendations.
    pub suggestions: Vec<MissionSuggestion>,
}

impl ConstraintReport {
    /// Whether the schedule is conflict-free.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Conflicts of the given severity.
    pub fn conflicts_with_severity(&self, severity: ConflictSeverity) -> Vec<&MissionConflict> {
        self.conflicts
            .iter()
            .filter(|c| c.severity == severity)
            .collect()
    }
}

/// Evaluates all scheduling constraints over the given inputs.
///
/// Never mutates its inputs and cannot fail; malformed intervals are
/// skipped per the module-level policy.
pub fn evaluate_scheduler_constraints(
    input: &ScheduleInput<'_>,
    options: &EvaluatorOptions,
) -> ConstraintReport {
    let capacity = i64::from(input.capacity_per_shift).max(1);
    let slot_ms = options.slot_minutes.max(1) * MS_PER_MINUTE;

    let mut report = ConstraintReport::default();
    check_capacity(input.tasks, capacity, slot_ms, &mut report);
    check_crew_rest(input.tasks, input.crew, options.min_rest_minutes, &mut report);
    suggest_blackout_buffers(
        input.tasks,
        input.blackouts,
        options.blackout_buffer_minutes,
        &mut report,
    );
    report
}

/// Accumulated demand for one timeline slot.
pub(crate) struct SlotLoad {
    pub(crate) demand: i64,
    pub(crate) task_ids: Vec<String>,
}

/// Builds the discretized capacity timeline.
///
/// Each valid task adds its demand to every slot its interval overlaps.
/// Slots are keyed by their start instant (floor of the timestamp to
/// slot width); `BTreeMap` keeps emission deterministic.
pub(crate) fn build_capacity_timeline(
    tasks: &[MissionTask],
    slot_ms: i64,
) -> BTreeMap<i64, SlotLoad> {
    let mut timeline: BTreeMap<i64, SlotLoad> = BTreeMap::new();

    for task in tasks {
        if !task.has_valid_interval() {
            continue;
        }
        let demand = task.capacity_demand();
        let mut slot = task.start_ms().div_euclid(slot_ms) * slot_ms;
        while slot < task.end_ms() {
            let entry = timeline.entry(slot).or_insert_with(|| SlotLoad {
                demand: 0,
                task_ids: Vec::new(),
            });
            entry.demand += demand;
            entry.task_ids.push(task.id.clone());
            slot += slot_ms;
        }
    }

    timeline
}

fn check_capacity(tasks: &[MissionTask], capacity: i64, slot_ms: i64, report: &mut ConstraintReport) {
    for (slot_start, load) in build_capacity_timeline(tasks, slot_ms) {
        if load.demand <= capacity {
            continue;
        }
        let overload = load.demand - capacity;
        let severity = if overload >= 2 {
            ConflictSeverity::Critical
        } else {
            ConflictSeverity::Warning
        };
        let window = TimeWindow::new(slot_start, slot_start + slot_ms);
        report.conflicts.push(MissionConflict::capacity(
            window,
            severity,
            load.task_ids.clone(),
            format!(
                "Crew demand {} exceeds shift capacity {} around {}",
                load.demand,
                capacity,
                format_instant(slot_start)
            ),
        ));
        report.suggestions.push(MissionSuggestion::new(
            format!("capacity-slot-{slot_start}"),
            format!(
                "Redistribute {} tasks scheduled around {}: {}",
                load.task_ids.len(),
                format_instant(slot_start),
                load.task_ids.join(", ")
            ),
            load.task_ids,
        ));
    }
}

fn check_crew_rest(
    tasks: &[MissionTask],
    crew: &[CrewMember],
    min_rest_minutes: i64,
    report: &mut ConstraintReport,
) {
    for member in crew {
        let mut assigned: Vec<&MissionTask> = tasks
            .iter()
            .filter(|t| t.has_valid_interval() && t.has_crew(&member.id))
            .collect();
        assigned.sort_by_key(|t| t.start_ms());

        let min_rest_ms = min_rest_minutes * MS_PER_MINUTE;
        for pair in assigned.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            // Exact millisecond comparison: a 30m30s gap against a
            // 60-minute minimum is above the half-way mark even though
            // it floors to 30 whole minutes.
            let gap_ms = next.start_ms() - current.end_ms();
            if gap_ms >= min_rest_ms {
                continue;
            }
            // A negative gap (overlapping assignments) falls through the
            // same comparison; no special case needed.
            let severity = if gap_ms * 2 <= min_rest_ms {
                ConflictSeverity::Critical
            } else {
                ConflictSeverity::Warning
            };
            let gap_minutes = gap_ms / MS_PER_MINUTE;
            let window = TimeWindow::new(
                current.end_ms().min(next.start_ms()),
                current.end_ms().max(next.start_ms()),
            );
            report.conflicts.push(MissionConflict::crew_overlap(
                &member.id,
                &current.id,
                &next.id,
                severity,
                window,
                format!(
                    "{} has {} minutes between '{}' and '{}' (minimum {})",
                    display_name(member),
                    gap_minutes,
                    current.job_name,
                    next.job_name,
                    min_rest_minutes
                ),
            ));
            report.suggestions.push(MissionSuggestion::new(
                format!("rest-gap-{}-{}-{}", member.id, current.id, next.id),
                format!(
                    "Give {} at least {} minutes between '{}' and '{}'",
                    display_name(member),
                    min_rest_minutes,
                    current.job_name,
                    next.job_name
                ),
                vec![current.id.clone(), next.id.clone()],
            ));
        }
    }
}

fn suggest_blackout_buffers(
    tasks: &[MissionTask],
    blackouts: &[BlackoutWindow],
    buffer_minutes: i64,
    report: &mut ConstraintReport,
) {
    let buffer_ms = buffer_minutes * MS_PER_MINUTE;

    for task in tasks {
        if !task.has_valid_interval() {
            continue;
        }
        for blackout in blackouts {
            if !blackout.has_valid_interval() {
                continue;
            }
            // Signed distances: how soon after the blackout the task
            // starts, and how soon before it the task ends.
            let gap_after = task.start_ms() - blackout.end_ms();
            let gap_before = blackout.start_ms() - task.end_ms();
            let near_after = (0..=buffer_ms).contains(&gap_after);
            let near_before = (0..=buffer_ms).contains(&gap_before);
            if !near_after && !near_before {
                continue;
            }
            report.suggestions.push(MissionSuggestion::new(
                format!("blackout-{}-{}", blackout.id, task.id),
                format!(
                    "Add buffer between blackout '{}' and task '{}' (within {} minutes)",
                    blackout.title, task.job_name, buffer_minutes
                ),
                vec![task.id.clone()],
            ));
        }
    }
}

fn display_name(member: &CrewMember) -> &str {
    if member.name.is_empty() {
        &member.id
    } else {
        &member.name
    }
}

/// Formats an epoch-millisecond instant for conflict descriptions.
fn format_instant(time_ms: i64) -> String {
    match DateTime::from_timestamp_millis(time_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => format!("{time_ms}ms"),
    }
}
