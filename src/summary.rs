//! Workload metrics for a schedule.
//!
//! Computes planning indicators from the same inputs the evaluator
//! takes: horizon, peak slot demand, per-crew booked hours, status
//! counts, and daily hour-cap breaches.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Horizon | Earliest start to latest end across valid tasks |
//! | Peak Demand | Largest summed demand in any timeline slot |
//! | Booked Hours | Per-crew sum of assigned task durations |
//! | Status Counts | Tasks per lifecycle status |
//! | Overbooked Crew | Members whose busiest day exceeds their cap |
//! | Off-Day Tasks | Assignments starting on an unavailable weekday |

use std::collections::HashMap;

use chrono::{DateTime, Datelike};

use crate::evaluator::build_capacity_timeline;
use crate::models::{CrewMember, MissionTask, TaskStatus, TimeWindow, Weekday};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Workload indicators for one schedule.
#[derive(Debug, Clone)]
pub struct WorkloadSummary {
    /// Earliest start to latest end across valid tasks.
    /// `None` when no valid task exists.
    pub horizon: Option<TimeWindow>,
    /// Largest summed demand in any timeline slot.
    pub peak_slot_demand: i64,
    /// Start of the slot carrying the peak demand (ms).
    pub peak_slot_start_ms: Option<i64>,
    /// Booked milliseconds per crew member on the roster.
    pub booked_ms_by_crew: HashMap<String, i64>,
    /// Task counts per lifecycle status (valid tasks only).
    pub task_count_by_status: HashMap<TaskStatus, usize>,
    /// Crew members whose busiest single day exceeds their daily cap.
    pub overbooked_crew_ids: Vec<String>,
    /// Tasks starting on a weekday the assigned member doesn't work,
    /// keyed by crew member ID. Members with an empty availability
    /// pattern work every day and never appear here.
    pub off_day_task_ids: HashMap<String, Vec<String>>,
}

impl WorkloadSummary {
    /// Computes workload metrics.
    ///
    /// Malformed tasks (`start >= end`) are skipped throughout,
    /// matching the evaluator's policy. `slot_minutes` is the same
    /// discretization the evaluator uses for its capacity timeline.
    pub fn calculate(tasks: &[MissionTask], crew: &[CrewMember], slot_minutes: i64) -> Self {
        let valid: Vec<&MissionTask> =
            tasks.iter().filter(|t| t.has_valid_interval()).collect();

        let horizon = {
            let start = valid.iter().map(|t| t.start_ms()).min();
            let end = valid.iter().map(|t| t.end_ms()).max();
            match (start, end) {
                (Some(s), Some(e)) => Some(TimeWindow::new(s, e)),
                _ => None,
            }
        };

        let slot_ms = slot_minutes.max(1) * MS_PER_MINUTE;
        let mut peak_slot_demand = 0;
        let mut peak_slot_start_ms = None;
        // First slot wins ties; the timeline iterates in time order.
        for (slot, load) in build_capacity_timeline(tasks, slot_ms) {
            if load.demand > peak_slot_demand {
                peak_slot_demand = load.demand;
                peak_slot_start_ms = Some(slot);
            }
        }

        let mut booked_ms_by_crew: HashMap<String, i64> = HashMap::new();
        let mut daily_ms: HashMap<(String, i64), i64> = HashMap::new();
        let mut off_day_task_ids: HashMap<String, Vec<String>> = HashMap::new();
        for member in crew {
            let booked = booked_ms_by_crew.entry(member.id.clone()).or_insert(0);
            for task in valid.iter().filter(|t| t.has_crew(&member.id)) {
                *booked += task.duration_ms();
                // Attribute the whole task to its start date (UTC).
                let day = task.start_ms().div_euclid(86_400_000);
                *daily_ms.entry((member.id.clone(), day)).or_insert(0) +=
                    task.duration_ms();

                let weekday = Weekday::from_chrono(task.start.weekday());
                if !member.works_on(weekday) {
                    off_day_task_ids
                        .entry(member.id.clone())
                        .or_default()
                        .push(task.id.clone());
                }
            }
        }

        let overbooked_crew_ids: Vec<String> = crew
            .iter()
            .filter(|member| {
                daily_ms
                    .iter()
                    .any(|((id, _), ms)| {
                        id == &member.id
                            && *ms as f64 / MS_PER_HOUR > member.max_hours_per_day
                    })
            })
            .map(|member| member.id.clone())
            .collect();

        let mut task_count_by_status: HashMap<TaskStatus, usize> = HashMap::new();
        for task in &valid {
            *task_count_by_status.entry(task.status).or_insert(0) += 1;
        }

        Self {
            horizon,
            peak_slot_demand,
            peak_slot_start_ms,
            booked_ms_by_crew,
            task_count_by_status,
            overbooked_crew_ids,
            off_day_task_ids,
        }
    }

    /// Booked hours for one crew member (0.0 if not on the roster).
    pub fn booked_hours(&self, crew_id: &str) -> f64 {
        self.booked_ms_by_crew
            .get(crew_id)
            .map(|ms| *ms as f64 / MS_PER_HOUR)
            .unwrap_or(0.0)
    }

    /// Horizon start as an instant, when a horizon exists.
    pub fn horizon_start(&self) -> Option<DateTime<chrono::Utc>> {
        self.horizon
            .and_then(|w| DateTime::from_timestamp_millis(w.start_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    fn task(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> MissionTask {
        MissionTask::new(id, start, end)
    }

    #[test]
    fn test_horizon_and_peak() {
        let tasks = vec![
            task("T1", at(2, 8), at(2, 12)).with_crew_required(2),
            task("T2", at(2, 10), at(2, 14)).with_crew_required(3),
            task("T3", at(2, 15), at(2, 16)),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &[], 30);

        let horizon = summary.horizon.unwrap();
        assert_eq!(horizon.start_ms, at(2, 8).timestamp_millis());
        assert_eq!(horizon.end_ms, at(2, 16).timestamp_millis());
        // 10:00-12:00 carries both T1 (2) and T2 (3).
        assert_eq!(summary.peak_slot_demand, 5);
        assert_eq!(
            summary.peak_slot_start_ms,
            Some(at(2, 10).timestamp_millis())
        );
    }

    #[test]
    fn test_booked_hours_per_crew() {
        let tasks = vec![
            task("T1", at(2, 8), at(2, 12)).with_crew("C1"),
            task("T2", at(2, 13), at(2, 15)).with_crew("C1").with_crew("C2"),
        ];
        let crew = vec![CrewMember::foreman("C1"), CrewMember::laborer("C2")];
        let summary = WorkloadSummary::calculate(&tasks, &crew, 30);

        assert!((summary.booked_hours("C1") - 6.0).abs() < 1e-10);
        assert!((summary.booked_hours("C2") - 2.0).abs() < 1e-10);
        assert!((summary.booked_hours("C99") - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_overbooked_crew() {
        // C1 booked 10h in one day against an 8h cap; C2 split across
        // two days stays under.
        let tasks = vec![
            task("T1", at(2, 6), at(2, 12)).with_crew("C1").with_crew("C2"),
            task("T2", at(2, 13), at(2, 17)).with_crew("C1"),
            task("T3", at(3, 8), at(3, 14)).with_crew("C2"),
        ];
        let crew = vec![
            CrewMember::foreman("C1").with_max_hours(8.0),
            CrewMember::laborer("C2").with_max_hours(8.0),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &crew, 30);

        assert_eq!(summary.overbooked_crew_ids, vec!["C1".to_string()]);
    }

    #[test]
    fn test_off_day_assignments() {
        // June 2 2025 is a Monday, June 3 a Tuesday. C1 only works
        // Tuesdays, so the Monday task is an off-day assignment; C2
        // has no availability pattern and works any day.
        let tasks = vec![
            task("T1", at(2, 8), at(2, 12)).with_crew("C1").with_crew("C2"),
            task("T2", at(3, 8), at(3, 12)).with_crew("C1"),
        ];
        let crew = vec![
            CrewMember::laborer("C1").with_availability(Weekday::Tuesday),
            CrewMember::laborer("C2"),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &crew, 30);

        assert_eq!(summary.off_day_task_ids["C1"], vec!["T1".to_string()]);
        assert!(!summary.off_day_task_ids.contains_key("C2"));
    }

    #[test]
    fn test_status_counts_skip_malformed() {
        let tasks = vec![
            task("T1", at(2, 8), at(2, 9)).with_status(TaskStatus::Scheduled),
            task("T2", at(2, 9), at(2, 10)).with_status(TaskStatus::Scheduled),
            task("T3", at(2, 10), at(2, 11)).with_status(TaskStatus::Blocked),
            task("bad", at(2, 11), at(2, 11)).with_status(TaskStatus::Scheduled),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &[], 30);

        assert_eq!(summary.task_count_by_status[&TaskStatus::Scheduled], 2);
        assert_eq!(summary.task_count_by_status[&TaskStatus::Blocked], 1);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = WorkloadSummary::calculate(&[], &[], 30);
        assert!(summary.horizon.is_none());
        assert_eq!(summary.peak_slot_demand, 0);
        assert!(summary.peak_slot_start_ms.is_none());
        assert!(summary.overbooked_crew_ids.is_empty());
        assert!(summary.off_day_task_ids.is_empty());
        assert!(summary.horizon_start().is_none());
    }
}
