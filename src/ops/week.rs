use chrono::{Datelike, Days, Local, NaiveDate};

use crate::model::task::Task;

/// One cell of the Monday-first week strip. Ephemeral: rebuilt from the
/// current date and task list on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCell {
    /// Ordinal day name ("Mon".."Sun")
    pub label: &'static str,
    pub date: NaiveDate,
    /// Day-of-month number for display
    pub day: u32,
    pub is_today: bool,
    /// The day had tasks and every one of them is completed
    pub is_completed: bool,
    /// The day has at least one open task
    pub has_task: bool,
}

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Monday of the week containing `date` (Monday=1..Sunday=7, so a Sunday
/// steps back six days).
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().number_from_monday() as u64 - 1;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Derive the seven cells for the week containing `today`.
///
/// Per-day flags come from the tasks created on that local day: a cell
/// has a task while any of them is still open, and counts as completed
/// once it has tasks and all of them are done.
pub fn build_week(today: NaiveDate, tasks: &[Task]) -> Vec<WeekCell> {
    let monday = monday_of_week(today);
    (0..7u64)
        .map(|i| {
            let date = monday
                .checked_add_days(Days::new(i))
                .unwrap_or(monday);
            let mut total = 0usize;
            let mut done = 0usize;
            for task in tasks {
                if task.created_date() == Some(date) {
                    total += 1;
                    if task.completed {
                        done += 1;
                    }
                }
            }
            WeekCell {
                label: DAY_LABELS[i as usize],
                date,
                day: date.day(),
                is_today: date == today,
                is_completed: total > 0 && done == total,
                has_task: done < total,
            }
        })
        .collect()
}

/// The week strip for the current local date
pub fn build_week_now(tasks: &[Task]) -> Vec<WeekCell> {
    build_week(Local::now().date_naive(), tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Category, TIME_UNSET};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A task created at noon local time on the given date
    fn task_on(date: NaiveDate, completed: bool) -> Task {
        let millis = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
            .timestamp_millis();
        Task {
            id: format!("{date}-{completed}"),
            title: "t".into(),
            time: TIME_UNSET.into(),
            category: Category::Work,
            completed,
            in_progress: false,
            important: false,
            created_at: millis,
        }
    }

    #[test]
    fn monday_of_week_midweek() {
        // 2026-08-26 is a Wednesday
        assert_eq!(monday_of_week(date(2026, 8, 26)), date(2026, 8, 24));
    }

    #[test]
    fn monday_of_week_on_monday_is_identity() {
        assert_eq!(monday_of_week(date(2026, 8, 24)), date(2026, 8, 24));
    }

    #[test]
    fn monday_of_week_on_sunday_steps_back_six_days() {
        // 2026-08-30 is a Sunday
        assert_eq!(monday_of_week(date(2026, 8, 30)), date(2026, 8, 24));
    }

    #[test]
    fn seven_consecutive_cells_monday_first() {
        let week = build_week(date(2026, 8, 26), &[]);
        assert_eq!(week.len(), 7);
        let labels: Vec<&str> = week.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        for pair in week.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
        let days: Vec<u32> = week.iter().map(|c| c.day).collect();
        assert_eq!(days, [24, 25, 26, 27, 28, 29, 30]);
    }

    #[test]
    fn exactly_one_cell_is_today() {
        let week = build_week(date(2026, 8, 30), &[]);
        let todays: Vec<&WeekCell> = week.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].label, "Sun");
    }

    #[test]
    fn no_tasks_means_no_flags() {
        let week = build_week(date(2026, 8, 26), &[]);
        assert!(week.iter().all(|c| !c.is_completed && !c.has_task));
    }

    #[test]
    fn day_flags_derive_from_task_data() {
        let today = date(2026, 8, 26);
        let tasks = vec![
            // Monday: all done
            task_on(date(2026, 8, 24), true),
            task_on(date(2026, 8, 24), true),
            // Tuesday: one open, one done
            task_on(date(2026, 8, 25), true),
            task_on(date(2026, 8, 25), false),
            // Thursday: open
            task_on(date(2026, 8, 27), false),
        ];

        let week = build_week(today, &tasks);
        assert!(week[0].is_completed);
        assert!(!week[0].has_task);
        assert!(!week[1].is_completed);
        assert!(week[1].has_task);
        assert!(week[3].has_task);
        // Friday untouched
        assert!(!week[4].is_completed && !week[4].has_task);
    }

    #[test]
    fn build_week_is_deterministic() {
        let today = date(2026, 8, 26);
        let tasks = vec![task_on(today, false)];
        assert_eq!(build_week(today, &tasks), build_week(today, &tasks));
    }
}
