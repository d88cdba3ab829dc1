use serde::Serialize;

use crate::model::task::Task;
use crate::ops::week::WeekCell;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub important: usize,
    pub completion_rate: u32,
}

#[derive(Serialize)]
pub struct WeekCellJson {
    pub label: &'static str,
    pub date: String,
    pub day: u32,
    pub today: bool,
    pub completed: bool,
    pub has_task: bool,
}

pub fn week_cell_to_json(cell: &WeekCell) -> WeekCellJson {
    WeekCellJson {
        label: cell.label,
        date: cell.date.to_string(),
        day: cell.day,
        today: cell.is_today,
        completed: cell.is_completed,
        has_task: cell.has_task,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn state_char(task: &Task) -> char {
    if task.completed {
        'x'
    } else if task.in_progress {
        '>'
    } else {
        ' '
    }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let flag = if task.important { " !" } else { "" };
    format!(
        "[{}] {}  {}{}  ({} \u{2022} {})",
        state_char(task),
        task.id,
        task.title,
        flag,
        task.time,
        task.category,
    )
}

/// Format the week strip, one line per day
pub fn format_week(cells: &[WeekCell]) -> Vec<String> {
    cells
        .iter()
        .map(|c| {
            let mark = if c.is_today {
                "today"
            } else if c.is_completed {
                "done"
            } else if c.has_task {
                "open"
            } else {
                "-"
            };
            format!("{} {:>2}  {}", c.label, c.day, mark)
        })
        .collect()
}

/// Format the stats summary block
pub fn format_stats(stats: &StatsJson) -> Vec<String> {
    vec![
        format!("{} tasks", stats.total),
        format!("  completed:   {}", stats.completed),
        format!("  in progress: {}", stats.in_progress),
        format!("  important:   {}", stats.important),
        format!("completion rate: {}%", stats.completion_rate),
    ]
}
