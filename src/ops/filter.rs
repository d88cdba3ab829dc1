use crate::model::task::Task;

/// The three-way view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    InProgress,
    Completed,
}

/// Tabs in display order
pub const TABS: [Tab; 3] = [Tab::All, Tab::InProgress, Tab::Completed];

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::InProgress => "In progress",
            Tab::Completed => "Completed",
        }
    }

    /// Parse a tab name as given on the command line
    pub fn from_name(s: &str) -> Option<Tab> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Tab::All),
            "in-progress" | "inprogress" | "active" => Some(Tab::InProgress),
            "completed" | "done" => Some(Tab::Completed),
            _ => None,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::All => Tab::InProgress,
            Tab::InProgress => Tab::Completed,
            Tab::Completed => Tab::All,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::All => Tab::Completed,
            Tab::InProgress => Tab::All,
            Tab::Completed => Tab::InProgress,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Tab::All => true,
            Tab::InProgress => task.in_progress && !task.completed,
            Tab::Completed => task.completed,
        }
    }
}

/// Derive the visible subset of tasks, preserving store order.
///
/// A task is included iff its title or category name contains the query
/// case-insensitively (the empty query matches everything) and it
/// satisfies the tab predicate. Pure; recomputed on every input change.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str, tab: Tab) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| matches_query(t, &needle) && tab.matches(t))
        .collect()
}

fn matches_query(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.category.name().to_lowercase().contains(needle)
}

/// Rounded percentage of completed tasks (0 for an empty list)
pub fn completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
}
