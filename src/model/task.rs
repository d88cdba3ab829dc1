use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder stored in `time` when the user left it blank.
pub const TIME_UNSET: &str = "unset";

/// Fixed category set for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Work,
    Life,
    Health,
    Study,
    #[serde(rename = "Self-improvement")]
    SelfImprovement,
    Other,
}

/// All categories in display order
pub const CATEGORIES: [Category; 6] = [
    Category::Work,
    Category::Life,
    Category::Health,
    Category::Study,
    Category::SelfImprovement,
    Category::Other,
];

impl Category {
    /// Display name, also the persisted wire string
    pub fn name(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Life => "Life",
            Category::Health => "Health",
            Category::Study => "Study",
            Category::SelfImprovement => "Self-improvement",
            Category::Other => "Other",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Category> {
        CATEGORIES
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }

    /// Next category in display order (wraps; for the TUI selector)
    pub fn next(self) -> Category {
        let idx = CATEGORIES.iter().position(|c| *c == self).unwrap_or(0);
        CATEGORIES[(idx + 1) % CATEGORIES.len()]
    }

    /// Previous category in display order (wraps)
    pub fn prev(self) -> Category {
        let idx = CATEGORIES.iter().position(|c| *c == self).unwrap_or(0);
        CATEGORIES[(idx + CATEGORIES.len() - 1) % CATEGORIES.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single user-tracked to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Display text (never blank)
    pub title: String,
    /// Free-form due label ("10:00", "due tomorrow", or `TIME_UNSET`)
    pub time: String,
    pub category: Category,
    pub completed: bool,
    pub in_progress: bool,
    pub important: bool,
    /// Creation timestamp in epoch milliseconds
    pub created_at: i64,
}

impl Task {
    /// The local calendar date this task was created on.
    /// `None` only for timestamps outside chrono's representable range.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let utc = DateTime::from_timestamp_millis(self.created_at)?;
        Some(utc.with_timezone(&Local).date_naive())
    }
}

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// The default task set used when no stored state exists
pub fn seed_tasks() -> Vec<Task> {
    let now = now_millis();
    let task = |id: &str, title: &str, time: &str, category: Category| Task {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        category,
        completed: false,
        in_progress: false,
        important: false,
        created_at: now,
    };

    vec![
        Task {
            completed: true,
            ..task("1", "Morning exercise", "7:00", Category::Health)
        },
        Task {
            in_progress: true,
            ..task("2", "Design review meeting", "10:00", Category::Work)
        },
        task("3", "Buy groceries", "14:00", Category::Life),
        task(
            "4",
            "Read for 30 minutes",
            "evening",
            Category::SelfImprovement,
        ),
        Task {
            important: true,
            ..task("5", "Finish project proposal", "due tomorrow", Category::Work)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_layout_uses_camel_case_names() {
        let task = Task {
            id: "42".into(),
            title: "Stretch".into(),
            time: TIME_UNSET.into(),
            category: Category::SelfImprovement,
            completed: false,
            in_progress: true,
            important: false,
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["inProgress"], serde_json::json!(true));
        assert_eq!(json["createdAt"], serde_json::json!(1_700_000_000_000i64));
        assert_eq!(json["category"], serde_json::json!("Self-improvement"));
        // No snake_case leakage
        assert!(json.get("in_progress").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn category_name_round_trip() {
        for cat in CATEGORIES {
            assert_eq!(Category::from_name(cat.name()), Some(cat));
        }
        assert_eq!(Category::from_name("work"), Some(Category::Work));
        assert_eq!(
            Category::from_name("self-improvement"),
            Some(Category::SelfImprovement)
        );
        assert_eq!(Category::from_name("nonsense"), None);
    }

    #[test]
    fn category_cycle_wraps() {
        assert_eq!(Category::Other.next(), Category::Work);
        assert_eq!(Category::Work.prev(), Category::Other);
        let mut cat = Category::Work;
        for _ in 0..CATEGORIES.len() {
            cat = cat.next();
        }
        assert_eq!(cat, Category::Work);
    }

    #[test]
    fn seed_set_shape() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 5);
        let ids: Vec<&str> = seed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(seed.iter().filter(|t| t.completed).count(), 1);
        assert_eq!(seed.iter().filter(|t| t.in_progress).count(), 1);
        assert_eq!(seed.iter().filter(|t| t.important).count(), 1);
    }

    #[test]
    fn created_date_converts_to_local_day() {
        use chrono::TimeZone;
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let millis = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
            .timestamp_millis();
        let task = Task {
            id: "t".into(),
            title: "t".into(),
            time: TIME_UNSET.into(),
            category: Category::Work,
            completed: false,
            in_progress: false,
            important: false,
            created_at: millis,
        };
        assert_eq!(task.created_date(), Some(date));
    }
}
