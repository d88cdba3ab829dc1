use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::paths;
use crate::io::store_io::JsonFileStorage;
use crate::model::task::Task;
use crate::ops::filter::{Tab, filter_tasks};
use crate::ops::form::{FormMode, TaskForm};
use crate::ops::store::TaskStore;
use crate::ops::week::{WeekCell, build_week};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Form,
    Confirm,
}

/// Which row of the add/edit dialog has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Time,
    Category,
    Important,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Time,
            FormField::Time => FormField::Category,
            FormField::Category => FormField::Important,
            FormField::Important => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::Important,
            FormField::Time => FormField::Title,
            FormField::Category => FormField::Time,
            FormField::Important => FormField::Category,
        }
    }
}

/// Dialog state: the pure draft plus focus and a byte cursor into the
/// focused text field
pub struct FormState {
    pub form: TaskForm,
    pub field: FormField,
    pub cursor: usize,
}

impl FormState {
    pub fn create() -> FormState {
        FormState {
            form: TaskForm::create(),
            field: FormField::Title,
            cursor: 0,
        }
    }

    pub fn edit(task: &Task) -> FormState {
        let form = TaskForm::edit(task);
        let cursor = form.title.len();
        FormState {
            form,
            field: FormField::Title,
            cursor,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.form.mode {
            FormMode::Create => "Add Task",
            FormMode::Edit(_) => "Edit Task",
        }
    }

    /// The text buffer under the cursor, if the focused field is textual
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.form.title),
            FormField::Time => Some(&mut self.form.time),
            _ => None,
        }
    }

    pub fn focused_text(&self) -> Option<&str> {
        match self.field {
            FormField::Title => Some(&self.form.title),
            FormField::Time => Some(&self.form.time),
            _ => None,
        }
    }
}

/// Pending delete confirmation
pub struct ConfirmState {
    pub task_id: String,
    pub title: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub theme: Theme,
    pub mode: Mode,
    pub tab: Tab,
    /// Search query, applied to the list live while typing
    pub search: String,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// Scroll offset of the task list (first visible row)
    pub scroll: usize,
    pub form: Option<FormState>,
    pub confirm: Option<ConfirmState>,
    pub week: Vec<WeekCell>,
    pub today: NaiveDate,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore, theme: Theme) -> Self {
        let today = Local::now().date_naive();
        let week = build_week(today, store.tasks());
        App {
            store,
            theme,
            mode: Mode::Navigate,
            tab: Tab::All,
            search: String::new(),
            cursor: 0,
            scroll: 0,
            form: None,
            confirm: None,
            week,
            today,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Ids of the currently visible tasks, in display order
    pub fn visible_ids(&self) -> Vec<String> {
        filter_tasks(self.store.tasks(), &self.search, self.tab)
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        filter_tasks(self.store.tasks(), &self.search, self.tab).len()
    }

    /// Id of the task under the cursor
    pub fn selected_task_id(&self) -> Option<String> {
        self.visible_ids().into_iter().nth(self.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Rebuild the week strip from the current date and task list
    pub fn refresh_week(&mut self) {
        self.today = Local::now().date_naive();
        self.week = build_week(self.today, self.store.tasks());
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = paths::data_dir(data_dir.map(Path::new));
    let config = load_config(&data_dir);
    let theme = Theme::from_config(&config.ui);
    let storage = JsonFileStorage::new(paths::tasks_path(&data_dir));
    let store = TaskStore::load(Box::new(storage));

    let mut app = App::new(store, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Midnight rollover: the strip tracks the current date
        if Local::now().date_naive() != app.today {
            app.refresh_week();
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// An app over the seed set with no disk backing, for handler tests
#[cfg(test)]
pub(crate) fn test_app() -> App {
    use crate::io::store_io::{StorageError, TaskStorage};

    struct NullStorage;

    impl TaskStorage for NullStorage {
        fn load(&self) -> Option<Vec<Task>> {
            None
        }
        fn save(&self, _tasks: &[Task]) -> Result<(), StorageError> {
            Ok(())
        }
    }

    App::new(TaskStore::load(Box::new(NullStorage)), Theme::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_ids_follow_tab_and_search() {
        let mut app = test_app();
        assert_eq!(app.visible_ids().len(), 5);

        app.tab = Tab::Completed;
        assert_eq!(app.visible_ids(), ["1"]);

        app.tab = Tab::All;
        app.search = "work".into();
        assert_eq!(app.visible_ids(), ["2", "5"]);
    }

    #[test]
    fn cursor_clamps_to_visible_count() {
        let mut app = test_app();
        app.cursor = 10;
        app.clamp_cursor();
        assert_eq!(app.cursor, 4);

        app.search = "no such task".into();
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn form_field_focus_cycles() {
        let mut field = FormField::Title;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Important);
    }
}
