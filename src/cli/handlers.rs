use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::{self, StatsJson};
use crate::io::paths;
use crate::io::store_io::JsonFileStorage;
use crate::model::task::Category;
use crate::ops::filter::{Tab, completion_rate, filter_tasks};
use crate::ops::store::{TaskDraft, TaskPatch, TaskStore};
use crate::ops::week::build_week_now;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    json: bool,
    data_dir: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = paths::data_dir(data_dir.map(Path::new));
    let storage = JsonFileStorage::new(paths::tasks_path(&data_dir));
    let mut store = TaskStore::load(Box::new(storage));

    match command {
        // Read commands
        Commands::List(args) => cmd_list(&store, args, json),
        Commands::Search(args) => cmd_search(&store, args, json),
        Commands::Week => cmd_week(&store, json),
        Commands::Stats => cmd_stats(&store, json),

        // Write commands
        Commands::Add(args) => cmd_add(&mut store, args),
        Commands::Edit(args) => cmd_edit(&mut store, args),
        Commands::Done(args) => cmd_done(&mut store, args),
        Commands::Start(args) => cmd_start(&mut store, args),
        Commands::Flag(args) => cmd_flag(&mut store, args),
        Commands::Delete(args) => cmd_delete(&mut store, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_tab(s: &str) -> Result<Tab, String> {
    Tab::from_name(s)
        .ok_or_else(|| format!("unknown tab '{}' (expected: all, in-progress, completed)", s))
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_name(s).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected: Work, Life, Health, Study, Self-improvement, Other)",
            s
        )
    })
}

fn print_tasks(tasks: &[&crate::model::task::Task], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
    } else {
        for task in tasks {
            println!("{}", output::format_task_line(task));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tab = parse_tab(&args.tab)?;
    let query = args.search.unwrap_or_default();
    let visible = filter_tasks(store.tasks(), &query, tab);
    print_tasks(&visible, json)?;
    Ok(())
}

fn cmd_search(
    store: &TaskStore,
    args: SearchArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let visible = filter_tasks(store.tasks(), &args.query, Tab::All);
    print_tasks(&visible, json)?;
    Ok(())
}

fn cmd_week(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let week = build_week_now(store.tasks());
    if json {
        let cells: Vec<_> = week.iter().map(output::week_cell_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&cells)?);
    } else {
        for line in output::format_week(&week) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = store.tasks();
    let stats = StatsJson {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
        in_progress: tasks.iter().filter(|t| t.in_progress && !t.completed).count(),
        important: tasks.iter().filter(|t| t.important).count(),
        completion_rate: completion_rate(tasks),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in output::format_stats(&stats) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = match args.category.as_deref() {
        Some(s) => parse_category(s)?,
        None => Category::default(),
    };
    let created = store.create(TaskDraft {
        title: args.title,
        time: args.time.unwrap_or_default(),
        category,
        important: args.important,
    })?;
    // Blank titles are rejected silently at the boundary
    if let Some(id) = created
        && let Some(task) = store.get(&id)
    {
        println!("added {}", output::format_task_line(task));
    }
    Ok(())
}

fn cmd_edit(store: &mut TaskStore, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let category = match args.category.as_deref() {
        Some(s) => Some(parse_category(s)?),
        None => None,
    };
    let changed = store.update(
        &args.id,
        TaskPatch {
            title: args.title,
            time: args.time,
            category,
            important: args.important,
        },
    )?;
    if changed {
        println!("updated {}", args.id);
    } else {
        println!("no changes");
    }
    Ok(())
}

fn cmd_done(store: &mut TaskStore, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    if store.toggle_completed(&args.id)?
        && let Some(task) = store.get(&args.id)
    {
        println!("{}", output::format_task_line(task));
    }
    Ok(())
}

fn cmd_start(store: &mut TaskStore, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    if store.toggle_in_progress(&args.id)?
        && let Some(task) = store.get(&args.id)
    {
        println!("{}", output::format_task_line(task));
    }
    Ok(())
}

fn cmd_flag(store: &mut TaskStore, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    if store.toggle_important(&args.id)?
        && let Some(task) = store.get(&args.id)
    {
        println!("{}", output::format_task_line(task));
    }
    Ok(())
}

fn cmd_delete(store: &mut TaskStore, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(task) = store.get(&args.id) else {
        // Unknown id: nothing to delete, nothing to confirm
        println!("no such task: {}", args.id);
        return Ok(());
    };

    if !args.yes {
        // Interactive confirmation; the store itself is confirmation-agnostic
        eprint!("delete \"{}\"? [y/n] ", task.title);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("cancelled");
            return Ok(());
        }
    }

    if store.delete(&args.id)? {
        println!("deleted {}", args.id);
    }
    Ok(())
}
