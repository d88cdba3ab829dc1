use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tb", about = concat!("[#] taskboard v", env!("CARGO_PKG_VERSION"), " - your day at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, filtered by tab and search query
    List(ListArgs),
    /// Search tasks by title or category substring
    Search(SearchArgs),
    /// Add a task to the top of the board
    Add(AddArgs),
    /// Edit fields of an existing task
    Edit(EditArgs),
    /// Toggle a task's completed flag
    Done(IdArg),
    /// Toggle a task's in-progress flag
    Start(IdArg),
    /// Toggle a task's important flag
    Flag(IdArg),
    /// Delete a task
    Delete(DeleteArgs),
    /// Show the current week strip
    Week,
    /// Show task statistics
    Stats,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Tab to show (all, in-progress, completed)
    #[arg(long, default_value = "all")]
    pub tab: String,
    /// Case-insensitive search substring
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Substring to match against titles and category names
    pub query: String,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Due label, e.g. "10:00" or "due tomorrow"
    #[arg(long)]
    pub time: Option<String>,
    /// Category (Work, Life, Health, Study, Self-improvement, Other)
    #[arg(long)]
    pub category: Option<String>,
    /// Mark as important
    #[arg(long)]
    pub important: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New due label
    #[arg(long)]
    pub time: Option<String>,
    /// New category
    #[arg(long)]
    pub category: Option<String>,
    /// Set the important flag (true or false)
    #[arg(long)]
    pub important: Option<bool>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
