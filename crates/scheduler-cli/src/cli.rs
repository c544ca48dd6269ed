use clap::{Parser, Subcommand};

/// A task scheduler with compact repeat rules
#[derive(Parser, Debug)]
#[command(name = "scheduler", author, version, about, long_about = None)]
pub struct Cli {
    /// Use this date (YYYYMMDD) as today instead of the system date
    #[arg(long, global = true, value_name = "YYYYMMDD")]
    pub today: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the next date of a repeat rule
    Next(NextCommand),
    /// Add a new task
    Add(AddCommand),
    /// List or search tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Anchor date (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// Repeat rule, e.g. "d 7", "y", "w 1,3", "m -1 2,8"
    #[arg(long, allow_hyphen_values = true)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to today
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The date of the task (YYYYMMDD or a phrase like "tomorrow")
    #[arg(short, long)]
    pub date: Option<String>,
    /// A free-form comment
    #[arg(short, long)]
    pub comment: Option<String>,
    /// Repeat rule
    #[arg(short, long, allow_hyphen_values = true)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Text to search in titles and comments, or a DD.MM.YYYY date
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    /// YYYYMMDD or a phrase like "next friday"
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub repeat: Option<String>,
    /// Turn the task into a one-off task
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}
