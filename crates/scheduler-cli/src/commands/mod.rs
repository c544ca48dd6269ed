use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};
use scheduler_core::models::Task;

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod next;
pub mod show;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub today: NaiveDate,
    pub json: bool,
}

/// One-line summary used by the mutating commands.
pub(crate) fn print_task_line(prefix: &str, task: &Task) {
    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!("{} {}: {}", "✓".style(success_style), prefix, task.title.bright_white().bold());
    println!("  {} Task ID: {}", "→".style(info_style), task.id.to_string().yellow());
    println!("  {} Date: {}", "→".style(info_style), task.date.cyan());
    if task.is_recurring() {
        println!("  {} Repeat: {}", "→".style(info_style), task.repeat.cyan());
    }
}
