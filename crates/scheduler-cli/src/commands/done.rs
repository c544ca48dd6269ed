use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use scheduler_core::models::CompletionResult;
use scheduler_core::repository::TaskRepository;

use crate::cli::DoneCommand;
use crate::commands::CommandContext;
use crate::views::json;

pub async fn done_task(
    repo: &impl TaskRepository,
    command: DoneCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let result = repo.complete_task(command.id, ctx.today).await?;

    if ctx.json {
        println!("{}", json::completion(&result)?);
        return Ok(());
    }

    let success_style = Style::new().green().bold();
    match result {
        CompletionResult::Removed(task) => {
            println!("{} Completed task: '{}'", "✓".style(success_style), task.title);
        }
        CompletionResult::Rescheduled {
            previous_date,
            task,
        } => {
            println!("{} Completed task: '{}'", "✓".style(success_style), task.title);
            println!(
                "  {} Rescheduled from {} to {}",
                "↻".style(Style::new().blue()),
                previous_date,
                task.date.cyan()
            );
        }
    }
    Ok(())
}
