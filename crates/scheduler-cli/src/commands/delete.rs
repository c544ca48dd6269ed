use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use scheduler_core::error::CoreError;
use scheduler_core::repository::TaskRepository;

use crate::cli::DeleteCommand;
use crate::commands::CommandContext;
use crate::views::json;

pub async fn delete_task(
    repo: &impl TaskRepository,
    command: DeleteCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", task.title))
            .default(false)
            .interact()?;

        if !confirmation {
            if ctx.json {
                println!("{}", json::deleted(false)?);
            } else {
                println!("Deletion cancelled.");
            }
            return Ok(());
        }
    }

    repo.delete_task(task.id).await?;

    if ctx.json {
        println!("{}", json::deleted(true)?);
    } else {
        println!("{} Deleted task: '{}'", "✓".style(Style::new().green().bold()), task.title);
    }
    Ok(())
}
