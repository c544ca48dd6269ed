use anyhow::Result;
use scheduler_core::error::CoreError;
use scheduler_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::commands::CommandContext;
use crate::views::{json, table};

pub async fn show_task(
    repo: &impl TaskRepository,
    command: ShowCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if ctx.json {
        println!("{}", json::task(&task)?);
    } else {
        table::display_tasks(std::slice::from_ref(&task), ctx.today);
    }
    Ok(())
}
