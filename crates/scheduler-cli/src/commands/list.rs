use anyhow::Result;
use scheduler_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::commands::CommandContext;
use crate::views::{json, table};

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let tasks = repo.find_tasks(command.search.as_deref()).await?;

    if ctx.json {
        println!("{}", json::tasks(&tasks)?);
    } else {
        table::display_tasks(&tasks, ctx.today);
    }
    Ok(())
}
