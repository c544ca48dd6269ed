use anyhow::{bail, Result};
use scheduler_core::models::UpdateTaskData;
use scheduler_core::repository::TaskRepository;

use crate::cli::EditCommand;
use crate::commands::{print_task_line, CommandContext};
use crate::parser::parse_task_date;
use crate::views::json;

pub async fn edit_task(
    repo: &impl TaskRepository,
    command: EditCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let repeat = if command.repeat_clear {
        Some(String::new())
    } else {
        command.repeat
    };

    let update_data = UpdateTaskData {
        title: command.title,
        date: command
            .date
            .as_deref()
            .map(|d| parse_task_date(d, ctx.today))
            .transpose()?,
        comment: command.comment,
        repeat,
    };

    if update_data.title.is_none()
        && update_data.date.is_none()
        && update_data.comment.is_none()
        && update_data.repeat.is_none()
    {
        bail!("Nothing to edit: pass at least one of --title, --date, --comment, --repeat or --repeat-clear");
    }

    let task = repo.update_task(command.id, update_data, ctx.today).await?;

    if ctx.json {
        println!("{}", json::task(&task)?);
    } else {
        print_task_line("Updated task", &task);
    }
    Ok(())
}
