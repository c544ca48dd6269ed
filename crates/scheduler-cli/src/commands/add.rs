use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use scheduler_core::models::NewTaskData;
use scheduler_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::commands::{print_task_line, CommandContext};
use crate::parser::parse_task_date;
use crate::views::json;

pub async fn add_task(
    repo: &impl TaskRepository,
    command: AddCommand,
    ctx: &CommandContext,
) -> Result<()> {
    let date = command
        .date
        .as_deref()
        .map(|d| parse_task_date(d, ctx.today))
        .transpose()?;

    let new_task_data = NewTaskData {
        title: command.title,
        date,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };

    let added_task = repo.add_task(new_task_data, ctx.today).await?;

    if ctx.json {
        println!("{}", json::task(&added_task)?);
        return Ok(());
    }

    let prefix = if added_task.is_recurring() {
        "Created recurring task"
    } else {
        "Created task"
    };
    print_task_line(prefix, &added_task);

    let subtle_style = Style::new().bright_black();
    println!("\n{} Quick actions:", "💡".style(subtle_style));
    println!(
        "   {} Mark done: scheduler done {}",
        "•".style(subtle_style),
        added_task.id.to_string().yellow()
    );
    println!(
        "   {} Edit task: scheduler edit {}",
        "•".style(subtle_style),
        added_task.id.to_string().yellow()
    );

    Ok(())
}
