use anyhow::Result;
use scheduler_core::recurrence::{parse_date, RecurrenceManager};

use crate::cli::NextCommand;
use crate::commands::CommandContext;
use crate::views::json;

pub fn next_date(manager: &RecurrenceManager, command: NextCommand, ctx: &CommandContext) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(literal) => parse_date(literal)?,
        None => ctx.today,
    };

    let next = manager.next_date(now, &command.date, &command.repeat)?;

    if ctx.json {
        println!("{}", json::next_date(&next)?);
    } else {
        println!("{}", next);
    }
    Ok(())
}
