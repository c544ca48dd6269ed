use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use scheduler_core::models::Task;
use scheduler_core::recurrence::parse_date;

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{}", build_task_table(tasks, today));
}

pub fn build_task_table(tasks: &[Task], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "When", "Title", "Comment", "Repeat"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));
        row.add_cell(Cell::new(&task.date));
        row.add_cell(when_cell(&task.date, today));

        let mut title_cell = Cell::new(&task.title);
        if task.is_recurring() {
            title_cell = title_cell.add_attribute(Attribute::Bold);
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(&task.comment));
        row.add_cell(if task.is_recurring() {
            Cell::new(format!("↻ {}", task.repeat)).fg(Color::Cyan)
        } else {
            Cell::new("-").fg(Color::DarkGrey)
        });
        table.add_row(row);
    }

    table
}

/// Relative date, red when overdue and yellow when due today.
fn when_cell(date: &str, today: NaiveDate) -> Cell {
    let Ok(date) = parse_date(date) else {
        return Cell::new("?").fg(Color::DarkGrey);
    };

    if date == today {
        return Cell::new("today").fg(Color::Yellow);
    }

    let text = HumanTime::from(date - today).to_string();
    if date < today {
        Cell::new(text).fg(Color::Red)
    } else {
        Cell::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, date: &str, repeat: &str) -> Task {
        Task {
            id,
            date: date.to_string(),
            title: format!("Task {}", id),
            comment: String::new(),
            repeat: repeat.to_string(),
        }
    }

    #[test]
    fn test_build_task_table() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
        let tasks = vec![task(1, "20240126", ""), task(2, "20240202", "w 5")];

        let rendered = build_task_table(&tasks, today).to_string();
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Task 1"));
        assert!(rendered.contains("today"));
        assert!(rendered.contains("20240202"));
        assert!(rendered.contains("w 5"));
    }
}
