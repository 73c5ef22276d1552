use super::task::{Task, TaskCounts};
use chrono::Local;
use prettytable::{format, row, Table};

/// Characters of the id shown in tables; any unique prefix is accepted back.
pub const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    pub fn tasks_table(tasks: &[&Task]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["ID", "DONE", "TASK", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                short_id(&task.id),
                if task.completed { "[x]" } else { "[ ]" },
                task.text,
                task.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            ]);
        }

        table
    }

    pub fn tasks(tasks: &[&Task]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn counts_table(counts: &TaskCounts) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["ALL", "ACTIVE", "COMPLETED", "PROGRESS"]);
        table.add_row(row![
            counts.all,
            counts.active,
            counts.completed,
            format!("{:.0}%", counts.completion_percent())
        ]);

        table
    }

    pub fn counts(counts: &TaskCounts) {
        Self::counts_table(counts).printstd();
    }
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
