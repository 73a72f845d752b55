use crate::api::tracking_time::{Project, Task};
use crate::libs::entry::TimeEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn entries(entries: &[TimeEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PROJECT", "TASK", "START", "END", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                entry.date.format("%Y-%m-%d"),
                entry.project,
                entry.task,
                entry.start.format("%H:%M"),
                entry.end.format("%H:%M"),
                entry.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "STATUS", "ARCHIVED"]);
        for project in projects {
            table.add_row(row![
                project.id,
                project.name,
                project.status.clone().unwrap_or_else(|| "N/A".to_string()),
                project.is_archived
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for task in tasks {
            table.add_row(row![task.id, task.name]);
        }
        table.printstd();

        Ok(())
    }
}
