use anyhow::Result;
use mdtask_config::AppConfig;
use mdtask_core::Task;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod extract;
pub mod query;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_tasks(ctx: &Context<'_>, tasks: &[Task]) -> Result<()> {
    if ctx.json {
        print_json(&tasks)?;
        return Ok(());
    }

    if tasks.is_empty() {
        println!("no tasks");
        return Ok(());
    }

    for task in tasks {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn format_task_line(task: &Task) -> String {
    let marker = if task.is_complete() { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{}:{} {} {}",
        task.file_path, task.line_number, marker, task.description
    );
    for tag in &task.tags {
        line.push_str(" #");
        line.push_str(tag);
    }
    if let Some(due) = &task.due_date {
        line.push_str(" (due ");
        line.push_str(due);
        line.push(')');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::format_task_line;
    use mdtask_core::{Task, TaskStatus};

    #[test]
    fn format_task_line_includes_tags_and_due() {
        let task = Task {
            id: "todo.md:3".to_string(),
            description: "Buy groceries".to_string(),
            status: TaskStatus::Incomplete,
            file_path: "todo.md".to_string(),
            due_date: Some("2024-01-15".to_string()),
            tags: vec!["shopping".to_string()],
            line_number: 3,
        };
        assert_eq!(
            format_task_line(&task),
            "todo.md:3 [ ] Buy groceries #shopping (due 2024-01-15)"
        );
    }
}
