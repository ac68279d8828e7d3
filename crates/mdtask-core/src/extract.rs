use crate::domain::{Task, TaskStatus};
use regex::Regex;
use std::sync::LazyLock;

// Marker must be exactly `- [ ]` or `- [x]`; any other bracket content
// means the line is not a task.
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*- \[([ x])\](.*)$").unwrap());

static TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[\w-]+").unwrap());

static DUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:📅|🗓️)\s*(\d{4}-\d{2}-\d{2})").unwrap());

/// Extracts a checklist task from one line of text.
///
/// Returns `None` when the line does not match the task grammar; this is
/// the only non-success outcome. Extraction is deterministic and never
/// fails: tags are collected left to right with the `#` prefix stripped,
/// the first due-date token wins, and the description is the remaining
/// content with tag and due-date tokens removed and surrounding
/// whitespace trimmed.
pub fn extract_task(line: &str, file_path: &str, line_number: usize) -> Option<Task> {
    let caps = TASK_LINE.captures(line)?;

    let status = if &caps[1] == "x" {
        TaskStatus::Complete
    } else {
        TaskStatus::Incomplete
    };

    let content = caps.get(2).map_or("", |m| m.as_str());

    let tags: Vec<String> = TAG_TOKEN
        .find_iter(content)
        .map(|m| m.as_str().trim_start_matches('#').to_string())
        .collect();

    let due_date = DUE_TOKEN.captures(content).map(|c| c[1].to_string());

    let without_tags = TAG_TOKEN.replace_all(content, "");
    let without_due = DUE_TOKEN.replace_all(&without_tags, "");
    let description = without_due.trim().to_string();

    Some(Task {
        id: format!("{file_path}:{line_number}"),
        description,
        status,
        file_path: file_path.to_string(),
        due_date,
        tags,
        line_number,
    })
}

#[cfg(test)]
mod tests {
    use super::extract_task;
    use crate::domain::TaskStatus;

    #[test]
    fn extract_simple_incomplete() {
        let task = extract_task("- [ ] Buy groceries", "todo.md", 1).expect("task");
        assert_eq!(task.id, "todo.md:1");
        assert_eq!(task.description, "Buy groceries");
        assert_eq!(task.status, TaskStatus::Incomplete);
        assert_eq!(task.file_path, "todo.md");
        assert_eq!(task.line_number, 1);
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn extract_simple_complete() {
        let task = extract_task("- [x] Buy groceries", "todo.md", 2).expect("task");
        assert_eq!(task.status, TaskStatus::Complete);
        assert_eq!(task.description, "Buy groceries");
    }

    #[test]
    fn extract_with_tags() {
        let task = extract_task("- [ ] Buy groceries #shopping #urgent", "todo.md", 3).expect("task");
        assert_eq!(task.description, "Buy groceries");
        assert_eq!(task.tags, vec!["shopping", "urgent"]);
    }

    #[test]
    fn extract_with_calendar_emoji_due_date() {
        let task = extract_task("- [ ] Buy groceries 📅 2024-01-15", "todo.md", 4).expect("task");
        assert_eq!(task.description, "Buy groceries");
        assert_eq!(task.due_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn extract_with_alternate_calendar_emoji() {
        let task = extract_task("- [ ] Buy groceries 🗓️ 2024-01-15", "todo.md", 5).expect("task");
        assert_eq!(task.due_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn extract_with_tags_and_due_date() {
        let task =
            extract_task("- [x] Buy groceries #shopping 📅 2024-01-15", "todo.md", 6).expect("task");
        assert_eq!(task.description, "Buy groceries");
        assert_eq!(task.status, TaskStatus::Complete);
        assert_eq!(task.tags, vec!["shopping"]);
        assert_eq!(task.due_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn plain_text_is_not_a_task() {
        assert!(extract_task("This is just regular text", "todo.md", 7).is_none());
    }

    #[test]
    fn uppercase_marker_is_not_a_task() {
        assert!(extract_task("- [X] Shouting", "todo.md", 1).is_none());
        assert!(extract_task("- [-] Cancelled", "todo.md", 2).is_none());
        assert!(extract_task("- [xx] Double", "todo.md", 3).is_none());
    }

    #[test]
    fn indentation_is_discarded() {
        let task = extract_task("  - [ ] Indented task", "todo.md", 8).expect("task");
        assert_eq!(task.description, "Indented task");
    }

    #[test]
    fn tag_order_is_left_to_right() {
        let task = extract_task("- [ ] Task #tag1 #tag2 #tag3", "todo.md", 9).expect("task");
        assert_eq!(task.tags, vec!["tag1", "tag2", "tag3"]);
    }

    #[test]
    fn hyphenated_tag_is_one_token() {
        let task = extract_task("- [ ] Task #my-tag", "todo.md", 10).expect("task");
        assert_eq!(task.tags, vec!["my-tag"]);
    }

    #[test]
    fn tag_stops_at_punctuation() {
        let task = extract_task("- [ ] Call Ada #phone, then relax", "todo.md", 11).expect("task");
        assert_eq!(task.tags, vec!["phone"]);
        assert_eq!(task.description, "Call Ada , then relax");
    }

    #[test]
    fn first_due_date_token_wins() {
        let task =
            extract_task("- [ ] Pick one 📅 2024-01-15 📅 2024-02-20", "todo.md", 12).expect("task");
        assert_eq!(task.due_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn description_never_keeps_tokens() {
        let task =
            extract_task("- [ ] Plan trip #travel 📅 2024-03-01 #family", "todo.md", 13).expect("task");
        assert!(!task.description.contains('#'));
        assert!(!task.description.contains("📅"));
        assert!(!task.description.contains("2024-03-01"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let line = "- [x] Repeat me #twice 📅 2024-01-15";
        let first = extract_task(line, "a.md", 4).expect("task");
        let second = extract_task(line, "a.md", 4).expect("task");
        assert_eq!(first, second);
    }
}
