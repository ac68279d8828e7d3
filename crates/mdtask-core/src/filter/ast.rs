use crate::date::compare_dates;
use crate::domain::{Task, TaskStatus};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateOp {
    On,
    OnOrBefore,
    OnOrAfter,
    None,
    Has,
}

/// One filter test derived from a single query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Status {
        done: bool,
    },
    DueDate {
        op: DueDateOp,
        date: Option<String>,
    },
    /// An empty `tag` turns this into a has-any / has-none test governed
    /// by `has_any`; otherwise it is a membership test with `include`
    /// polarity.
    Tag {
        tag: String,
        include: bool,
        has_any: bool,
    },
    Path {
        substring: String,
        include: bool,
    },
    Description {
        substring: String,
        include: bool,
    },
}

impl Predicate {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Predicate::Status { done } => {
                if *done {
                    task.status == TaskStatus::Complete
                } else {
                    task.status == TaskStatus::Incomplete
                }
            }
            Predicate::DueDate { op, date } => match op {
                DueDateOp::None => task.due_date.is_none(),
                DueDateOp::Has => task.due_date.is_some(),
                DueDateOp::On => match (&task.due_date, date) {
                    (Some(have), Some(want)) => have == want,
                    _ => false,
                },
                DueDateOp::OnOrBefore => match (&task.due_date, date) {
                    (Some(have), Some(want)) => compare_dates(have, want) != Ordering::Greater,
                    _ => false,
                },
                DueDateOp::OnOrAfter => match (&task.due_date, date) {
                    (Some(have), Some(want)) => compare_dates(have, want) != Ordering::Less,
                    _ => false,
                },
            },
            Predicate::Tag {
                tag,
                include,
                has_any,
            } => {
                if tag.is_empty() {
                    let has_tags = !task.tags.is_empty();
                    if *has_any {
                        has_tags
                    } else {
                        !has_tags
                    }
                } else if task.tags.iter().any(|t| t == tag) {
                    *include
                } else {
                    !*include
                }
            }
            Predicate::Path { substring, include } => {
                task.file_path.contains(substring.as_str()) == *include
            }
            Predicate::Description { substring, include } => {
                task.description.contains(substring.as_str()) == *include
            }
        }
    }
}

/// An ordered, AND-combined list of predicates. The empty query matches
/// every task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    predicates: Vec<Predicate>,
}

impl Query {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(task))
    }
}
