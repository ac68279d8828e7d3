use crate::date::parse_date;
use crate::filter::ast::{DueDateOp, Predicate, Query};
use crate::filter::QueryParseError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

type Build = fn(&Captures<'_>, &str) -> Result<Predicate, QueryParseError>;

fn matcher(pattern: &str, build: Build) -> (Regex, Build) {
    (Regex::new(pattern).expect("valid filter pattern"), build)
}

// Ordered matcher table; the first pattern that matches a line wins.
// Lines matching no pattern are dropped without error.
static MATCHERS: LazyLock<Vec<(Regex, Build)>> = LazyLock::new(|| {
    vec![
        matcher(r"^done$", |_, _| Ok(Predicate::Status { done: true })),
        matcher(r"^not done$", |_, _| Ok(Predicate::Status { done: false })),
        matcher(r"^due on (\d{4}-\d{2}-\d{2})$", |caps, line| {
            Ok(Predicate::DueDate {
                op: DueDateOp::On,
                date: Some(validated_date(caps, line)?),
            })
        }),
        matcher(r"^due on or before (\d{4}-\d{2}-\d{2})$", |caps, line| {
            Ok(Predicate::DueDate {
                op: DueDateOp::OnOrBefore,
                date: Some(validated_date(caps, line)?),
            })
        }),
        matcher(r"^due on or after (\d{4}-\d{2}-\d{2})$", |caps, line| {
            Ok(Predicate::DueDate {
                op: DueDateOp::OnOrAfter,
                date: Some(validated_date(caps, line)?),
            })
        }),
        matcher(r"^no due date$", |_, _| {
            Ok(Predicate::DueDate {
                op: DueDateOp::None,
                date: None,
            })
        }),
        matcher(r"^has due date$", |_, _| {
            Ok(Predicate::DueDate {
                op: DueDateOp::Has,
                date: None,
            })
        }),
        matcher(r"^tag include #([\w-]+)$", |caps, _| {
            Ok(Predicate::Tag {
                tag: caps[1].to_string(),
                include: true,
                has_any: false,
            })
        }),
        matcher(r"^tag do not include #([\w-]+)$", |caps, _| {
            Ok(Predicate::Tag {
                tag: caps[1].to_string(),
                include: false,
                has_any: false,
            })
        }),
        matcher(r"^has tags$", |_, _| {
            Ok(Predicate::Tag {
                tag: String::new(),
                include: false,
                has_any: true,
            })
        }),
        matcher(r"^no tags$", |_, _| {
            Ok(Predicate::Tag {
                tag: String::new(),
                include: false,
                has_any: false,
            })
        }),
        matcher(r"^path includes (.+)$", |caps, _| {
            Ok(Predicate::Path {
                substring: caps[1].to_string(),
                include: true,
            })
        }),
        matcher(r"^path does not include (.+)$", |caps, _| {
            Ok(Predicate::Path {
                substring: caps[1].to_string(),
                include: false,
            })
        }),
        matcher(r"^description includes (.+)$", |caps, _| {
            Ok(Predicate::Description {
                substring: caps[1].to_string(),
                include: true,
            })
        }),
        matcher(r"^description does not include (.+)$", |caps, _| {
            Ok(Predicate::Description {
                substring: caps[1].to_string(),
                include: false,
            })
        }),
    ]
});

fn validated_date(caps: &Captures<'_>, line: &str) -> Result<String, QueryParseError> {
    let date = caps[1].to_string();
    if parse_date(&date).is_none() {
        return Err(QueryParseError::InvalidDate {
            line: line.to_string(),
            date,
        });
    }
    Ok(date)
}

/// Parses a multi-line query string into a [`Query`].
///
/// Blank lines and `#` comment lines are skipped. Keywords are matched
/// case-sensitively against the table above; unrecognized lines are
/// silently dropped so unsupported filter syntax degrades gracefully.
/// The only failure is a recognized date filter whose date segment is
/// not a valid calendar date; the error carries the offending line
/// verbatim and fails the whole query.
pub fn parse_query(input: &str) -> Result<Query, QueryParseError> {
    let mut predicates = Vec::new();

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(predicate) = parse_filter_line(line)? {
            predicates.push(predicate);
        }
    }

    Ok(Query::new(predicates))
}

fn parse_filter_line(line: &str) -> Result<Option<Predicate>, QueryParseError> {
    for (pattern, build) in MATCHERS.iter() {
        if let Some(caps) = pattern.captures(line) {
            return build(&caps, line).map(Some);
        }
    }
    Ok(None)
}
