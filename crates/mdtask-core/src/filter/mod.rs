mod ast;
mod parser;

use thiserror::Error;

pub use ast::{DueDateOp, Predicate, Query};
pub use parser::parse_query;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("failed to parse filter line {line:?}: {date} is not a valid YYYY-MM-DD date")]
    InvalidDate { line: String, date: String },
}
