pub mod date;
pub mod domain;
pub mod extract;
pub mod filter;

pub use date::compare_dates;
pub use domain::*;
pub use extract::extract_task;
pub use filter::{parse_query, DueDateOp, Predicate, Query, QueryParseError};
