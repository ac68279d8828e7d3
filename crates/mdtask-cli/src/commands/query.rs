use crate::commands::{print_tasks, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use mdtask_core::parse_query;
use mdtask_scan::scan_tasks;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Root directory to scan (repeatable); falls back to configured roots
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,
    /// Filter query, one filter per line
    #[arg(long, conflicts_with = "query_file")]
    pub query: Option<String>,
    /// Read the filter query from a file
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,
}

pub fn run_query(ctx: &Context<'_>, args: QueryArgs) -> Result<()> {
    let roots = if args.roots.is_empty() {
        ctx.config.roots.clone()
    } else {
        args.roots
    };
    if roots.is_empty() {
        return Err(invalid_input(
            "no scan roots: pass --root or set roots in the config file",
        ));
    }

    let raw_query = match (args.query, args.query_file) {
        (Some(text), None) => Some(text),
        (None, Some(path)) => Some(
            fs::read_to_string(&path)
                .with_context(|| format!("read query file {}", path.display()))?,
        ),
        (None, None) => ctx.config.default_query.clone(),
        (Some(_), Some(_)) => unreachable!("clap rejects conflicting query flags"),
    };

    // An empty query string means no filtering.
    let query = match raw_query.as_deref() {
        Some(text) if !text.is_empty() => Some(parse_query(text)?),
        _ => None,
    };

    let tasks = scan_tasks(&roots, query.as_ref())?;
    print_tasks(ctx, &tasks)
}
