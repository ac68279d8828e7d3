use crate::commands::{print_tasks, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use mdtask_scan::extract_from_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Markdown file to extract tasks from
    pub file: PathBuf,
}

pub fn run_extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let tasks = extract_from_file(&args.file)
        .with_context(|| format!("extract tasks from {}", args.file.display()))?;
    print_tasks(ctx, &tasks)
}
