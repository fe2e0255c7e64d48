//! Rows command: show what a pattern file parses to.

use anyhow::Result;
use clap::Args;

use weft::PatternRow;

use super::common::read_pattern;

#[derive(Debug, Args)]
pub struct RowsArgs {
    /// Pattern file ('-' for stdin)
    pub pattern: String,
}

/// Execute the rows command.
pub fn cmd_rows(args: &RowsArgs) -> Result<()> {
    let pattern = read_pattern(&args.pattern)?;

    println!("{:>4}  {:>8}  {:>18}  {:>9}  {:>9}  dashes", "#", "angle", "base", "primary", "secondary");
    for (i, row) in pattern.rows.iter().enumerate() {
        println!("{}", format_row(i, row));
    }
    println!();
    println!("{} rows", pattern.len());
    Ok(())
}

fn format_row(index: usize, row: &PatternRow) -> String {
    let base = format!("({}, {})", row.base.x, row.base.y);
    let dashes = if row.dashes.is_empty() {
        "solid".to_string()
    } else {
        row.dashes.iter().map(f64::to_string).collect::<Vec<_>>().join(" ")
    };
    format!(
        "{:>4}  {:>8}  {:>18}  {:>9}  {:>9}  {}",
        index, row.angle, base, row.primary, row.secondary, dashes
    )
}
