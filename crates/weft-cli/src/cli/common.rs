//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use weft::Pattern;

/// Load a pattern from a file, or from stdin when `path` is `-`.
pub fn read_pattern(path: &str) -> Result<Pattern> {
    let pattern = if path == "-" {
        eprintln!("Reading pattern from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read pattern from stdin")?;
        Pattern::parse(&buffer)
    } else {
        eprintln!("Loading: {}", path);
        Pattern::load(path)?
    };

    if pattern.is_empty() {
        log::warn!("{} contains no drawable rows", path);
    }
    Ok(pattern)
}

/// Write text output to a file, or stdout for `None` / `-`.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote: {}", path.display());
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
