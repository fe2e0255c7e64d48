//! Pattern source format: newline-separated rows of comma-separated numbers.
//!
//! ## Drop policy
//!
//! A line is kept only when its first field parses as a finite number.
//! Anything else (AutoCAD `*NAME,description` headers, `;` comments,
//! stray text) is dropped silently. Kept lines are not checked for column
//! count; later fields that fail to parse become NaN, and the row is then
//! rejected by [`PatternRow::from_cells`] when the pattern is built.

use std::fs;
use std::path::Path;

use crate::error::{WeftError, WeftResult};
use crate::row::PatternRow;

/// Split pattern text into numeric cell lists.
pub fn parse_pattern(text: &str) -> Vec<Vec<f64>> {
    text.split('\n')
        // A blank line would otherwise read as the one-cell row `[0]`.
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let cells: Vec<f64> = line.split(',').map(parse_cell).collect();
            match cells.first() {
                Some(first) if first.is_finite() => Some(cells),
                _ => None,
            }
        })
        .collect()
}

/// Parse one field: surrounding whitespace ignored, empty reads as 0,
/// anything unparsable as NaN.
fn parse_cell(field: &str) -> f64 {
    let field = field.trim();
    if field.is_empty() {
        return 0.0;
    }
    field.parse().unwrap_or(f64::NAN)
}

/// A list of validated rows, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    pub rows: Vec<PatternRow>,
}

impl Pattern {
    /// Build from cell lists, dropping inert or malformed rows.
    pub fn from_cells<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, cells)| match PatternRow::from_cells(&cells) {
                Ok(row) => Some(row),
                Err(e) => {
                    log::debug!("skipping pattern row {}: {}", i, e);
                    None
                }
            })
            .collect();
        Self { rows }
    }

    pub fn parse(text: &str) -> Self {
        Self::from_cells(parse_pattern(text))
    }

    /// Read and parse a pattern file.
    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WeftError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pattern = Self::parse(&text);
        log::debug!("loaded {} rows from {}", pattern.rows.len(), path.display());
        Ok(pattern)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
