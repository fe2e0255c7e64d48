//! CLI command implementations.
//!
//! - `render` - Render a pattern to SVG, PNG (or other raster) or JSON
//! - `rows` - List the rows a pattern file yields
//! - `benchmark` - Time pattern rendering

pub mod benchmark;
pub mod common;
pub mod raster;
pub mod render;
pub mod rows;
pub mod settings;

pub use benchmark::{cmd_benchmark, BenchmarkArgs};
pub use render::{cmd_render, RenderArgs};
pub use rows::{cmd_rows, RowsArgs};
