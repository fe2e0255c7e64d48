//! # weft
//!
//! Directional line-pattern generation: each pattern row describes a
//! family of parallel, evenly-offset dashed lines at one angle. Rows are
//! walked line by line, clipped against a centered viewport, and handed
//! to a drawing surface as dash-phased strokes.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod clip;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod render;
pub mod row;
pub mod svg;
pub mod walk;

// Re-export common types at crate root for convenience.
pub use clip::{clip_to_viewport, segment_intersection, Intersection, ViewportHits};
pub use error::{WeftError, WeftResult};
pub use geometry::{viewport_corners, Line, Point, Viewport};
pub use parse::{parse_pattern, Pattern};
pub use render::{draw_rows, render, CanvasSettings, DrawSink, RenderStats, Surface};
pub use row::{Lane, PatternRow, RowError, Scan, DRAW_MAXIMUM, DRAW_MINIMUM};
pub use svg::SvgSurface;
pub use walk::{walk, DrawInstruction, RowWalk};
