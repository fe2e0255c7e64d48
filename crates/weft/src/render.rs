//! Pattern renderer: runs the row walker for every row and forwards the
//! resulting strokes to a caller-supplied sink.

use std::str::FromStr;

use crate::error::{WeftError, WeftResult};
use crate::geometry::Viewport;
use crate::row::{Lane, PatternRow, Scan};
use crate::walk::{walk, DrawInstruction};

/// Stroke width in canvas pixels; divided by the scale in the drawing frame.
pub const STROKE_WIDTH: f64 = 1.0;

pub const BACKGROUND_COLOR: &str = "#fff";
pub const LINE_COLOR: &str = "#222";

/// Lane/direction combinations in drawing order.
pub const WALK_ORDER: [(Lane, Scan); 4] = [
    (Lane::Primary, Scan::Forward),
    (Lane::Mirrored, Scan::Forward),
    (Lane::Primary, Scan::Backward),
    (Lane::Mirrored, Scan::Backward),
];

/// Canvas size, drawing scale and stroke color.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    /// Stroke color; `None` uses [`LINE_COLOR`].
    pub color: Option<String>,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            scale: 1.0,
            color: Some(LINE_COLOR.to_string()),
        }
    }
}

impl CanvasSettings {
    pub fn viewport(&self) -> Viewport {
        Viewport::from_canvas(self.width as f64, self.height as f64, self.scale)
    }

    pub fn stroke_color(&self) -> &str {
        self.color.as_deref().unwrap_or(LINE_COLOR)
    }

    /// Stroke width in drawing units, so lines stay one pixel wide.
    pub fn stroke_width(&self) -> f64 {
        STROKE_WIDTH / self.scale
    }

    pub fn validate(&self) -> WeftResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WeftError::settings(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(WeftError::settings(format!("scale must be positive, got {}", self.scale)));
        }
        parse_color(self.stroke_color())?;
        Ok(())
    }
}

/// Parse a CSS/SVG color string into `#rrggbb` form.
pub fn parse_color(color: &str) -> WeftResult<String> {
    let c = svgtypes::Color::from_str(color)
        .map_err(|_| WeftError::InvalidColor(color.to_string()))?;
    Ok(format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue))
}

// ============================================================================
// SINKS
// ============================================================================
//
// ## Rust Lesson #25: Traits as Seams
//
// The renderer never knows what it draws on. Anything that implements
// `DrawSink` can receive strokes: an SVG writer, a counter, a plain Vec.

/// Receives strokes in drawing order.
pub trait DrawSink {
    fn draw(&mut self, instruction: &DrawInstruction);
}

/// A sink that also owns canvas setup (size, background, frame, stroke style).
pub trait Surface: DrawSink {
    fn configure(&mut self, settings: &CanvasSettings);
}

impl DrawSink for Vec<DrawInstruction> {
    fn draw(&mut self, instruction: &DrawInstruction) {
        self.push(instruction.clone());
    }
}

/// Counts per render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub rows: usize,
    /// Strokes handed to the sink.
    pub instructions: usize,
    /// Kept lines that were skipped because nothing would be visible.
    pub noops: usize,
}

/// Walk every row in the fixed lane/direction order and draw the results.
pub fn draw_rows<S: DrawSink + ?Sized>(rows: &[PatternRow], viewport: &Viewport, sink: &mut S) -> RenderStats {
    let mut stats = RenderStats { rows: rows.len(), ..RenderStats::default() };

    for row in rows {
        for (lane, scan) in WALK_ORDER {
            for instruction in walk(row, lane, scan, viewport) {
                if instruction.is_noop() {
                    stats.noops += 1;
                    continue;
                }
                sink.draw(&instruction);
                stats.instructions += 1;
            }
        }
    }

    stats
}

/// Configure `surface` for `settings` and draw every row onto it.
pub fn render<S: Surface + ?Sized>(rows: &[PatternRow], settings: &CanvasSettings, surface: &mut S) -> RenderStats {
    surface.configure(settings);
    let stats = draw_rows(rows, &settings.viewport(), surface);
    log::debug!(
        "rendered {} rows: {} strokes, {} skipped ({}x{} @ {})",
        stats.rows,
        stats.instructions,
        stats.noops,
        settings.width,
        settings.height,
        settings.scale
    );
    stats
}

// ============================================================================
// TESTS
// ============================================================================
