//! Row walker: the parallel-line family of one row, one lane and one
//! scan direction, clipped against the viewport.
//!
//! Each step builds one very long candidate segment from the step's
//! anchor, tests it against the viewport edges and either yields a
//! [`DrawInstruction`] or records a miss. Misses only end the walk once
//! [`DRAW_MINIMUM`](crate::row::DRAW_MINIMUM) steps have been tried.

use std::f64::consts::PI;

use crate::clip::clip_to_viewport;
use crate::geometry::{Line, Point, Viewport};
use crate::row::{Lane, PatternRow, Scan};

/// Length of the candidate segment shot from each anchor.
pub const RAY_LENGTH: f64 = 1_000_000.0;

/// One stroke to hand to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    /// Perpendicular step that produced this line.
    pub index: i64,
    pub lane: Lane,
    pub scan: Scan,
    /// Anchor to far viewport crossing, y flipped for drawing.
    pub line: Line,
    /// Stroke/gap lengths; empty means a solid line.
    pub dash: Vec<f64>,
    /// Offset into `dash` at which the stroke begins.
    pub phase: f64,
}

impl DrawInstruction {
    /// True when the clipped line has no length (the ray points away from
    /// the viewport), so drawing it would leave nothing visible.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.line.x1 == self.line.x2 && self.line.y1 == self.line.y2
    }
}

/// Lazy, finite sequence of draw instructions for one row/lane/scan.
///
/// ## Rust Lesson #24: Implementing Iterator
///
/// Implementing `next()` is all it takes to get `.count()`, `.collect()`,
/// `.take()` and friends. The walk state (current index, whether the
/// last line was kept) lives in the struct between calls.
#[derive(Debug, Clone)]
pub struct RowWalk<'a> {
    row: &'a PatternRow,
    viewport: &'a Viewport,
    lane: Lane,
    scan: Scan,
    index: i64,
    drew_previous: bool,
}

/// Walk one row in one lane and scan direction.
pub fn walk<'a>(row: &'a PatternRow, lane: Lane, scan: Scan, viewport: &'a Viewport) -> RowWalk<'a> {
    RowWalk {
        row,
        viewport,
        lane,
        scan,
        index: scan.seed(),
        drew_previous: true,
    }
}

impl RowWalk<'_> {
    /// Anchor of the line at perpendicular `index`.
    fn anchor(&self, index: i64) -> Point {
        let row = self.row;
        let a = row.angle * PI / 180.0;
        let a_perp = (row.angle - 90.0) * PI / 180.0;
        let i = index as f64;

        Point::new(
            (row.base.x + i * a_perp.cos() * row.secondary) - (i * a.cos() * row.primary),
            (row.base.y + i * a_perp.sin() * row.secondary) - (i * a.sin() * row.primary),
        )
    }

    /// Build and clip the candidate at `index`; `None` when it misses.
    fn candidate(&self, index: i64) -> Option<DrawInstruction> {
        let start = self.anchor(index);
        let ray_angle = self.row.angle * PI / 180.0 + PI * self.lane.angle_factor();
        let ray = Line::new(
            start.x,
            start.y,
            start.x + ray_angle.cos() * RAY_LENGTH,
            start.y + ray_angle.sin() * RAY_LENGTH,
        );

        let hits = clip_to_viewport(&ray, self.viewport);
        if !hits.hits() {
            return None;
        }

        let far = hits.far_ratio.unwrap_or(0.0).clamp(0.0, 1.0);
        let end = if far == 0.0 { start } else { ray.lerp(far) };
        let (dash, phase) = self.row.dash_for(self.lane);

        Some(DrawInstruction {
            index,
            lane: self.lane,
            scan: self.scan,
            line: Line::from_points(start.flip_y(), end.flip_y()),
            dash,
            phase,
        })
    }
}

impl Iterator for RowWalk<'_> {
    type Item = DrawInstruction;

    fn next(&mut self) -> Option<DrawInstruction> {
        while self.scan.should_continue(self.index, self.drew_previous) {
            let index = self.index;
            self.index += self.scan.step();

            match self.candidate(index) {
                Some(instruction) => {
                    self.drew_previous = true;
                    return Some(instruction);
                }
                None => self.drew_previous = false,
            }
        }
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::viewport_corners;
    use crate::row::{DRAW_MAXIMUM, DRAW_MINIMUM};

    fn row(cells: &[f64]) -> PatternRow {
        PatternRow::from_cells(cells).unwrap()
    }

    fn vga() -> Viewport {
        viewport_corners(640.0, 480.0, 1.0)
    }

    #[test]
    fn horizontal_primary_forward_reaches_right_edge() {
        let vp = vga();
        let r = row(&[0.0, 0.0, 0.0, 1.0, 1.0, 5.0, 3.0]);
        let first = walk(&r, Lane::Primary, Scan::Forward, &vp).next().unwrap();

        assert_eq!(first.index, 0);
        assert_eq!(first.line.start(), Point::new(0.0, 0.0));
        assert!((first.line.x2 - 320.0).abs() < 1e-9);
        assert!(first.line.y2.abs() < 1e-9);
        assert_eq!(first.dash, vec![5.0, 3.0]);
        assert_eq!(first.phase, 0.0);
    }

    #[test]
    fn horizontal_mirrored_forward_reaches_left_edge() {
        let vp = vga();
        let r = row(&[0.0, 0.0, 0.0, 1.0, 1.0, 5.0, 3.0]);
        let first = walk(&r, Lane::Mirrored, Scan::Forward, &vp).next().unwrap();

        assert_eq!(first.index, 0);
        assert_eq!(first.line.start(), Point::new(0.0, 0.0));
        assert!((first.line.x2 + 320.0).abs() < 1e-9);
        assert!(first.line.y2.abs() < 1e-6);
        assert_eq!(first.dash, vec![5.0, 3.0]);
        assert_eq!(first.phase, -3.0);
    }

    #[test]
    fn backward_scan_starts_at_minus_one() {
        let vp = vga();
        let r = row(&[0.0, 0.0, 0.0, 0.0, 10.0]);
        let first = walk(&r, Lane::Primary, Scan::Backward, &vp).next().unwrap();

        assert_eq!(first.index, -1);
        assert_eq!(first.scan, Scan::Backward);
        // sin(-90°) * 10 * -1 = +10, flipped for drawing.
        assert!((first.line.y1 + 10.0).abs() < 1e-9);
    }

    #[test]
    fn walk_is_deterministic() {
        let vp = vga();
        let r = row(&[30.0, 3.0, -7.0, 2.0, 6.0, 4.0, -2.0]);
        let a: Vec<_> = walk(&r, Lane::Mirrored, Scan::Backward, &vp).collect();
        let b: Vec<_> = walk(&r, Lane::Mirrored, Scan::Backward, &vp).collect();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn minimum_steps_reach_late_lines() {
        // Lines at y = -333 + 10 * i: indices 0..=9 lie below the
        // viewport, 10..=57 inside, 58 above.
        let vp = vga();
        let r = row(&[0.0, 0.0, -333.0, 0.0, -10.0]);
        let lines: Vec<_> = walk(&r, Lane::Primary, Scan::Forward, &vp).collect();

        assert_eq!(lines.first().map(|l| l.index), Some(10));
        assert_eq!(lines.last().map(|l| l.index), Some(57));
        assert_eq!(lines.len(), 48);
    }

    #[test]
    fn walk_gives_up_after_minimum_when_nothing_hits() {
        let vp = vga();
        let r = row(&[0.0, 0.0, 10_000.0, 0.0, 1.0]);
        assert_eq!(walk(&r, Lane::Primary, Scan::Forward, &vp).count(), 0);
        assert_eq!(walk(&r, Lane::Mirrored, Scan::Backward, &vp).count(), 0);
    }

    #[test]
    fn lines_on_or_past_the_boundary_are_not_emitted() {
        // Lines at y = -10 * i; y = -240 runs along the top edge and only
        // registers on the left edge, so only indices 0..=23 draw.
        let vp = vga();
        let r = row(&[0.0, 0.0, 0.0, 0.0, 10.0]);
        let lines: Vec<_> = walk(&r, Lane::Primary, Scan::Forward, &vp).collect();
        assert_eq!(lines.len(), 24);
        assert!(lines.len() < DRAW_MINIMUM as usize);
        assert!(lines.iter().all(|l| l.line.y1.abs() < 240.0));
    }

    #[test]
    fn dense_rows_hit_the_hard_cap() {
        let vp = vga();
        let r = row(&[0.0, 0.0, 0.0, 0.0, 0.01]);

        let forward = walk(&r, Lane::Primary, Scan::Forward, &vp).count();
        assert_eq!(forward, DRAW_MAXIMUM as usize);

        // Backward runs -1 down to -(max - 1).
        let backward = walk(&r, Lane::Primary, Scan::Backward, &vp).count();
        assert_eq!(backward, DRAW_MAXIMUM as usize - 1);
    }

    #[test]
    fn ray_through_two_corners_reaches_the_far_one() {
        // A diamond: the horizontal line through the origin passes exactly
        // through its left and right corners.
        let vp = Viewport {
            top_left: Point::new(0.0, -240.0),
            top_right: Point::new(240.0, 0.0),
            bottom_left: Point::new(-240.0, 0.0),
            bottom_right: Point::new(0.0, 240.0),
        };
        let r = row(&[0.0, 0.0, 0.0, 0.0, 1000.0]);
        let first = walk(&r, Lane::Primary, Scan::Forward, &vp).next().unwrap();

        assert_eq!(first.index, 0);
        assert!(!first.is_noop());
        assert_eq!((first.line.x1, first.line.y1), (0.0, 0.0));
        assert!((first.line.x2 - 240.0).abs() < 1e-6, "{:?}", first.line);
        assert!(first.line.y2.abs() < 1e-9);
    }

    #[test]
    fn ray_pointing_away_is_a_noop() {
        // Anchor right of the viewport, primary ray heading further right.
        let vp = vga();
        let r = row(&[0.0, 400.0, 0.0, 0.0, 1000.0]);
        let first = walk(&r, Lane::Primary, Scan::Forward, &vp).next().unwrap();
        assert!(first.is_noop());

        let mirrored = walk(&r, Lane::Mirrored, Scan::Forward, &vp).next().unwrap();
        assert!(!mirrored.is_noop());
        assert!((mirrored.line.x2 + 320.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_rows_stay_inside_the_ray() {
        let vp = vga();
        let r = row(&[45.0, 0.0, 0.0, 0.0, 20.0, 1.0]);
        for instruction in walk(&r, Lane::Primary, Scan::Forward, &vp).filter(|i| !i.is_noop()) {
            assert!(instruction.line.length() <= RAY_LENGTH);
            assert!(instruction.line.x2.abs() <= 320.0 + 1e-6);
            assert!(instruction.line.y2.abs() <= 240.0 + 1e-6);
        }
    }
}
