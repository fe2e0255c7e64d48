//! Segment intersection and viewport clipping.
//!
//! This is the HOT PATH: every candidate line of every row is tested
//! against all four viewport edges, up to tens of thousands of times
//! per render.

use crate::geometry::{Line, Point, Viewport};

// ============================================================================
// LINE-LINE INTERSECTION
// ============================================================================

/// Result of intersecting the infinite lines through two segments.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// Parallel lines have no crossing point at all, so the data only exists
/// in the `Crossing` variant. The compiler makes callers handle both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// Parallel or coincident lines (zero denominator).
    Parallel,
    /// The lines cross at `point`; `a_ratio` and `b_ratio` are the
    /// parametric positions along the first and second segment.
    Crossing { point: Point, a_ratio: f64, b_ratio: f64 },
}

impl Intersection {
    pub fn point(&self) -> Option<Point> {
        match *self {
            Intersection::Parallel => None,
            Intersection::Crossing { point, .. } => Some(point),
        }
    }

    /// Whether the crossing lies on the first segment, `[0, 1)`.
    pub fn on_first(&self) -> bool {
        match *self {
            Intersection::Parallel => false,
            Intersection::Crossing { a_ratio, .. } => in_half_open_unit(a_ratio),
        }
    }

    /// Whether the crossing lies on the second segment, `[0, 1)`.
    pub fn on_second(&self) -> bool {
        match *self {
            Intersection::Parallel => false,
            Intersection::Crossing { b_ratio, .. } => in_half_open_unit(b_ratio),
        }
    }
}

#[inline]
fn in_half_open_unit(ratio: f64) -> bool {
    (0.0..1.0).contains(&ratio)
}

/// Intersect the lines through `p1`-`p2` and `p3`-`p4`.
///
/// Only an exactly-zero denominator counts as parallel.
#[inline]
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Intersection {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);

    if denom == 0.0 {
        return Intersection::Parallel;
    }

    let a = p1.y - p3.y;
    let b = p1.x - p3.x;
    let numerator1 = (p4.x - p3.x) * a - (p4.y - p3.y) * b;
    let numerator2 = (p2.x - p1.x) * a - (p2.y - p1.y) * b;
    let a_ratio = numerator1 / denom;
    let b_ratio = numerator2 / denom;

    Intersection::Crossing {
        point: Point::new(p1.x + a_ratio * (p2.x - p1.x), p1.y + a_ratio * (p2.y - p1.y)),
        a_ratio,
        b_ratio,
    }
}

/// Convenience wrapper taking two [`Line`]s.
#[inline]
pub fn line_intersection(first: &Line, second: &Line) -> Intersection {
    segment_intersection(first.start(), first.end(), second.start(), second.end())
}

// ============================================================================
// VIEWPORT CLIPPING
// ============================================================================

/// Crossings of a candidate line with the viewport boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportHits {
    /// Number of edges (0..=4) the infinite candidate line crosses.
    pub edges_crossed: usize,
    /// Largest parameter along the candidate among those crossings.
    pub far_ratio: Option<f64>,
}

impl ViewportHits {
    /// A line that crosses fewer than two edges misses the viewport.
    #[inline]
    pub fn hits(&self) -> bool {
        self.edges_crossed >= 2
    }
}

/// Test a candidate line against all four viewport edges.
///
/// Only the edge-side membership (`on_second`) decides a crossing; the
/// candidate itself is treated as an infinite line.
pub fn clip_to_viewport(candidate: &Line, viewport: &Viewport) -> ViewportHits {
    let mut edges_crossed = 0;
    let mut far_ratio: Option<f64> = None;

    for edge in viewport.edges() {
        let hit = line_intersection(candidate, &edge);
        if let Intersection::Crossing { a_ratio, .. } = hit {
            if hit.on_second() {
                edges_crossed += 1;
                far_ratio = Some(far_ratio.map_or(a_ratio, |r| r.max(a_ratio)));
            }
        }
    }

    ViewportHits { edges_crossed, far_ratio }
}

// ============================================================================
// TESTS
// ============================================================================
