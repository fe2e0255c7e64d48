//! Core geometry types for weft.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` gives a plain value type:
//! printable with `{:?}`, copied implicitly, comparable with `==`.
//! Points and lines are small enough to pass around by value.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The drawable rectangle, in a frame centered on the canvas midpoint.
///
/// Corner naming follows the canvas convention where y grows downward:
/// the `bottom_*` corners carry `+half_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Mirror across the x axis (canvas y-down convention).
    #[inline]
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn lerp(&self, t: f64) -> Point {
        Point::new(
            self.x1 + t * (self.x2 - self.x1),
            self.y1 + t * (self.y2 - self.y1),
        )
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Viewport {
    /// Corners of a `width` x `height` canvas seen through a uniform `scale`.
    pub fn from_canvas(width: f64, height: f64, scale: f64) -> Self {
        let half_width = width / (2.0 * scale);
        let half_height = height / (2.0 * scale);

        Self {
            top_left: Point::new(-half_width, -half_height),
            top_right: Point::new(half_width, -half_height),
            bottom_left: Point::new(-half_width, half_height),
            bottom_right: Point::new(half_width, half_height),
        }
    }

    /// The four boundary edges in clipping order: bottom, top, left, right.
    ///
    /// Edges run cyclically (BL→BR, TR→TL, TL→BL, BR→TR), so every corner
    /// is the start of one edge and the end of another. With the half-open
    /// `[0, 1)` membership test a line through a corner registers on
    /// exactly one edge.
    pub fn edges(&self) -> [Line; 4] {
        [
            Line::from_points(self.bottom_left, self.bottom_right),
            Line::from_points(self.top_right, self.top_left),
            Line::from_points(self.top_left, self.bottom_left),
            Line::from_points(self.bottom_right, self.top_right),
        ]
    }
}

/// Corners of the viewport for a canvas of the given size and scale.
pub fn viewport_corners(width: f64, height: f64, scale: f64) -> Viewport {
    Viewport::from_canvas(width, height, scale)
}

// ============================================================================
// TESTS
// ============================================================================
