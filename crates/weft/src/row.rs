//! Row descriptors and the two walk selectors (lane and scan direction).
//!
//! A pattern row is one line family: an angle, a base point, two offset
//! multipliers and a dash encoding. Source rows are flat numeric lists;
//! [`PatternRow::from_cells`] gives them names and validates them once.

use crate::geometry::Point;

/// Minimum number of perpendicular steps attempted before a miss may end a walk.
pub const DRAW_MINIMUM: i64 = 50;

/// Hard cap on perpendicular steps per lane and direction.
pub const DRAW_MAXIMUM: i64 = 10_000;

/// Why a cell list could not become a [`PatternRow`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("row has {0} cell(s), at least 2 are required")]
    TooFewCells(usize),

    #[error("row cell {index} is not a finite number")]
    NonFinite { index: usize },
}

/// One line family of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    /// Line direction in degrees.
    pub angle: f64,
    /// Anchor of the line at index 0.
    pub base: Point,
    /// Shift along the line direction per step (cell 3).
    pub primary: f64,
    /// Shift along the perpendicular per step (cell 4).
    pub secondary: f64,
    /// Stroke/gap lengths, always non-negative.
    pub dashes: Vec<f64>,
}

impl PatternRow {
    /// Build a row from positional cells:
    /// `angle, base_x, base_y, primary, secondary, dash...`.
    ///
    /// Cells 2..=4 default to 0 when the row is shorter. Dash lengths are
    /// taken as absolute values, so `.pat`-style negative gaps work.
    pub fn from_cells(cells: &[f64]) -> Result<Self, RowError> {
        if cells.len() < 2 {
            return Err(RowError::TooFewCells(cells.len()));
        }
        if let Some(index) = cells.iter().position(|c| !c.is_finite()) {
            return Err(RowError::NonFinite { index });
        }

        let cell = |i: usize| cells.get(i).copied().unwrap_or(0.0);

        Ok(Self {
            angle: cell(0),
            base: Point::new(cell(1), cell(2)),
            primary: cell(3),
            secondary: cell(4),
            dashes: cells.iter().skip(5).map(|d| d.abs()).collect(),
        })
    }

    /// Dash pattern and starting phase for a stroke drawn on `lane`.
    ///
    /// The mirrored lane starts at `-last` and keeps only the first and
    /// last lengths, so both halves of a line share one dash rhythm.
    pub fn dash_for(&self, lane: Lane) -> (Vec<f64>, f64) {
        match (lane, self.dashes.first(), self.dashes.last()) {
            (Lane::Mirrored, Some(&first), Some(&last)) => (vec![first, last], -last),
            _ => (self.dashes.clone(), 0.0),
        }
    }
}

/// Which half of the line through the anchor a walk shoots.
///
/// ## Rust Lesson #14: Fieldless Enums
///
/// Two named variants instead of a bare `0`/`1`: the compiler rejects
/// any third value, and `match` must cover both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Along the row angle.
    Primary,
    /// Along the row angle + 180°, with the dash rhythm mirrored.
    Mirrored,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Primary, Lane::Mirrored];

    /// Multiple of 180° added to the row angle.
    #[inline]
    pub fn angle_factor(self) -> f64 {
        match self {
            Lane::Primary => 0.0,
            Lane::Mirrored => 1.0,
        }
    }

    pub fn as_index(self) -> u8 {
        match self {
            Lane::Primary => 0,
            Lane::Mirrored => 1,
        }
    }
}

/// Direction of the perpendicular index walk.
///
/// Forward covers indices `0, 1, 2, ...` and Backward `-1, -2, ...`, so
/// the two scans of a row meet without overlap or gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scan {
    Forward,
    Backward,
}

impl Scan {
    pub const ALL: [Scan; 2] = [Scan::Forward, Scan::Backward];

    /// First perpendicular index visited.
    #[inline]
    pub fn seed(self) -> i64 {
        match self {
            Scan::Forward => 0,
            Scan::Backward => -1,
        }
    }

    #[inline]
    pub fn step(self) -> i64 {
        match self {
            Scan::Forward => 1,
            Scan::Backward => -1,
        }
    }

    /// Continuation rule: keep going while the previous line was drawn or
    /// the minimum has not been reached, and never past the maximum.
    #[inline]
    pub fn should_continue(self, index: i64, drew_previous: bool) -> bool {
        match self {
            Scan::Forward => (drew_previous || index < DRAW_MINIMUM) && index < DRAW_MAXIMUM,
            Scan::Backward => (drew_previous || index > -DRAW_MINIMUM) && index > -DRAW_MAXIMUM,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_fields_from_cells() {
        let row = PatternRow::from_cells(&[45.0, 1.0, 2.0, 3.0, 4.0, 5.0, -3.0]).unwrap();
        assert_eq!(row.angle, 45.0);
        assert_eq!(row.base, Point::new(1.0, 2.0));
        assert_eq!(row.primary, 3.0);
        assert_eq!(row.secondary, 4.0);
        assert_eq!(row.dashes, vec![5.0, 3.0]);
    }

    #[test]
    fn fewer_than_two_cells_is_inert() {
        assert_eq!(PatternRow::from_cells(&[]), Err(RowError::TooFewCells(0)));
        assert_eq!(PatternRow::from_cells(&[90.0]), Err(RowError::TooFewCells(1)));
    }

    #[test]
    fn short_rows_default_missing_cells() {
        let row = PatternRow::from_cells(&[30.0, 7.0]).unwrap();
        assert_eq!(row.base, Point::new(7.0, 0.0));
        assert_eq!(row.primary, 0.0);
        assert_eq!(row.secondary, 0.0);
        assert!(row.dashes.is_empty());
    }

    #[test]
    fn non_finite_cells_are_rejected() {
        let err = PatternRow::from_cells(&[0.0, 0.0, f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err, RowError::NonFinite { index: 2 });
    }

    #[test]
    fn primary_lane_keeps_dashes() {
        let row = PatternRow::from_cells(&[0.0, 0.0, 0.0, 1.0, 1.0, 5.0, 2.0, 3.0]).unwrap();
        assert_eq!(row.dash_for(Lane::Primary), (vec![5.0, 2.0, 3.0], 0.0));
    }

    #[test]
    fn mirrored_lane_uses_first_and_last() {
        let row = PatternRow::from_cells(&[0.0, 0.0, 0.0, 1.0, 1.0, 5.0, 2.0, 3.0]).unwrap();
        assert_eq!(row.dash_for(Lane::Mirrored), (vec![5.0, 3.0], -3.0));

        let single = PatternRow::from_cells(&[0.0, 0.0, 0.0, 1.0, 1.0, 4.0]).unwrap();
        assert_eq!(single.dash_for(Lane::Mirrored), (vec![4.0, 4.0], -4.0));
    }

    #[test]
    fn solid_rows_have_no_phase() {
        let row = PatternRow::from_cells(&[0.0, 0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(row.dash_for(Lane::Mirrored), (Vec::new(), 0.0));
    }

    #[test]
    fn scan_seeds_are_adjacent() {
        assert_eq!(Scan::Forward.seed(), 0);
        assert_eq!(Scan::Backward.seed(), -1);
        assert_eq!(Scan::Forward.seed() - Scan::Backward.seed(), 1);
    }

    #[test]
    fn continuation_rule() {
        assert!(Scan::Forward.should_continue(10, false), "below minimum");
        assert!(!Scan::Forward.should_continue(DRAW_MINIMUM, false));
        assert!(Scan::Forward.should_continue(DRAW_MINIMUM, true));
        assert!(!Scan::Forward.should_continue(DRAW_MAXIMUM, true));

        assert!(Scan::Backward.should_continue(-10, false));
        assert!(!Scan::Backward.should_continue(-DRAW_MINIMUM, false));
        assert!(Scan::Backward.should_continue(-DRAW_MINIMUM, true));
        assert!(!Scan::Backward.should_continue(-DRAW_MAXIMUM, true));
    }
}
