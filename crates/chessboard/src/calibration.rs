//! Describes a rendered board the way a corner-based camera calibration consumes it.
//!
//! Detectors look for the inner corners where four squares meet, so a board of
//! `columns x rows` squares has a `(columns - 1) x (rows - 1)` corner pattern.

use crate::model::{ChessboardLayout, LayoutPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTarget {
    /// Inner corners along the page width.
    pub pattern_columns: u32,
    /// Inner corners along the page height.
    pub pattern_rows: u32,
    pub square_size_mm: f64,
    /// Page position of the top-left inner corner.
    pub first_corner_mm: LayoutPoint,
}

impl CalibrationTarget {
    pub fn corner_count(&self) -> usize {
        (self.pattern_columns as usize) * (self.pattern_rows as usize)
    }

    /// Planar board coordinates `(x, y, 0)` of every inner corner in millimeters, relative to
    /// the first corner. Row-major: all corners of the top row first.
    pub fn object_points(&self) -> Vec<[f64; 3]> {
        let mut points = Vec::with_capacity(self.corner_count());
        for row in 0..self.pattern_rows {
            for column in 0..self.pattern_columns {
                points.push([
                    f64::from(column) * self.square_size_mm,
                    f64::from(row) * self.square_size_mm,
                    0.0,
                ]);
            }
        }
        points
    }
}

impl ChessboardLayout {
    pub fn calibration_target(&self) -> CalibrationTarget {
        CalibrationTarget {
            pattern_columns: self.columns.saturating_sub(1),
            pattern_rows: self.rows.saturating_sub(1),
            square_size_mm: self.square_size_mm,
            first_corner_mm: LayoutPoint {
                x: self.square_size_mm,
                y: self.square_size_mm,
            },
        }
    }
}
