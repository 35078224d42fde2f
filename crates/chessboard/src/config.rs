use crate::model::Fill;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Well-known paper sizes in portrait orientation, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A3,
    A4,
}

impl PageSize {
    pub fn portrait(self) -> (f64, f64) {
        match self {
            PageSize::A3 => (297.0, 420.0),
            PageSize::A4 => (210.0, 297.0),
        }
    }

    pub fn landscape(self) -> (f64, f64) {
        let (w, h) = self.portrait();
        (h, w)
    }
}

/// How the square edge is derived from `page_width_mm / squares_per_width`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareSizing {
    /// Use the quotient as is.
    #[default]
    Exact,
    /// Round the quotient down to whole millimeters, which keeps the printed edge length a
    /// round number at the cost of a margin on the right.
    WholeMillimeters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChessboardConfig {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    /// Number of squares across the page width; also fixes the square edge length.
    pub squares_per_width: u32,
    pub square_sizing: SquareSizing,
    /// Fill of cells where `(column + row)` is odd.
    pub on_fill: String,
    /// Fill of cells where `(column + row)` is even.
    pub off_fill: Fill,
}

impl Default for ChessboardConfig {
    fn default() -> Self {
        Self::a3()
    }
}

// Absorbs quotients like 13.999999999999998 that should floor to 14.
const FLOOR_EPSILON: f64 = 1e-9;

fn whole_squares(extent: f64, square_size: f64) -> u32 {
    let n = (extent / square_size + FLOOR_EPSILON).floor();
    if n.is_finite() && n > 0.0 {
        n.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

impl ChessboardConfig {
    pub const DEFAULT_SQUARES_PER_WIDTH: u32 = 14;
    pub const DEFAULT_ON_FILL: &'static str = "black";
    /// Upper bound on `columns * rows` accepted by [`ChessboardConfig::validate`].
    pub const MAX_CELLS: u64 = 1_000_000;

    pub fn for_page(page: PageSize) -> Self {
        let (width, height) = page.portrait();
        Self {
            page_width_mm: width,
            page_height_mm: height,
            squares_per_width: Self::DEFAULT_SQUARES_PER_WIDTH,
            square_sizing: SquareSizing::Exact,
            on_fill: Self::DEFAULT_ON_FILL.to_string(),
            off_fill: Fill::None,
        }
    }

    pub fn a3() -> Self {
        Self::for_page(PageSize::A3)
    }

    pub fn with_page_mm(mut self, width: f64, height: f64) -> Self {
        self.page_width_mm = width;
        self.page_height_mm = height;
        self
    }

    pub fn with_squares_per_width(mut self, squares: u32) -> Self {
        self.squares_per_width = squares;
        self
    }

    pub fn with_square_sizing(mut self, sizing: SquareSizing) -> Self {
        self.square_sizing = sizing;
        self
    }

    pub fn with_on_fill(mut self, fill: impl Into<String>) -> Self {
        self.on_fill = fill.into();
        self
    }

    pub fn with_off_fill(mut self, fill: Fill) -> Self {
        self.off_fill = fill;
        self
    }

    /// Edge length of one square cell in millimeters.
    ///
    /// Only meaningful for a config that passes [`ChessboardConfig::validate`].
    pub fn square_size_mm(&self) -> f64 {
        let exact = self.page_width_mm / f64::from(self.squares_per_width);
        match self.square_sizing {
            SquareSizing::Exact => exact,
            SquareSizing::WholeMillimeters => exact.floor(),
        }
    }

    /// Whole squares that fit the page as `(columns, rows)`.
    pub fn grid_size(&self) -> (u32, u32) {
        let square_size = self.square_size_mm();
        (
            whole_squares(self.page_width_mm, square_size),
            whole_squares(self.page_height_mm, square_size),
        )
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a positive number, got {v}"),
                });
            }
        }
        if self.squares_per_width == 0 {
            return Err(Error::InvalidConfig {
                message: "squares_per_width must be at least 1".to_string(),
            });
        }
        if self.on_fill.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "on_fill must name a color".to_string(),
            });
        }
        if matches!(&self.off_fill, Fill::Solid(c) if c.trim().is_empty()) {
            return Err(Error::InvalidConfig {
                message: "off_fill must be `none` or name a color".to_string(),
            });
        }
        if self.square_size_mm() <= 0.0 {
            // Only reachable with whole-millimeter sizing on pages narrower than the square count.
            return Err(Error::InvalidConfig {
                message: format!(
                    "{} squares do not fit a whole millimeter each across {}mm",
                    self.squares_per_width, self.page_width_mm
                ),
            });
        }
        let (columns, rows) = self.grid_size();
        let cells = u64::from(columns) * u64::from(rows);
        if cells > Self::MAX_CELLS {
            return Err(Error::InvalidConfig {
                message: format!(
                    "{columns}x{rows} squares exceed the limit of {} cells",
                    Self::MAX_CELLS
                ),
            });
        }
        Ok(())
    }
}
