use serde::{Deserialize, Serialize};

/// Fill paint of a rectangle primitive.
///
/// Serialized as the SVG `fill` attribute value: `"none"` or the color text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Fill {
    /// No paint; the page shows through.
    #[default]
    None,
    Solid(String),
}

impl Fill {
    pub fn as_str(&self) -> &str {
        match self {
            Fill::None => "none",
            Fill::Solid(color) => color.as_str(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Fill::None)
    }
}

impl From<String> for Fill {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            Fill::None
        } else if trimmed.len() == value.len() {
            Fill::Solid(value)
        } else {
            Fill::Solid(trimmed.to_string())
        }
    }
}

impl From<&str> for Fill {
    fn from(value: &str) -> Self {
        Fill::from(value.to_string())
    }
}

impl From<Fill> for String {
    fn from(value: Fill) -> Self {
        match value {
            Fill::None => "none".to_string(),
            Fill::Solid(color) => color,
        }
    }
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Strict interior overlap; rectangles sharing an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Grid position: `column` counts left to right, `row` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    /// `true` for cells painted with the on fill.
    pub fn is_odd(&self) -> bool {
        (u64::from(self.column) + u64::from(self.row)) % 2 == 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
}

impl RectPrimitive {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.x,
            min_y: self.y,
            max_x: self.x + self.width,
            max_y: self.y + self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChessboardLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub square_size_mm: f64,
    pub columns: u32,
    pub rows: u32,
    /// Column-major: all rows of column 0 first, then column 1, and so on.
    pub rects: Vec<RectPrimitive>,
}

impl ChessboardLayout {
    pub fn cell_count(&self) -> usize {
        self.rects.len()
    }

    pub fn cell_at(&self, column: u32, row: u32) -> Option<&RectPrimitive> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let idx = (column as usize) * (self.rows as usize) + row as usize;
        self.rects.get(idx)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, &RectPrimitive)> + '_ {
        let rows = self.rows.max(1);
        self.rects.iter().enumerate().map(move |(idx, rect)| {
            let idx = idx as u32;
            (
                Cell {
                    column: idx / rows,
                    row: idx % rows,
                },
                rect,
            )
        })
    }

    /// Area covered by the cells; the page may extend past it on the right and bottom.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: f64::from(self.columns) * self.square_size_mm,
            max_y: f64::from(self.rows) * self.square_size_mm,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
