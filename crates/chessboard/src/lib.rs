#![forbid(unsafe_code)]

//! `chessboard` renders printable chessboard calibration targets to SVG.
//!
//! The board is sized to a physical page: the page width is split into a fixed number of square
//! cells, as many whole rows as fit are stacked vertically, and cells alternate between a
//! transparent and a solid fill by `(column + row) % 2`.
//!
//! ```no_run
//! use chessboard::{ChessboardConfig, render_to_file};
//!
//! let layout = render_to_file(&ChessboardConfig::a3(), "chessboard.svg")?;
//! assert_eq!(layout.columns, 14);
//! # Ok::<(), chessboard::Error>(())
//! ```
//!
//! # Features
//!
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub mod calibration;
pub mod config;
pub mod layout;
pub mod model;
pub mod output;
pub mod svg;

#[cfg(feature = "raster")]
pub mod raster;

pub use calibration::CalibrationTarget;
pub use config::{ChessboardConfig, PageSize, SquareSizing};
pub use layout::layout_chessboard;
pub use model::{Bounds, Cell, ChessboardLayout, Fill, LayoutPoint, RectPrimitive};
pub use output::{OutputFormat, SaveOptions, save_document};
pub use svg::{LengthUnit, SvgRenderOptions, render_chessboard_svg};

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid chessboard config: {message}")]
    InvalidConfig { message: String },
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported output format: {extension}")]
    UnsupportedFormat { extension: String },
    #[error(transparent)]
    Raster(#[from] RasterError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the PNG/JPG/PDF conversion behind the `raster` feature.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("invalid raster scale {0}; expected a positive number")]
    InvalidScale(f32),
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid background color for JPG rendering")]
    JpegBackground,
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to encode JPG")]
    JpegEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

/// Lays out the board described by `config`, serializes it and writes it to `path`.
///
/// The output format follows the extension of `path` (see [`OutputFormat::from_path`]).
pub fn render_to_file(
    config: &ChessboardConfig,
    path: impl AsRef<Path>,
) -> Result<ChessboardLayout> {
    let path = path.as_ref();
    let layout = layout_chessboard(config)?;
    let svg = render_chessboard_svg(&layout, &SvgRenderOptions::default());
    let format = save_document(path, &svg, &SaveOptions::default())?;
    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        columns = layout.columns,
        rows = layout.rows,
        cells = layout.cell_count(),
        "wrote chessboard"
    );
    Ok(layout)
}
