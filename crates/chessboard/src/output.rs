use crate::{Error, Result};
use std::io::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

impl OutputFormat {
    /// Format implied by the file extension; paths without one are written as SVG.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension() {
            None => Ok(Self::Svg),
            Some(ext) => ext.to_string_lossy().parse(),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }

    pub fn is_raster_backed(self) -> bool {
        !matches!(self, Self::Svg)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Overrides the format implied by the path extension.
    pub format: Option<OutputFormat>,
    #[cfg(feature = "raster")]
    pub raster: crate::raster::RasterOptions,
}

fn encode(svg: &str, format: OutputFormat, options: &SaveOptions) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => Ok(svg.as_bytes().to_vec()),
        #[cfg(feature = "raster")]
        OutputFormat::Png => Ok(crate::raster::svg_to_png(svg, &options.raster)?),
        #[cfg(feature = "raster")]
        OutputFormat::Jpeg => Ok(crate::raster::svg_to_jpeg(svg, &options.raster)?),
        #[cfg(feature = "raster")]
        OutputFormat::Pdf => Ok(crate::raster::svg_to_pdf(svg)?),
        #[cfg(not(feature = "raster"))]
        other => {
            let _ = options;
            Err(Error::UnsupportedFormat {
                extension: format!("{} (enable the `raster` feature)", other.extension()),
            })
        }
    }
}

/// Writes `svg` to `path`, converting it first when the path asks for a raster or PDF format.
///
/// Existing files are overwritten. Returns the format that was written.
pub fn save_document(path: &Path, svg: &str, options: &SaveOptions) -> Result<OutputFormat> {
    let format = match options.format {
        Some(f) => f,
        None => OutputFormat::from_path(path)?,
    };
    let bytes = encode(svg, format, options)?;

    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved document");
    Ok(format)
}
