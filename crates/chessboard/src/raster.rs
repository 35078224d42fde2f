//! PNG/JPG/PDF conversion of rendered chessboard SVG.

pub use crate::RasterError;

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Output pixels per SVG user unit. With unitless chessboard SVG one user unit is 1mm, so
    /// `300.0 / 25.4` yields a 300 DPI print.
    pub scale: f32,
    /// CSS-like color painted below the board; `None` keeps off cells transparent.
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

impl RasterOptions {
    pub fn at_dpi(dpi: f32) -> Self {
        Self {
            scale: dpi / 25.4,
            ..Default::default()
        }
    }
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_jpeg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let bg = options.background.as_deref().unwrap_or("white");
    let color = parse_color(bg).ok_or(RasterError::JpegBackground)?;
    if color.alpha() != 1.0 {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }

    let pixmap = svg_to_pixmap(svg, options.scale, Some(bg))?;
    let (w, h) = (pixmap.width(), pixmap.height());

    // Opaque background, so alpha is always 255 and can be dropped.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut out = Vec::new();
    let mut enc =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, options.jpeg_quality);
    enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let opt = svg2pdf::usvg::Options::default();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| RasterError::PdfConvert)
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RasterError::InvalidScale(scale));
    }

    // Chessboard SVG carries no text, so the font database stays empty.
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // `tree.size()` is the root width/height in px with the viewBox already mapped onto it.
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;
    tracing::debug!(width_px, height_px, "rasterizing chessboard");

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;
    if let Some(color) = background.and_then(parse_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn parse_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" | "none" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let digits: Vec<u8> = s
        .strip_prefix('#')?
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|&d| (d << 4) | d).collect(),
        6 | 8 => digits.chunks_exact(2).map(|p| (p[0] << 4) | p[1]).collect(),
        _ => return None,
    };
    let alpha = channels.get(3).copied().unwrap_or(255);
    Some(tiny_skia::Color::from_rgba8(
        channels[0],
        channels[1],
        channels[2],
        alpha,
    ))
}
