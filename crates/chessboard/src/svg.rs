use crate::model::ChessboardLayout;
use std::fmt::Write as _;

mod util;

use util::{escape_xml, escape_xml_into, fmt, fmt_into};

/// Unit suffix written on the root `width`/`height` attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthUnit {
    /// Plain numbers; viewers read them as user units, which map 1:1 to the millimeter viewBox.
    #[default]
    Unitless,
    /// `297mm` style sizes, so printing at 100% reproduces the physical page.
    Millimeters,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Unitless => "",
            LengthUnit::Millimeters => "mm",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Optional root `id` attribute.
    pub document_id: Option<String>,
    pub units: LengthUnit,
}

/// Serializes `layout` into a standalone SVG document.
///
/// The viewBox always spans the whole page in millimeters, so cells keep their physical
/// position even when the grid does not reach the right or bottom edge.
pub fn render_chessboard_svg(layout: &ChessboardLayout, options: &SvgRenderOptions) -> String {
    let w = fmt(layout.page_width_mm);
    let h = fmt(layout.page_height_mm);
    let unit = options.units.suffix();

    // ~80 bytes per <rect>.
    let mut out = String::with_capacity(256 + layout.rects.len() * 80);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    if let Some(id) = options.document_id.as_deref() {
        let _ = write!(&mut out, r#" id="{}""#, escape_xml(id));
    }
    let _ = writeln!(
        &mut out,
        r#" width="{w}{unit}" height="{h}{unit}" viewBox="0 0 {w} {h}">"#
    );
    out.push_str("<defs/>\n");

    for rect in &layout.rects {
        out.push_str(r#"<rect x=""#);
        fmt_into(&mut out, rect.x);
        out.push_str(r#"" y=""#);
        fmt_into(&mut out, rect.y);
        out.push_str(r#"" width=""#);
        fmt_into(&mut out, rect.width);
        out.push_str(r#"" height=""#);
        fmt_into(&mut out, rect.height);
        out.push_str(r#"" fill=""#);
        escape_xml_into(&mut out, rect.fill.as_str());
        out.push_str("\"/>\n");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChessboardConfig;
    use crate::layout::layout_chessboard;
    use crate::model::Fill;

    #[test]
    fn root_carries_page_size_and_viewbox() {
        let layout = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        let svg = render_chessboard_svg(&layout, &SvgRenderOptions::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="297" height="420" viewBox="0 0 297 420""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn millimeter_units_and_id() {
        let layout = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        let options = SvgRenderOptions {
            document_id: Some("board<1>".to_string()),
            units: LengthUnit::Millimeters,
        };
        let svg = render_chessboard_svg(&layout, &options);
        assert!(svg.contains(r#"id="board&lt;1&gt;""#));
        assert!(svg.contains(r#"width="297mm" height="420mm" viewBox="0 0 297 420""#));
    }

    #[test]
    fn first_rects_follow_column_major_order() {
        let cfg = ChessboardConfig::a3().with_page_mm(294.0, 420.0);
        let layout = layout_chessboard(&cfg).expect("layout");
        let svg = render_chessboard_svg(&layout, &SvgRenderOptions::default());
        let rects: Vec<&str> = svg.lines().filter(|l| l.starts_with("<rect")).collect();
        assert_eq!(rects.len(), 280);
        assert_eq!(
            rects[0],
            r#"<rect x="0" y="0" width="21" height="21" fill="none"/>"#
        );
        assert_eq!(
            rects[1],
            r#"<rect x="0" y="21" width="21" height="21" fill="black"/>"#
        );
        assert_eq!(
            rects[20],
            r#"<rect x="21" y="0" width="21" height="21" fill="black"/>"#
        );
    }

    #[test]
    fn fill_text_is_escaped() {
        let cfg = ChessboardConfig::a3().with_off_fill(Fill::Solid("a\"b".to_string()));
        let layout = layout_chessboard(&cfg).expect("layout");
        let svg = render_chessboard_svg(&layout, &SvgRenderOptions::default());
        assert!(svg.contains(r#"fill="a&quot;b""#));
    }
}
