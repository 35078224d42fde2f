use crate::config::ChessboardConfig;
use crate::model::{ChessboardLayout, Fill, RectPrimitive};
use crate::Result;

fn normalized(fill: &Fill) -> Fill {
    match fill {
        Fill::None => Fill::None,
        Fill::Solid(color) => Fill::from(color.as_str()),
    }
}

pub fn layout_chessboard(config: &ChessboardConfig) -> Result<ChessboardLayout> {
    config.validate()?;

    let square_size = config.square_size_mm();
    let (columns, rows) = config.grid_size();
    tracing::debug!(
        square_size_mm = square_size,
        columns,
        rows,
        "computed chessboard geometry"
    );

    let on_fill = Fill::Solid(config.on_fill.trim().to_string());
    let off_fill = normalized(&config.off_fill);
    let mut rects = Vec::with_capacity((columns as usize) * (rows as usize));
    for i in 0..columns {
        for j in 0..rows {
            let fill = if (u64::from(i) + u64::from(j)) % 2 == 0 {
                off_fill.clone()
            } else {
                on_fill.clone()
            };
            rects.push(RectPrimitive {
                x: f64::from(i) * square_size,
                y: f64::from(j) * square_size,
                width: square_size,
                height: square_size,
                fill,
            });
        }
    }

    Ok(ChessboardLayout {
        page_width_mm: config.page_width_mm,
        page_height_mm: config.page_height_mm,
        square_size_mm: square_size,
        columns,
        rows,
        rects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SquareSizing;
    use crate::Error;

    fn black() -> Fill {
        Fill::Solid("black".to_string())
    }

    #[test]
    fn a3_exact_matches_page_quotients() {
        let layout = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        assert_eq!(layout.square_size_mm, 297.0 / 14.0);
        assert_eq!(layout.columns, 14);
        // 420 / 21.214... = 19.79..., so the bottom strip stays blank.
        assert_eq!(layout.rows, 19);
        assert_eq!(layout.cell_count(), 14 * 19);
    }

    #[test]
    fn a3_whole_millimeter_squares() {
        let cfg = ChessboardConfig::a3().with_square_sizing(SquareSizing::WholeMillimeters);
        let layout = layout_chessboard(&cfg).expect("layout");
        assert_eq!(layout.square_size_mm, 21.0);
        assert_eq!(layout.columns, 14);
        assert_eq!(layout.rows, 20);
        assert_eq!(layout.cell_count(), 280);

        assert_eq!(layout.cell_at(0, 0).map(|r| &r.fill), Some(&Fill::None));
        assert_eq!(layout.cell_at(1, 0).map(|r| &r.fill), Some(&black()));
        assert_eq!(layout.cell_at(13, 19).map(|r| &r.fill), Some(&Fill::None));
        assert!(layout.cell_at(14, 0).is_none());
        assert!(layout.cell_at(0, 20).is_none());
    }

    #[test]
    fn page_of_exact_multiples_tiles_fully() {
        let cfg = ChessboardConfig::a3().with_page_mm(294.0, 420.0);
        let layout = layout_chessboard(&cfg).expect("layout");
        assert_eq!(layout.square_size_mm, 21.0);
        assert_eq!((layout.columns, layout.rows), (14, 20));
        let last = layout.cell_at(13, 19).expect("last cell");
        assert_eq!((last.x, last.y), (273.0, 399.0));
        assert_eq!(last.fill, Fill::None);
    }

    #[test]
    fn parity_holds_for_every_cell() {
        let layout = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        for (cell, rect) in layout.cells() {
            let expected = if (cell.column + cell.row) % 2 == 0 {
                Fill::None
            } else {
                black()
            };
            assert_eq!(rect.fill, expected, "cell {cell:?}");
            assert_eq!(cell.is_odd(), !rect.fill.is_none());
            assert_eq!(rect.x, f64::from(cell.column) * layout.square_size_mm);
            assert_eq!(rect.y, f64::from(cell.row) * layout.square_size_mm);
            assert_eq!(rect.width, layout.square_size_mm);
            assert_eq!(rect.height, layout.square_size_mm);
        }
    }

    #[test]
    fn cells_tile_bounds_without_overlap() {
        let cfg = ChessboardConfig::a3().with_square_sizing(SquareSizing::WholeMillimeters);
        let layout = layout_chessboard(&cfg).expect("layout");
        let boxes: Vec<_> = layout.rects.iter().map(|r| r.bounds()).collect();
        for (a_idx, a) in boxes.iter().enumerate() {
            for b in &boxes[a_idx + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }

        let area: f64 = boxes.iter().map(|b| b.width() * b.height()).sum();
        let bounds = layout.bounds();
        assert_eq!(bounds.max_x, 294.0);
        assert_eq!(bounds.max_y, 420.0);
        assert!((area - bounds.width() * bounds.height()).abs() < 1e-6);
    }

    #[test]
    fn page_shorter_than_a_square_has_no_rows() {
        let cfg = ChessboardConfig::a3().with_page_mm(297.0, 10.0);
        let layout = layout_chessboard(&cfg).expect("layout");
        assert_eq!(layout.columns, 14);
        assert_eq!(layout.rows, 0);
        assert!(layout.rects.is_empty());
        assert_eq!(layout.cells().count(), 0);
    }

    #[test]
    fn custom_fills_are_applied() {
        let cfg = ChessboardConfig::a3()
            .with_on_fill(" #222 ")
            .with_off_fill(Fill::Solid("white".to_string()));
        let layout = layout_chessboard(&cfg).expect("layout");
        assert_eq!(
            layout.cell_at(0, 0).map(|r| r.fill.as_str()),
            Some("white")
        );
        assert_eq!(layout.cell_at(0, 1).map(|r| r.fill.as_str()), Some("#222"));
    }

    #[test]
    fn solid_off_fill_is_trimmed_like_on_fill() {
        let cfg = ChessboardConfig::a3().with_off_fill(Fill::Solid(" white ".to_string()));
        let layout = layout_chessboard(&cfg).expect("layout");
        assert_eq!(
            layout.cell_at(0, 0).map(|r| r.fill.as_str()),
            Some("white")
        );
    }

    #[test]
    fn oversized_grid_is_rejected_instead_of_allocated() {
        let err = layout_chessboard(&ChessboardConfig::a3().with_squares_per_width(u32::MAX))
            .expect_err("too many cells");
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn invalid_config_is_rejected_before_layout() {
        let err = layout_chessboard(&ChessboardConfig::a3().with_squares_per_width(0))
            .expect_err("zero squares");
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn layout_is_deterministic() {
        let a = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        let b = layout_chessboard(&ChessboardConfig::a3()).expect("layout");
        assert_eq!(a, b);
        assert_eq!(
            a.to_json(false).expect("json"),
            b.to_json(false).expect("json")
        );
    }
}
