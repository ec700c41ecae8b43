use super::*;
use crate::foundation::math::approx_eq;

const MIN: f64 = 0.75;

fn squares(n: usize) -> Vec<InputTile> {
    (0..n).map(|i| InputTile::new(format!("t{i}"), 1.0)).collect()
}

#[test]
fn two_by_two_grid_fills_square_viewport() {
    let layout = compose_rows(&squares(4), 400.0, 400.0, 2, MIN).unwrap();
    assert_eq!(layout.rows, 2);
    assert!(approx_eq(layout.row_height, 196.0, 1e-9));
    assert!(approx_eq(layout.total_height, 400.0, 1e-9));
    let ys: Vec<f64> = layout.tiles.iter().map(|t| t.y).collect();
    assert!(approx_eq(ys[0], 0.0, 1e-9));
    assert!(approx_eq(ys[1], 0.0, 1e-9));
    assert!(approx_eq(ys[2], 204.0, 1e-9));
    assert!(approx_eq(ys[3], 204.0, 1e-9));
    assert!(approx_eq(layout.viewport_use, 2.0 * 196.0 / 400.0, 1e-9));
}

#[test]
fn single_row_request_matches_packer() {
    let tiles = squares(3);
    let composed = compose_rows(&tiles, 300.0, 100.0, 1, MIN).unwrap();
    let direct = single_row_layout(&tiles, 300.0, 100.0, MIN).unwrap();
    assert_eq!(composed, direct);
    assert_eq!(composed.rows, 1);
}

#[test]
fn row_count_is_clamped_to_tile_count() {
    let layout = compose_rows(&squares(2), 400.0, 400.0, 5, MIN).unwrap();
    assert_eq!(layout.rows, 2);
    assert_eq!(layout.tiles.len(), 2);
}

#[test]
fn rows_share_height_and_are_vertically_centered() {
    let tiles = vec![
        InputTile::new("a", 16.0 / 9.0).croppable(true),
        InputTile::new("b", 16.0 / 9.0).croppable(true),
        InputTile::new("c", 4.0),
        InputTile::new("d", 16.0 / 9.0),
        InputTile::new("e", 1.0).croppable(true).focused(true),
    ];
    let (w, h) = (1280.0, 720.0);
    for rows in 2..=5 {
        let layout = compose_rows(&tiles, w, h, rows, MIN).unwrap();
        assert_eq!(layout.tiles.len(), tiles.len());
        for t in &layout.tiles {
            assert!(approx_eq(t.height, layout.row_height, 1e-6));
        }
        let expected_total = layout.row_height * rows as f64 + 8.0 * (rows - 1) as f64;
        assert!(approx_eq(layout.total_height, expected_total, 1e-9));
        let top = layout.tiles.iter().map(|t| t.y).fold(f64::INFINITY, f64::min);
        let bottom = layout
            .tiles
            .iter()
            .map(|t| t.y + t.height)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(approx_eq(top, h - bottom, 1e-6));
        assert!(layout.viewport_use > 0.0 && layout.viewport_use <= 1.0 + 1e-9);
    }
}

#[test]
fn output_keeps_input_order() {
    let tiles = squares(7);
    let layout = compose_rows(&tiles, 800.0, 600.0, 3, MIN).unwrap();
    let ids: Vec<&str> = layout.tiles.iter().map(|t| t.id.as_str()).collect();
    let expected: Vec<String> = (0..7).map(|i| format!("t{i}")).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn gaps_taller_than_viewport_are_infeasible() {
    assert!(compose_rows(&squares(3), 400.0, 10.0, 3, MIN).is_none());
}
