use super::*;
use crate::foundation::math::approx_eq;

const MIN: f64 = 0.75;

fn squares(n: usize) -> Vec<InputTile> {
    (0..n).map(|i| InputTile::new(format!("t{i}"), 1.0)).collect()
}

#[test]
fn narrow_row_shrinks_to_fit_width() {
    let row = pack_row(&squares(3), 300.0, 100.0, MIN).unwrap();
    let expected = 284.0 / 3.0;
    assert_eq!(row.fit.crop_coefficient, 1.0);
    assert!(approx_eq(row.fit.height, expected, 1e-9));
    for t in &row.tiles {
        assert!(approx_eq(t.width, expected, 1e-9));
        assert!(approx_eq(t.height, expected, 1e-9));
        assert_eq!(t.crop_ratio, 1.0);
    }
    // Row fills the full width, so it is centered vertically only.
    assert!(approx_eq(row.tiles[0].x, 0.0, 1e-9));
    assert!(approx_eq(row.tiles[1].x, expected + 8.0, 1e-9));
    assert!(approx_eq(row.tiles[0].y, (100.0 - expected) / 2.0, 1e-9));
    assert!(approx_eq(row.viewport_use, expected / 100.0, 1e-9));
}

#[test]
fn partial_crop_reaches_full_height() {
    // Two 16:9 croppable tiles in a 400x200 row: view ratio 1.96 sits between
    // the floor sum 1.5 and the natural sum 3.56.
    let tiles = vec![
        InputTile::new("a", 16.0 / 9.0).croppable(true),
        InputTile::new("b", 16.0 / 9.0).croppable(true),
    ];
    let row = pack_row(&tiles, 400.0, 200.0, MIN).unwrap();
    let view_ratio = 392.0 / 200.0;
    let sum_max = 32.0 / 9.0;
    let expected_k = (sum_max - view_ratio) / (sum_max - 1.5);
    assert!(approx_eq(row.fit.crop_coefficient, expected_k, 1e-12));
    assert_eq!(row.fit.height, 200.0);
    let total: f64 = row.tiles.iter().map(|t| t.width).sum::<f64>() + 8.0;
    assert!(approx_eq(total, 400.0, 1e-9));
    assert!(approx_eq(row.viewport_use, 1.0, 1e-9));
}

#[test]
fn wide_row_is_uncropped_and_centered() {
    let row = pack_row(&squares(2), 1000.0, 100.0, MIN).unwrap();
    assert_eq!(row.fit.crop_coefficient, 0.0);
    assert_eq!(row.fit.height, 100.0);
    let consumed = 208.0;
    let shift = (1000.0 - 1.0 - consumed) / 2.0;
    assert!(approx_eq(row.tiles[0].x, shift, 1e-9));
    assert!(approx_eq(row.tiles[1].x, shift + 108.0, 1e-9));
    assert_eq!(row.tiles[0].y, 0.0);
    assert!(approx_eq(row.viewport_use, consumed * 100.0 / (1000.0 * 100.0), 1e-12));
}

#[test]
fn single_tile_reserves_no_gap() {
    let tiles = vec![InputTile::new("solo", 2.0)];
    let row = pack_row(&tiles, 200.0, 200.0, MIN).unwrap();
    assert_eq!(row.fit.height, 100.0);
    assert_eq!(row.tiles[0].width, 200.0);
    assert_eq!(row.tiles[0].y, 50.0);
}

#[test]
fn no_video_tiles_are_under_weighted() {
    let tiles = vec![
        InputTile::new("v", 1.0),
        InputTile::new("a", 1.0).with_video(false),
    ];
    let row = pack_row(&tiles, 1000.0, 100.0, MIN).unwrap();
    let expected = (100.0 * 100.0 + 100.0 * 100.0 * 0.3) / (1000.0 * 100.0);
    assert!(approx_eq(row.video_weighted_use, expected, 1e-12));
    assert!(row.video_weighted_use < row.viewport_use);
}

#[test]
fn gaps_wider_than_row_are_infeasible() {
    assert!(pack_row(&squares(3), 16.0, 100.0, MIN).is_none());
    assert!(pack_row(&squares(1), 100.0, 0.0, MIN).is_none());
    assert!(pack_row(&[], 100.0, 100.0, MIN).is_none());
}
