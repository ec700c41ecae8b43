use super::*;
use crate::foundation::math::approx_eq;

fn hd(id: &str) -> InputTile {
    InputTile::new(id, 16.0 / 9.0).croppable(true)
}

#[test]
fn rejects_empty_tile_lists() {
    let err = LayoutEngine::default()
        .compute_layout(&[], 1280.0, 720.0)
        .unwrap_err();
    assert!(matches!(err, TilefitError::Validation(_)));
}

#[test]
fn rejects_bad_aspect_ratios_and_viewports() {
    let engine = LayoutEngine::default();
    let bad = [hd("a"), InputTile::new("b", 0.0)];
    assert!(matches!(
        engine.compute_layout(&bad, 1280.0, 720.0),
        Err(TilefitError::Validation(_))
    ));
    assert!(matches!(
        engine.compute_layout(&[hd("a")], 0.0, 720.0),
        Err(TilefitError::Validation(_))
    ));
    assert!(matches!(
        engine.compute_layout(&[hd("a")], 1280.0, f64::NAN),
        Err(TilefitError::Validation(_))
    ));
}

#[test]
fn tiny_viewports_are_infeasible() {
    let tiles = [hd("a"), hd("b"), hd("c")];
    let err = LayoutEngine::default()
        .compute_layout(&tiles, 5.0, 10.0)
        .unwrap_err();
    assert!(matches!(err, TilefitError::Infeasible(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = LayoutConfig {
        min_aspect_ratio: -1.0,
        ..LayoutConfig::default()
    };
    assert!(LayoutEngine::new(cfg).is_err());

    let mut engine = LayoutEngine::default();
    assert!(engine.set_min_aspect_ratio(f64::NAN).is_err());
    assert_eq!(engine.config().min_aspect_ratio, 0.75);
}

#[test]
fn min_aspect_ratio_changes_crop_floor() {
    let mut engine = LayoutEngine::default();
    assert_eq!(engine.crop_floor(&hd("a")).unwrap(), 0.75);
    engine.set_min_aspect_ratio(1.0).unwrap();
    assert_eq!(engine.crop_floor(&hd("a")).unwrap(), 1.0);
}

#[test]
fn partition_checks_row_bounds() {
    let engine = LayoutEngine::default();
    let tiles = [hd("a"), hd("b")];
    assert!(engine.partition(&tiles, 0, 4.0).is_err());
    assert!(engine.partition(&tiles, 3, 4.0).is_err());
    assert!(engine.partition(&tiles, 1, -4.0).is_err());
    assert_eq!(engine.partition(&tiles, 2, 4.0).unwrap(), vec![0..1, 1..2]);
}

#[test]
fn compose_clamps_rows_to_tile_count() {
    let engine = LayoutEngine::default();
    let tiles = [hd("a"), hd("b")];
    assert_eq!(engine.compose(&tiles, 640.0, 720.0, 9).unwrap().rows, 2);
    assert!(engine.compose(&tiles, 640.0, 720.0, 0).is_err());
}

#[test]
fn single_tile_fills_one_centered_row() {
    let layout = LayoutEngine::default()
        .compute_layout(&[InputTile::new("a", 4.0 / 3.0)], 1280.0, 720.0)
        .unwrap();
    assert_eq!(layout.rows, 1);
    let t = &layout.tiles[0];
    assert_eq!(t.height, 720.0);
    assert!(approx_eq(t.width, 960.0, 1e-9));
    assert!(approx_eq(t.x, (1279.0 - 960.0) / 2.0, 1e-9));
    assert_eq!(t.y, 0.0);
}

#[test]
fn free_function_matches_engine() {
    let tiles = [hd("a"), hd("b"), hd("c")];
    let cfg = LayoutConfig::default();
    let a = compute_layout(&tiles, 1280.0, 720.0, &cfg).unwrap();
    let b = LayoutEngine::new(cfg)
        .unwrap()
        .compute_layout(&tiles, 1280.0, 720.0)
        .unwrap();
    assert_eq!(a, b);
}
