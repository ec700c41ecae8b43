use crate::{config::FOCUS_CROP_REDUCTION, tile::model::InputTile};

/// Narrowest aspect ratio `tile` may ever be displayed at.
///
/// Tiles that cannot be cropped, or are already narrower than
/// `min_aspect_ratio`, keep their natural ratio. Focused tiles keep
/// `FOCUS_CROP_REDUCTION` of the crop range back.
pub(crate) fn crop_floor(tile: &InputTile, min_aspect_ratio: f64) -> f64 {
    if !tile.can_be_cropped || tile.aspect_ratio < min_aspect_ratio {
        return tile.aspect_ratio;
    }
    if tile.is_focused {
        min_aspect_ratio + (tile.aspect_ratio - min_aspect_ratio) * (1.0 - FOCUS_CROP_REDUCTION)
    } else {
        min_aspect_ratio
    }
}

/// Aspect ratio after applying `crop_coefficient` (0 = natural, 1 = floor).
pub(crate) fn cropped_ratio(tile: &InputTile, floor: f64, crop_coefficient: f64) -> f64 {
    if tile.can_be_cropped {
        tile.aspect_ratio - (tile.aspect_ratio - floor) * crop_coefficient
    } else {
        tile.aspect_ratio
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/crop.rs"]
mod tests;
