use crate::{
    config::{GAP, NO_VIDEO_USE_K},
    layout::crop::{crop_floor, cropped_ratio},
    tile::model::{InputTile, OutputTile},
};

/// How one row fits its target rectangle before tiles are positioned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RowFit {
    /// Shared interpolation factor between natural ratio (0) and crop floor (1).
    pub(crate) crop_coefficient: f64,
    /// Achieved row height; never above the target height.
    pub(crate) height: f64,
}

/// A packed row: tiles laid left to right, centered in the target rectangle.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RowLayout {
    pub(crate) tiles: Vec<OutputTile>,
    pub(crate) fit: RowFit,
    pub(crate) viewport_use: f64,
    pub(crate) video_weighted_use: f64,
}

fn usable_width(count: usize, w: f64) -> f64 {
    w - GAP * count.saturating_sub(1) as f64
}

/// Crop coefficient and height for `tiles` in a `w` x `h` row.
///
/// `None` when gaps leave no usable width or the target height is not positive.
pub(crate) fn fit_row(tiles: &[InputTile], floors: &[f64], w: f64, h: f64) -> Option<RowFit> {
    let width = usable_width(tiles.len(), w);
    if tiles.is_empty() || width <= 0.0 || h <= 0.0 {
        return None;
    }
    let view_ratio = width / h;
    let sum_max_ratio: f64 = tiles.iter().map(|t| t.aspect_ratio).sum();
    let sum_min_ratio: f64 = floors.iter().sum();

    let fit = if view_ratio <= sum_min_ratio {
        RowFit {
            crop_coefficient: 1.0,
            height: width / sum_min_ratio,
        }
    } else if view_ratio < sum_max_ratio {
        RowFit {
            crop_coefficient: (sum_max_ratio - view_ratio) / (sum_max_ratio - sum_min_ratio),
            height: h,
        }
    } else {
        RowFit {
            crop_coefficient: 0.0,
            height: h,
        }
    };
    Some(fit)
}

/// Pack `tiles` into a single row of a `w` x `h` rectangle.
///
/// Tiles are vertically centered in the rectangle; the caller overrides `y`
/// when stacking rows.
pub(crate) fn pack_row(
    tiles: &[InputTile],
    w: f64,
    h: f64,
    min_aspect_ratio: f64,
) -> Option<RowLayout> {
    let floors: Vec<f64> = tiles
        .iter()
        .map(|t| crop_floor(t, min_aspect_ratio))
        .collect();
    let fit = fit_row(tiles, &floors, w, h)?;
    let height = fit.height;
    let y = (h - height) / 2.0;

    let mut out = Vec::with_capacity(tiles.len());
    let mut offset_x = 0.0;
    let mut weighted_area = 0.0;
    for (tile, &floor) in tiles.iter().zip(&floors) {
        let crop_ratio = cropped_ratio(tile, floor, fit.crop_coefficient);
        let width = crop_ratio * height;
        out.push(OutputTile {
            id: tile.id.clone(),
            x: offset_x,
            y,
            width,
            height,
            crop_ratio,
        });
        let weight = if tile.has_video { 1.0 } else { NO_VIDEO_USE_K };
        weighted_area += width * height * weight;
        offset_x += width + GAP;
    }
    let consumed = offset_x - GAP;

    if consumed < w - 1.0 {
        let shift = (w - 1.0 - consumed) / 2.0;
        for t in &mut out {
            t.x += shift;
        }
    }

    let area = w * h;
    Some(RowLayout {
        tiles: out,
        fit,
        viewport_use: consumed * height / area,
        video_weighted_use: weighted_area / area,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/row.rs"]
mod tests;
