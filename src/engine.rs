use std::ops::Range;

use crate::{
    config::LayoutConfig,
    foundation::core::Viewport,
    foundation::error::{TilefitError, TilefitResult},
    layout::{
        compose::{compose_rows, single_row_layout},
        crop::crop_floor,
        novideo::layout_with_no_video_groups,
        partition::partition_rows,
        search::find_optimal_layout,
    },
    tile::model::{InputTile, Layout},
};

/// Layout engine bound to one validated [`LayoutConfig`].
///
/// The engine holds no state besides its configuration; every call lays the
/// tiles out from scratch. Callers that need different crop floors
/// concurrently should use separate instances.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Build an engine after validating `config`.
    pub fn new(config: LayoutConfig) -> TilefitResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Change the crop floor used by subsequent calls.
    pub fn set_min_aspect_ratio(&mut self, min_aspect_ratio: f64) -> TilefitResult<()> {
        let config = LayoutConfig {
            min_aspect_ratio,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Narrowest aspect ratio `tile` may be cropped to under this configuration.
    pub fn crop_floor(&self, tile: &InputTile) -> TilefitResult<f64> {
        tile.validate()?;
        Ok(crop_floor(tile, self.config.min_aspect_ratio))
    }

    /// Pack every tile into a single row filling the viewport.
    pub fn pack_row(&self, tiles: &[InputTile], width: f64, height: f64) -> TilefitResult<Layout> {
        let vp = check_inputs(tiles, width, height)?;
        single_row_layout(tiles, vp.width, vp.height, self.config.min_aspect_ratio).ok_or_else(
            || {
                TilefitError::infeasible(format!(
                    "gaps between {} tiles exceed the {}px row width",
                    tiles.len(),
                    vp.width
                ))
            },
        )
    }

    /// Split `tiles` into `rows` contiguous rows whose summed aspect ratios are
    /// closest to `row_aspect_ratio`; returns the index range of each row.
    pub fn partition(
        &self,
        tiles: &[InputTile],
        rows: usize,
        row_aspect_ratio: f64,
    ) -> TilefitResult<Vec<Range<usize>>> {
        validate_tiles(tiles)?;
        check_rows(tiles, rows)?;
        if !row_aspect_ratio.is_finite() || row_aspect_ratio <= 0.0 {
            return Err(TilefitError::validation(format!(
                "row_aspect_ratio must be finite and > 0 (got {row_aspect_ratio})"
            )));
        }
        Ok(partition_rows(tiles, rows, row_aspect_ratio))
    }

    /// Lay `tiles` out in `rows` rows of equal height; `rows` above the tile
    /// count is clamped to one tile per row.
    pub fn compose(
        &self,
        tiles: &[InputTile],
        width: f64,
        height: f64,
        rows: usize,
    ) -> TilefitResult<Layout> {
        let vp = check_inputs(tiles, width, height)?;
        if rows == 0 {
            return Err(TilefitError::validation("rows must be >= 1"));
        }
        compose_rows(tiles, vp.width, vp.height, rows, self.config.min_aspect_ratio).ok_or_else(
            || {
                TilefitError::infeasible(format!(
                    "{rows} rows of {} tiles do not fit a {}x{} viewport",
                    tiles.len(),
                    vp.width,
                    vp.height
                ))
            },
        )
    }

    /// Search row counts for the layout with the highest viewport use,
    /// treating every tile alike.
    #[tracing::instrument(skip(self, tiles), fields(tiles = tiles.len()))]
    pub fn optimize(&self, tiles: &[InputTile], width: f64, height: f64) -> TilefitResult<Layout> {
        let vp = check_inputs(tiles, width, height)?;
        find_optimal_layout(
            tiles,
            vp.width,
            vp.height,
            self.config.min_aspect_ratio,
            self.config.exhaustive_row_limit,
        )
        .ok_or_else(|| too_small(tiles.len(), vp))
    }

    /// Compute the layout for `tiles` in a `width` x `height` viewport.
    ///
    /// Tiles without video are grouped into shared slots when live tiles are
    /// present; see the crate docs for the full pipeline.
    #[tracing::instrument(skip(self, tiles), fields(tiles = tiles.len()))]
    pub fn compute_layout(
        &self,
        tiles: &[InputTile],
        width: f64,
        height: f64,
    ) -> TilefitResult<Layout> {
        let vp = check_inputs(tiles, width, height)?;
        layout_with_no_video_groups(
            tiles,
            vp.width,
            vp.height,
            self.config.min_aspect_ratio,
            self.config.exhaustive_row_limit,
        )
        .ok_or_else(|| too_small(tiles.len(), vp))
    }
}

/// Compute a layout with an explicit configuration.
///
/// Equivalent to `LayoutEngine::new(config.clone())?.compute_layout(tiles, width, height)`.
pub fn compute_layout(
    tiles: &[InputTile],
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> TilefitResult<Layout> {
    LayoutEngine::new(config.clone())?.compute_layout(tiles, width, height)
}

fn check_inputs(tiles: &[InputTile], width: f64, height: f64) -> TilefitResult<Viewport> {
    validate_tiles(tiles)?;
    Viewport::new(width, height)
}

fn validate_tiles(tiles: &[InputTile]) -> TilefitResult<()> {
    if tiles.is_empty() {
        return Err(TilefitError::validation("tile list must not be empty"));
    }
    tiles.iter().try_for_each(InputTile::validate)
}

fn check_rows(tiles: &[InputTile], rows: usize) -> TilefitResult<()> {
    if rows == 0 || rows > tiles.len() {
        return Err(TilefitError::validation(format!(
            "rows must be in 1..={} (got {rows})",
            tiles.len()
        )));
    }
    Ok(())
}

fn too_small(count: usize, vp: Viewport) -> TilefitError {
    TilefitError::infeasible(format!(
        "{count} tiles do not fit a {}x{} viewport at any row count",
        vp.width, vp.height
    ))
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
