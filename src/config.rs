use crate::foundation::error::{TilefitError, TilefitResult};

/// Pixels reserved between adjacent tiles and between adjacent rows.
pub const GAP: f64 = 8.0;
/// Fraction of the crop range withheld from focused tiles.
pub const FOCUS_CROP_REDUCTION: f64 = 0.7;
/// Default crop floor for croppable tiles.
pub const MIN_ASPECT_RATIO_DEFAULT: f64 = 3.0 / 4.0;
/// Maximum number of no-video tiles sharing one placeholder slot.
pub const NOVIDEO_SPLIT: usize = 4;
/// Weight of a no-video tile's area in [`crate::Layout::video_weighted_use`].
pub const NO_VIDEO_USE_K: f64 = 0.3;
/// Row counts searched exhaustively before switching to local search.
pub const DEFAULT_EXHAUSTIVE_ROW_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunables for the layout engine.
pub struct LayoutConfig {
    /// Narrowest aspect ratio a croppable, unfocused tile may be cropped to.
    #[serde(default = "default_min_aspect_ratio")]
    pub min_aspect_ratio: f64,
    /// Row counts `1..=limit` are always evaluated; larger counts use local search.
    #[serde(default = "default_exhaustive_row_limit")]
    pub exhaustive_row_limit: usize,
}

fn default_min_aspect_ratio() -> f64 {
    MIN_ASPECT_RATIO_DEFAULT
}

fn default_exhaustive_row_limit() -> usize {
    DEFAULT_EXHAUSTIVE_ROW_LIMIT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_aspect_ratio: MIN_ASPECT_RATIO_DEFAULT,
            exhaustive_row_limit: DEFAULT_EXHAUSTIVE_ROW_LIMIT,
        }
    }
}

impl LayoutConfig {
    /// Check that every tunable is in range.
    pub fn validate(&self) -> TilefitResult<()> {
        if !self.min_aspect_ratio.is_finite() || self.min_aspect_ratio <= 0.0 {
            return Err(TilefitError::validation(format!(
                "min_aspect_ratio must be finite and > 0 (got {})",
                self.min_aspect_ratio
            )));
        }
        if self.exhaustive_row_limit == 0 {
            return Err(TilefitError::validation(
                "exhaustive_row_limit must be >= 1",
            ));
        }
        Ok(())
    }
}
