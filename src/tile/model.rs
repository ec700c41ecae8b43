use crate::{
    foundation::core::Rect,
    foundation::error::{TilefitError, TilefitResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One tile to be placed, as supplied by the caller.
///
/// The position of a tile in the input sequence is significant: layouts keep
/// tiles in order and only ever group contiguous runs into rows.
pub struct InputTile {
    /// Opaque identifier copied onto the matching [`OutputTile`].
    pub id: String,
    /// Natural width/height of the tile content; must be finite and > 0.
    pub aspect_ratio: f64,
    /// Whether the layout may crop this tile toward its crop floor.
    #[serde(default)]
    pub can_be_cropped: bool,
    /// Focused tiles get a crop floor closer to their natural ratio.
    #[serde(default)]
    pub is_focused: bool,
    /// `false` for placeholder tiles without a live feed (audio-only, camera off).
    #[serde(default = "default_has_video")]
    pub has_video: bool,
}

fn default_has_video() -> bool {
    true
}

impl InputTile {
    /// An uncroppable, unfocused tile with a live feed.
    pub fn new(id: impl Into<String>, aspect_ratio: f64) -> Self {
        Self {
            id: id.into(),
            aspect_ratio,
            can_be_cropped: false,
            is_focused: false,
            has_video: true,
        }
    }

    /// Set whether the tile may be cropped.
    pub fn croppable(mut self, can_be_cropped: bool) -> Self {
        self.can_be_cropped = can_be_cropped;
        self
    }

    /// Set whether the tile is focused.
    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    /// Set whether the tile carries a live video feed.
    pub fn with_video(mut self, has_video: bool) -> Self {
        self.has_video = has_video;
        self
    }

    /// Reject tiles whose aspect ratio would make the layout math non-finite.
    pub fn validate(&self) -> TilefitResult<()> {
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(TilefitError::validation(format!(
                "tile '{}' aspect_ratio must be finite and > 0 (got {})",
                self.id, self.aspect_ratio
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placement of one tile inside the viewport.
pub struct OutputTile {
    /// Identifier of the input tile this slot belongs to.
    pub id: String,
    /// Left edge in viewport pixels.
    pub x: f64,
    /// Top edge in viewport pixels.
    pub y: f64,
    /// Slot width in pixels.
    pub width: f64,
    /// Slot height in pixels.
    pub height: f64,
    /// Aspect ratio the content is displayed at (cropped horizontally when below the natural ratio).
    pub crop_ratio: f64,
}

impl OutputTile {
    /// The slot as a rectangle in viewport coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of a layout pass.
pub struct Layout {
    /// Placed tiles, in input order (no-video slots follow the live tiles).
    pub tiles: Vec<OutputTile>,
    /// Number of rows the tiles were split into.
    pub rows: usize,
    /// Height shared by every row.
    pub row_height: f64,
    /// Height of the stacked rows including inter-row gaps.
    pub total_height: f64,
    /// Fraction of the viewport area covered by the rows, in `[0, 1]`.
    pub viewport_use: f64,
    /// Covered fraction with tiles lacking video weighted down.
    ///
    /// Reported for diagnostics; the row-count search ranks by [`Layout::viewport_use`].
    pub video_weighted_use: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/tile/model.rs"]
mod tests;
