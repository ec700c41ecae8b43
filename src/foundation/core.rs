use crate::foundation::error::{TilefitError, TilefitResult};

pub use kurbo::Rect;

/// Target rectangle a layout is computed for, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or non-positive dimensions.
    pub fn new(width: f64, height: f64) -> TilefitResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TilefitError::validation(format!(
                "viewport width must be finite and > 0 (got {width})"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(TilefitError::validation(format!(
                "viewport height must be finite and > 0 (got {height})"
            )));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
