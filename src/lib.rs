//! tilefit computes where to draw a set of video tiles inside a viewport.
//!
//! Given an ordered list of tiles (aspect ratio, whether they may be cropped,
//! whether they are focused, whether they carry live video) and a viewport size,
//! tilefit returns a position, size and display aspect ratio for every tile so
//! that the rows of tiles cover as much of the viewport as possible.
//!
//! # Pipeline overview
//!
//! 1. **Group**: tiles without video are folded into shared placeholder slots
//!    (up to [`NOVIDEO_SPLIT`] per slot) when live tiles are present.
//! 2. **Search**: row counts are scored by viewport use; small counts are tried
//!    exhaustively, larger ones with a local search.
//! 3. **Compose**: for a row count, tiles are split into contiguous rows by a
//!    least-squares partition, every row is packed, and all rows are re-packed
//!    at the shortest row's height.
//! 4. **Pack**: within a row, croppable tiles share one crop coefficient that
//!    moves them from their natural ratio toward their crop floor.
//! 5. **Expand**: placeholder slots are split into one band per no-video tile.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs and configuration give bit-identical layouts.
//! - **Stateless**: nothing is cached across calls; configuration is passed explicitly.
//! - **Fail fast**: invalid tiles or viewports are reported as [`TilefitError`]
//!   instead of producing non-finite geometry.
//!
//! # Example
//!
//! ```
//! use tilefit::{InputTile, LayoutEngine};
//!
//! let tiles = vec![
//!     InputTile::new("alice", 16.0 / 9.0).croppable(true),
//!     InputTile::new("bob", 4.0 / 3.0).croppable(true).focused(true),
//!     InputTile::new("carol", 16.0 / 9.0).with_video(false),
//! ];
//! let layout = LayoutEngine::default().compute_layout(&tiles, 1280.0, 720.0)?;
//! assert_eq!(layout.tiles.len(), 3);
//! assert!(layout.viewport_use > 0.0 && layout.viewport_use <= 1.0);
//! # Ok::<(), tilefit::TilefitError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod foundation;
mod layout;
mod tile;

pub use config::{
    DEFAULT_EXHAUSTIVE_ROW_LIMIT, FOCUS_CROP_REDUCTION, GAP, LayoutConfig,
    MIN_ASPECT_RATIO_DEFAULT, NO_VIDEO_USE_K, NOVIDEO_SPLIT,
};
pub use engine::{LayoutEngine, compute_layout};
pub use foundation::core::{Rect, Viewport};
pub use foundation::error::{TilefitError, TilefitResult};
pub use tile::model::{InputTile, Layout, OutputTile};
