//! Justified image grid layout.
//!
//! Packs images of known aspect ratio into rows that exactly fill a
//! container width, keeping row heights near a baseline height. Pure
//! geometry: no pixel operations, no I/O, `no_std` compatible (needs `alloc`).
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, ImageDescriptor, layout};
//!
//! let images = [
//!     ImageDescriptor::new(1600.0, 1200.0, "a"),
//!     ImageDescriptor::new(1200.0, 1200.0, "b"),
//!     ImageDescriptor::new(900.0, 1200.0, "c"),
//! ];
//! let grid = layout(images, 1000.0, &GridConfig::new()).unwrap();
//!
//! assert_eq!(grid.placements.len(), 3);
//! let last = &grid.placements[2];
//! assert!((last.right() - 1000.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`config`] — Layout parameters, defaults, and validation
//! - [`pack`] — Greedy row packing and per-row scale factors
//! - [`correct`] — Last-row stretch correction
//! - [`emit`] — Absolute placements, row metrics, pixel snapping
//! - [`host`] — Collaborator traits and a refresh/clear driver
//! - [`resize`] — Clock-injected resize debouncing
//! - `query` — Settings from a query string (feature `query`)
//! - `svg` — SVG rendering of a computed grid (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod correct;
pub mod emit;
pub mod host;
pub mod pack;
#[cfg(feature = "query")]
pub mod query;
pub mod resize;
#[cfg(feature = "svg")]
pub mod svg;

pub use config::{GridConfig, GridError};
pub use correct::{LastRowCorrection, correct_last_row};
pub use emit::{GridLayout, PixelRect, Placement, RowMetrics, emit};
pub use host::{ImageSource, JustifiedGrid, Surface};
pub use pack::{GridItem, ImageDescriptor, Row, pack, row_scale};
pub use resize::{ResizeDebouncer, ResizeEvent};

use tracing::debug;

/// Compute a justified grid for `images` in a container `container_width`
/// pixels wide.
///
/// Runs [`pack`], then [`correct_last_row`], then [`emit`]. Identical inputs
/// always produce identical output.
pub fn layout<R>(
    images: impl IntoIterator<Item = ImageDescriptor<R>>,
    container_width: f64,
    config: &GridConfig,
) -> Result<GridLayout<R>, GridError> {
    let mut rows = pack(images, container_width, config)?;
    let correction = correct_last_row(&mut rows, container_width, config);
    let grid = emit(rows, container_width, config);
    debug!(
        images = grid.placements.len(),
        rows = grid.rows.len(),
        total_height = grid.total_height,
        ?correction,
        "computed grid layout"
    );
    Ok(grid)
}
