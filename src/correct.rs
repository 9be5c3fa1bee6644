//! Last-row correction.
//!
//! A trailing row with only a few images would be stretched to the full
//! container width, producing cells far taller than the rest of the grid.
//! When the last row's scale exceeds
//! [`GridConfig::max_last_row_scale`], it borrows the preceding row's scale
//! if that row was a tight one, and otherwise renders at baseline size.

use tracing::debug;

use crate::config::GridConfig;
use crate::pack::Row;

/// What [`correct_last_row`] did to the last row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LastRowCorrection {
    /// No rows, or the last row's scale was within the threshold.
    Unchanged,
    /// The last row took the preceding row's scale.
    Borrowed {
        /// Scale the packer computed.
        original: f64,
        /// Scale taken from the preceding row.
        scale: f64,
    },
    /// The last row was reset to scale 1.
    Natural {
        /// Scale the packer computed.
        original: f64,
    },
}

/// Cap the stretch of the last row.
///
/// Only the last row's `scale` is modified. The preceding row qualifies as
/// a reference when `width * scale > container_width - len * gutter`.
pub fn correct_last_row<R>(
    rows: &mut [Row<R>],
    container_width: f64,
    config: &GridConfig,
) -> LastRowCorrection {
    let Some((last, rest)) = rows.split_last_mut() else {
        return LastRowCorrection::Unchanged;
    };
    let original = last.scale;
    if original <= config.max_last_row_scale {
        return LastRowCorrection::Unchanged;
    }

    let correction = match rest.last() {
        Some(previous)
            if previous.width * previous.scale
                > container_width - previous.len() as f64 * config.gutter =>
        {
            last.scale = previous.scale;
            LastRowCorrection::Borrowed {
                original,
                scale: previous.scale,
            }
        }
        _ => {
            last.scale = 1.0;
            LastRowCorrection::Natural { original }
        }
    };
    debug!(?correction, "corrected last row");
    correction
}
