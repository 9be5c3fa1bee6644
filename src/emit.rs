//! Placement emission.
//!
//! Folds packed rows into absolute rectangles. Rows stack top-to-bottom and
//! items run left-to-right, each separated by one gutter.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::config::GridConfig;
use crate::pack::Row;

/// Where one image goes, in container coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement<R> {
    /// The caller's handle.
    pub reference: R,
    /// Distance from the container's top edge.
    pub top: f64,
    /// Distance from the container's left edge.
    pub left: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl<R> Placement<R> {
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Snap to whole pixels.
    ///
    /// Each edge is rounded on its own and the size derived from the rounded
    /// edges, so neighbours a whole-pixel gutter apart keep exactly that gap.
    pub fn to_pixels(&self) -> PixelRect {
        let left = self.left.round();
        let top = self.top.round();
        let right = self.right().round().max(left);
        let bottom = self.bottom().round().max(top);
        PixelRect {
            left: left as i64,
            top: top as i64,
            width: (right - left) as u64,
            height: (bottom - top) as u64,
        }
    }
}

/// A placement snapped to integer pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Rounded left edge.
    pub left: i64,
    /// Rounded top edge.
    pub top: i64,
    /// Rounded right edge minus rounded left edge.
    pub width: u64,
    /// Rounded bottom edge minus rounded top edge.
    pub height: u64,
}

/// Per-row summary of an emitted grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// Index of the row's first placement.
    pub first: usize,
    /// Number of placements in the row.
    pub count: usize,
    /// Top edge of the row.
    pub top: f64,
    /// Row height.
    pub height: f64,
    /// Scale applied to the row.
    pub scale: f64,
    /// Width of the row's content, internal gutters included.
    pub rendered_width: f64,
}

/// A computed justified grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout<R> {
    /// One placement per input image, in input order.
    pub placements: Vec<Placement<R>>,
    /// One entry per row, top to bottom.
    pub rows: Vec<RowMetrics>,
    /// Container width the layout was computed for.
    pub container_width: f64,
    /// Height the container needs: rows plus the gutters between them.
    pub total_height: f64,
}

impl<R> GridLayout<R> {
    /// True when there is nothing to place.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements belonging to the row described by `metrics`.
    pub fn row_placements(&self, metrics: &RowMetrics) -> &[Placement<R>] {
        &self.placements[metrics.first..metrics.first + metrics.count]
    }

    /// Every placement snapped to whole pixels, with its reference.
    pub fn to_pixels(&self) -> Vec<(&R, PixelRect)> {
        self.placements
            .iter()
            .map(|p| (&p.reference, p.to_pixels()))
            .collect()
    }
}

/// Turn rows into placements and a total height.
pub fn emit<R>(rows: Vec<Row<R>>, container_width: f64, config: &GridConfig) -> GridLayout<R> {
    let gutter = config.gutter;
    let mut placements = Vec::with_capacity(rows.iter().map(Row::len).sum());
    let mut metrics = Vec::with_capacity(rows.len());
    let mut top = 0.0;

    for (index, row) in rows.into_iter().enumerate() {
        if index > 0 {
            top += gutter;
        }
        let height = row.height(config.baseline_height);
        let rendered_width = row.rendered_width(gutter);
        let first = placements.len();
        let count = row.len();

        let mut left = 0.0;
        for (i, item) in row.items.into_iter().enumerate() {
            if i > 0 {
                left += gutter;
            }
            let width = item.width * row.scale;
            placements.push(Placement {
                reference: item.reference,
                top,
                left,
                width,
                height,
            });
            left += width;
        }

        metrics.push(RowMetrics {
            first,
            count,
            top,
            height,
            scale: row.scale,
            rendered_width,
        });
        top += height;
    }

    GridLayout {
        placements,
        rows: metrics,
        container_width,
        total_height: top,
    }
}
