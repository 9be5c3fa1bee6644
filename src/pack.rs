//! Greedy row packing.
//!
//! Every image is scaled to the baseline height, then items are appended to
//! the current row until the next one would overflow the container. Each
//! closed row gets the scale factor that makes it exactly fill the
//! container width, gutters included.
//!
//! ```text
//!     container_width
//!     ├──────────────────────────────────────────┤
//!     ┌────────┐ g ┌──────────────┐ g ┌────────┐
//!     │  w0·s  │   │     w1·s     │   │  w2·s  │  height = baseline·s
//!     └────────┘   └──────────────┘   └────────┘
//!     s = (container_width − g·(n−1)) / (w0 + w1 + w2)
//! ```

use alloc::vec::Vec;

use tracing::trace;

use crate::config::{GridConfig, GridError};

/// An image to lay out: intrinsic dimensions plus the caller's handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageDescriptor<R> {
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
    /// Opaque handle carried through to the output.
    pub reference: R,
}

impl<R> ImageDescriptor<R> {
    /// Describe an image of `width`×`height` identified by `reference`.
    pub fn new(width: f64, height: f64, reference: R) -> Self {
        Self {
            width,
            height,
            reference,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Borrow the reference, so a slice of descriptors can be laid out
    /// without cloning handles.
    pub fn by_ref(&self) -> ImageDescriptor<&R> {
        ImageDescriptor {
            width: self.width,
            height: self.height,
            reference: &self.reference,
        }
    }

    /// Zero width is allowed; such an image takes no horizontal space.
    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width >= 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// An image scaled to the baseline height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridItem<R> {
    /// Width at the baseline height.
    pub width: f64,
    /// The caller's handle.
    pub reference: R,
}

/// A closed row of items.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<R> {
    /// Items in left-to-right order.
    pub items: Vec<GridItem<R>>,
    /// Sum of item widths at the baseline height, gutters excluded.
    pub width: f64,
    /// Factor applied to item widths and the baseline height.
    pub scale: f64,
}

impl<R> Row<R> {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the row has no items. Packing never produces one.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rendered row height.
    pub fn height(&self, baseline_height: f64) -> f64 {
        baseline_height * self.scale
    }

    /// Rendered row width, internal gutters included.
    pub fn rendered_width(&self, gutter: f64) -> f64 {
        self.width * self.scale + gutter * gutter_count(self.items.len())
    }
}

/// Scale that makes `item_count` items of total width `row_width`, separated
/// by gutters, exactly fill `container_width`.
pub fn row_scale(container_width: f64, gutter: f64, item_count: usize, row_width: f64) -> f64 {
    (container_width - gutter * gutter_count(item_count)) / row_width
}

/// `n - 1` as a float, which is `-1` for an empty row.
fn gutter_count(n: usize) -> f64 {
    n as f64 - 1.0
}

/// Pack images into rows for a container of `container_width` pixels.
///
/// Images keep their input order. The last row is closed as-is; apply
/// [`correct_last_row`](crate::correct_last_row) afterwards to cap its
/// stretch.
pub fn pack<R>(
    images: impl IntoIterator<Item = ImageDescriptor<R>>,
    container_width: f64,
    config: &GridConfig,
) -> Result<Vec<Row<R>>, GridError> {
    config.validate(container_width)?;

    let gutter = config.gutter;
    let mut rows = Vec::new();
    let mut current: Vec<GridItem<R>> = Vec::new();
    let mut current_width = 0.0;

    for (index, image) in images.into_iter().enumerate() {
        if !image.is_valid() {
            return Err(GridError::InvalidImageDescriptor {
                index,
                width: image.width,
                height: image.height,
            });
        }
        let width = config.baseline_height * image.aspect_ratio();
        let item = GridItem {
            width,
            reference: image.reference,
        };

        // The gutter term uses the length before this item is added, so the
        // first item of a row gets one gutter of slack. An empty row always
        // accepts, so an oversized first image shrinks instead of closing
        // a row with nothing in it.
        let gutter_space = gutter * gutter_count(current.len());
        if current.is_empty() || current_width + width + gutter_space <= container_width {
            current_width += width;
            current.push(item);
        } else {
            let items = core::mem::take(&mut current);
            rows.push(close_row(rows.len(), items, current_width, container_width, gutter)?);
            current.push(item);
            current_width = width;
        }
    }

    if !current.is_empty() {
        rows.push(close_row(rows.len(), current, current_width, container_width, gutter)?);
    }

    Ok(rows)
}

fn close_row<R>(
    index: usize,
    items: Vec<GridItem<R>>,
    width: f64,
    container_width: f64,
    gutter: f64,
) -> Result<Row<R>, GridError> {
    let scale = row_scale(container_width, gutter, items.len(), width);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(GridError::DegenerateRow { index, scale });
    }
    trace!(row = index, items = items.len(), width, scale, "closed row");
    Ok(Row {
        items,
        width,
        scale,
    })
}
