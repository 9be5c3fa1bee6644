//! Host integration.
//!
//! The layout functions are pure; something still has to measure the
//! container, push positions onto real elements, and decide when to run
//! again. [`JustifiedGrid`] does that against two injected collaborators:
//!
//! - an [`ImageSource`] that supplies image dimensions, and
//! - a [`Surface`] that measures the container and applies placements.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, ImageDescriptor, JustifiedGrid, Placement, Surface};
//!
//! #[derive(Default)]
//! struct Page {
//!     styles: Vec<(u32, f64, f64)>,
//!     height: Option<f64>,
//! }
//!
//! impl Surface<u32> for Page {
//!     fn container_width(&self) -> f64 {
//!         960.0
//!     }
//!     fn apply(&mut self, p: &Placement<u32>) {
//!         self.styles.push((p.reference, p.left, p.top));
//!     }
//!     fn set_content_height(&mut self, height: f64) {
//!         self.height = Some(height);
//!     }
//!     fn clear(&mut self) {
//!         self.styles.clear();
//!         self.height = None;
//!     }
//! }
//!
//! let images = vec![
//!     ImageDescriptor::new(800.0, 600.0, 1u32),
//!     ImageDescriptor::new(600.0, 800.0, 2u32),
//! ];
//! let grid = JustifiedGrid::attach(GridConfig::new(), images, Page::default()).unwrap();
//! assert_eq!(grid.surface().styles.len(), 2);
//! assert!(grid.surface().height.is_some());
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use tracing::{debug, trace};

use crate::config::{GridConfig, GridError};
use crate::emit::{GridLayout, Placement};
use crate::pack::ImageDescriptor;
use crate::resize::{ResizeDebouncer, ResizeEvent};

/// Supplies the images to lay out.
pub trait ImageSource {
    /// Handle identifying each image on the host side.
    type Ref;

    /// Current images in display order.
    fn images(&self) -> Vec<ImageDescriptor<Self::Ref>>;
}

impl<R: Clone> ImageSource for Vec<ImageDescriptor<R>> {
    type Ref = R;

    fn images(&self) -> Vec<ImageDescriptor<R>> {
        self.clone()
    }
}

/// The rendering side: measures the container and positions elements.
pub trait Surface<R> {
    /// Current inner width of the container.
    fn container_width(&self) -> f64;

    /// Position and size one element.
    fn apply(&mut self, placement: &Placement<R>);

    /// Set the container's height so it encloses every row.
    fn set_content_height(&mut self, height: f64);

    /// Remove every position, size, and height previously applied.
    fn clear(&mut self);

    /// Called once all placements are applied. Hosts that defer image
    /// loading until positions are final start it here.
    fn load_images(&mut self) {}
}

/// Keeps a [`Surface`] laid out as a justified grid.
pub struct JustifiedGrid<S: ImageSource, T> {
    config: GridConfig,
    source: S,
    surface: T,
    debouncer: ResizeDebouncer,
    layout: Option<GridLayout<S::Ref>>,
}

impl<S, T> JustifiedGrid<S, T>
where
    S: ImageSource,
    T: Surface<S::Ref>,
{
    /// Wrap the collaborators without rendering anything yet.
    pub fn new(config: GridConfig, source: S, surface: T) -> Self {
        Self {
            config,
            source,
            surface,
            debouncer: ResizeDebouncer::new(config.resize_timeout),
            layout: None,
        }
    }

    /// Wrap the collaborators and render once.
    pub fn attach(config: GridConfig, source: S, surface: T) -> Result<Self, GridError> {
        let mut grid = Self::new(config, source, surface);
        grid.refresh()?;
        Ok(grid)
    }

    /// Re-measure, re-layout, and re-apply.
    ///
    /// Placements are applied in order, then the content height is set, then
    /// [`Surface::load_images`] runs. On error the surface is left untouched
    /// and the previous layout is kept.
    pub fn refresh(&mut self) -> Result<&GridLayout<S::Ref>, GridError> {
        let width = self.surface.container_width();
        let grid = crate::layout(self.source.images(), width, &self.config)?;

        for placement in &grid.placements {
            self.surface.apply(placement);
        }
        self.surface.set_content_height(grid.total_height);
        self.surface.load_images();

        debug!(
            container_width = width,
            images = grid.placements.len(),
            total_height = grid.total_height,
            "refreshed grid"
        );
        Ok(self.layout.insert(grid))
    }

    /// Remove applied styles and forget the current layout.
    pub fn clear(&mut self) {
        trace!("clearing grid styles");
        self.surface.clear();
        self.layout = None;
    }

    /// Feed a container resize notification observed at `now`.
    ///
    /// Ignored unless [`GridConfig::refresh_on_resize`] is set. The first
    /// notification of a burst clears the surface.
    pub fn on_resize(&mut self, now: Duration) -> Option<ResizeEvent> {
        if !self.config.refresh_on_resize {
            return None;
        }
        let event = self.debouncer.on_resize(now);
        if event == Some(ResizeEvent::Start) {
            self.clear();
        }
        event
    }

    /// Refresh if a resize burst has settled by `now`.
    ///
    /// Returns the new layout when a refresh happened.
    pub fn poll(&mut self, now: Duration) -> Result<Option<&GridLayout<S::Ref>>, GridError> {
        if self.debouncer.poll(now) == Some(ResizeEvent::End) {
            return self.refresh().map(Some);
        }
        Ok(None)
    }

    /// When [`poll`](Self::poll) should next be called, if a resize is pending.
    pub fn deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    /// The layout currently applied, if any.
    pub fn layout(&self) -> Option<&GridLayout<S::Ref>> {
        self.layout.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next refresh.
    ///
    /// A resize burst already in progress still ends in a refresh, measured
    /// against the new timeout, even if resize handling is being turned off.
    pub fn set_config(&mut self, config: GridConfig) {
        self.debouncer.set_timeout(config.resize_timeout);
        self.config = config;
    }

    /// The image source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the image source, e.g. to add images before a refresh.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The rendering surface.
    pub fn surface(&self) -> &T {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut T {
        &mut self.surface
    }

    /// Clear the surface and hand back both collaborators.
    pub fn detach(mut self) -> (S, T) {
        self.clear();
        (self.source, self.surface)
    }
}
