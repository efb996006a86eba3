//! Measured extents of a carousel's items and viewport along its axis.

use revolve_contracts::RenderHost;
use revolve_model::{Axis, Item};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExtentModel {
    axis: Axis,
    items: Vec<Item>,
    viewport: Option<f64>,
}

impl ExtentModel {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            items: Vec::new(),
            viewport: None,
        }
    }

    /// Build a model with every extent already known. Mostly useful for
    /// hosts that lay items out themselves, and for tests.
    pub fn from_extents(axis: Axis, extents: &[f64], viewport: f64) -> Self {
        let items = extents
            .iter()
            .enumerate()
            .map(|(index, extent)| Item {
                index,
                extent: Some(*extent),
                loaded: true,
            })
            .collect();
        Self {
            axis,
            items,
            viewport: Some(viewport),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Register a new, unmeasured item at the end of the strip.
    pub fn push_item(&mut self) -> usize {
        let index = self.items.len();
        self.items.push(Item::new(index));
        index
    }

    pub fn mark_loaded(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.loaded = true;
        }
    }

    pub fn all_loaded(&self) -> bool {
        self.items.iter().all(|item| item.loaded)
    }

    /// Extent of the item at `index`. Unmeasured or missing items count as
    /// zero.
    #[inline]
    pub fn extent(&self, index: usize) -> f64 {
        self.items
            .get(index)
            .and_then(|item| item.extent)
            .unwrap_or(0.0)
    }

    /// Viewport extent; zero until measured.
    #[inline]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport.unwrap_or(0.0)
    }

    pub fn total_extent(&self) -> f64 {
        (0..self.items.len()).map(|i| self.extent(i)).sum()
    }

    pub fn is_measured(&self) -> bool {
        self.viewport.is_some() && self.items.iter().all(Item::is_measured)
    }

    pub fn set_extent(&mut self, index: usize, extent: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.extent = Some(extent);
        }
    }

    pub fn set_viewport_extent(&mut self, extent: f64) {
        self.viewport = Some(extent);
    }

    /// Full measurement pass: every item and the viewport, in one go, so
    /// readers never observe a half-updated model.
    pub fn measure<R>(&mut self, host: &R)
    where
        R: RenderHost + ?Sized,
    {
        let axis = self.axis;
        for item in &mut self.items {
            item.extent = Some(axis.extent_of(host.measure_item(item.index)));
        }
        self.viewport = Some(axis.extent_of(host.measure_viewport()));
        debug!(
            items = self.items.len(),
            viewport = self.viewport_extent(),
            total = self.total_extent(),
            dimension = axis.dimension(),
            "measured carousel extents"
        );
    }
}
