//! Next/previous stepping over non-uniform item extents.
//!
//! The engine is a single `Idle-at(current_index)` state: every call is an
//! atomic recomputation of the index plus at most one [`SlideCommand`].
//! Any in-flight visual transition belongs to the host.

use revolve_model::{Axis, SlideCommand};
use tracing::{debug, warn};

use crate::extent::ExtentModel;
use crate::visibility::VisibilityCalculator;

#[derive(Debug, Clone)]
pub struct NavigationEngine {
    extents: ExtentModel,
    current_index: usize,
    step_size: usize,
}

impl NavigationEngine {
    pub fn new(axis: Axis, step_size: usize) -> Self {
        Self::with_extents(ExtentModel::new(axis), step_size)
    }

    pub fn with_extents(extents: ExtentModel, step_size: usize) -> Self {
        Self {
            extents,
            current_index: 0,
            step_size: step_size.max(1),
        }
    }

    pub fn axis(&self) -> Axis {
        self.extents.axis()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn step_size(&self) -> usize {
        self.step_size
    }

    pub fn item_count(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &ExtentModel {
        &self.extents
    }

    pub fn extents_mut(&mut self) -> &mut ExtentModel {
        &mut self.extents
    }

    pub fn visibility(&self) -> VisibilityCalculator<'_> {
        VisibilityCalculator::new(&self.extents)
    }

    /// Sliding only makes sense with items and with something cut off.
    pub fn should_slide(&self) -> bool {
        if self.extents.is_empty() {
            warn!("carousel item list is empty, nothing to slide");
            return false;
        }
        if self.visibility().all_visible() {
            debug!("no need to slide, all items are visible");
            return false;
        }
        true
    }

    /// Fully visible items after the current one before the first one that
    /// overflows. Can undercount by one when a run of items fills the
    /// viewport exactly.
    pub fn visible_ahead(&self) -> usize {
        self.visibility()
            .leading_run(self.current_index)
            .saturating_sub(1)
    }

    pub fn next(&mut self) -> Option<SlideCommand> {
        if !self.should_slide() {
            return None;
        }

        let count = self.extents.len();
        let from = self.current_index;
        let step = self.step_size;

        let items_to_show = if self.visibility().fits_from(from, count)
            || from + step > count - 1
        {
            self.current_index = 0;
            0
        } else {
            let remaining = count - (from + self.visible_ahead());
            self.current_index += step.min(remaining);
            self.current_index
        };

        debug!(from, to = self.current_index, count, "carousel next");
        Some(self.command(items_to_show))
    }

    pub fn previous(&mut self) -> Option<SlideCommand> {
        if !self.should_slide() {
            return None;
        }

        let count = self.extents.len();
        let from = self.current_index;
        let step = self.step_size;

        // Wrap: anchor the last item at the trailing edge. At least one
        // position is kept so the index stays in range when the last item
        // alone overflows the viewport.
        if from < 1 && from < step {
            let tail = self.visibility().trailing_run().max(1);
            self.current_index = count - tail;
        } else {
            self.current_index -= step.min(from);
        }

        debug!(from, to = self.current_index, count, "carousel previous");
        Some(self.command(self.current_index))
    }

    fn command(&self, items_to_show: usize) -> SlideCommand {
        SlideCommand::for_position(
            self.extents.axis(),
            items_to_show,
            self.extents.len(),
            self.extents.total_extent(),
        )
    }
}
