//! "Does it fit?" questions over an [`ExtentModel`] snapshot.
//!
//! Comparisons are strict and unrounded: a run of items whose extents sum
//! to exactly the viewport extent does not fit, and sub-pixel differences
//! count.

use crate::extent::ExtentModel;

#[derive(Debug, Clone, Copy)]
pub struct VisibilityCalculator<'a> {
    model: &'a ExtentModel,
}

impl<'a> VisibilityCalculator<'a> {
    pub fn new(model: &'a ExtentModel) -> Self {
        Self { model }
    }

    /// Whether items `[start, count)` fit inside the viewport.
    pub fn fits_from(&self, start: usize, count: usize) -> bool {
        if self.model.is_empty() {
            return true;
        }
        let end = count.min(self.model.len());
        let total: f64 = (start..end).map(|i| self.model.extent(i)).sum();
        self.model.viewport_extent() > total
    }

    pub fn all_visible(&self) -> bool {
        self.fits_from(0, self.model.len())
    }

    /// Number of consecutive items from `start` whose running sum stays
    /// strictly under the viewport extent.
    pub fn leading_run(&self, start: usize) -> usize {
        run_length(self.model, start..self.model.len())
    }

    /// Same as [`Self::leading_run`], anchored at the last item and
    /// scanning backwards.
    pub fn trailing_run(&self) -> usize {
        run_length(self.model, (0..self.model.len()).rev())
    }
}

fn run_length<I>(model: &ExtentModel, indices: I) -> usize
where
    I: Iterator<Item = usize>,
{
    let viewport = model.viewport_extent();
    let mut sum = 0.0;
    let mut count = 0;
    for index in indices {
        let next = sum + model.extent(index);
        if next >= viewport {
            break;
        }
        sum = next;
        count += 1;
    }
    count
}
