use crate::axis::Axis;

/// Instruction for the rendering host: translate the item strip so that
/// the item at the new position is anchored at the viewport's leading edge.
///
/// The translation is always negative along the active axis; a zero offset
/// means the strip is back at its start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideCommand {
    pub axis: Axis,
    /// Offset as a percentage of the strip's own extent.
    pub offset_percent: f64,
    /// Same offset in host units (`offset_percent` of the summed extents).
    pub offset_absolute: f64,
}

impl SlideCommand {
    /// Build the command that shows `items_to_show` leading items scrolled
    /// out of view, for a strip of `item_count` items whose extents sum to
    /// `total_extent`.
    pub fn for_position(
        axis: Axis,
        items_to_show: usize,
        item_count: usize,
        total_extent: f64,
    ) -> Self {
        let offset_percent = if item_count == 0 {
            0.0
        } else {
            (100.0 / item_count as f64) * items_to_show as f64
        };
        Self {
            axis,
            offset_percent,
            offset_absolute: offset_percent * total_extent / 100.0,
        }
    }

    pub fn is_reset(&self) -> bool {
        self.offset_percent == 0.0
    }

    /// `(x, y)` translation in percent of the strip.
    pub fn translation_percent(&self) -> (f64, f64) {
        self.signed(self.offset_percent)
    }

    /// `(x, y)` translation in host units.
    pub fn translation_absolute(&self) -> (f64, f64) {
        self.signed(self.offset_absolute)
    }

    fn signed(&self, offset: f64) -> (f64, f64) {
        // `0.0 - 0.0` keeps a positive zero for resets.
        let v = 0.0 - offset;
        match self.axis {
            Axis::Horizontal => (v, 0.0),
            Axis::Vertical => (0.0, v),
        }
    }
}
