//! Scroll-offset <-> item-index mapping for a vertically scrolling wheel.
//!
//! Nothing here touches platform APIs. The web frontend measures the DOM
//! (item height, track client height) and feeds the numbers in; everything
//! else is arithmetic, so it runs and tests on any target.

use crate::constants::DEFAULT_ITEM_HEIGHT_PX;

/// Measured geometry of one wheel track.
///
/// `padding()` is derived, not stored: it is whatever symmetric padding lets
/// both the first and the last item rest at the vertical center of the
/// viewport. Geometry must be rebuilt whenever the viewport resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    item_height: f64,
    viewport_height: f64,
}

impl WheelGeometry {
    /// Non-positive or non-finite measurements fall back to defaults rather
    /// than producing NaN indices downstream.
    pub fn new(item_height: f64, viewport_height: f64) -> Self {
        let item_height = if item_height.is_finite() && item_height > 0.0 {
            item_height
        } else {
            DEFAULT_ITEM_HEIGHT_PX
        };
        let viewport_height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            item_height
        };
        Self {
            item_height,
            viewport_height,
        }
    }

    #[inline]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    #[inline]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Track padding (applied top and bottom) that lets index 0 and index
    /// N-1 both be centered.
    #[inline]
    pub fn padding(&self) -> f64 {
        (self.viewport_height / 2.0 - self.item_height / 2.0).max(0.0)
    }

    /// Fractional item index whose center sits at the viewport center for
    /// the given scroll offset.
    #[inline]
    pub fn fractional_index(&self, scroll_offset: f64) -> f64 {
        let center = scroll_offset + self.viewport_height / 2.0;
        (center - self.padding() - self.item_height / 2.0) / self.item_height
    }

    /// Nearest whole index for the given scroll offset, clamped to
    /// `0..item_len`.
    pub fn nearest_index(&self, scroll_offset: f64, item_len: usize) -> usize {
        if item_len == 0 {
            return 0;
        }
        let idx = self.fractional_index(scroll_offset).round();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(item_len - 1)
        }
    }

    /// Inverse mapping: the scroll offset that centers `index`. Fractional
    /// indices are accepted so a mirroring wheel can track a driver
    /// proportionally mid-scroll.
    #[inline]
    pub fn scroll_offset_for(&self, index: f64) -> f64 {
        self.padding() + index * self.item_height + self.item_height / 2.0
            - self.viewport_height / 2.0
    }
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_HEIGHT_PX, DEFAULT_ITEM_HEIGHT_PX * 3.0)
    }
}
