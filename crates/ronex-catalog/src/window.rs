//! Viewport windowing for long project grids.
//!
//! Cards are laid out in rows of `floor(container_width / item_width)`. Given
//! a scroll offset and viewport height, [`visible_range`] returns the index
//! range worth rendering, plus one overscan row. Sizes are estimates, not
//! measurements, so the range can be slightly too wide or too narrow at
//! extreme aspect ratios.

use std::ops::Range;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::throttle::ScrollThrottle;

/// Lists this short are rendered in full.
pub const WINDOWING_THRESHOLD: usize = 8;

/// Rows rendered past the bottom edge of the viewport.
const OVERSCAN_ROWS: usize = 1;

/// Scroll state of the list container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub container_width: f64,
}

/// Estimated size of one project card, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemEstimate {
    pub width: f64,
    pub height: f64,
}

impl Default for ItemEstimate {
    fn default() -> Self {
        Self {
            width: 350.0,
            height: 450.0,
        }
    }
}

impl From<&ronex_config::CatalogConfig> for ItemEstimate {
    fn from(config: &ronex_config::CatalogConfig) -> Self {
        Self {
            width: config.item_width,
            height: config.item_height,
        }
    }
}

/// Visible index range for a list of `total` items.
#[must_use]
pub fn visible_range(total: usize, viewport: &Viewport, estimate: &ItemEstimate) -> Range<usize> {
    visible_range_with_threshold(total, WINDOWING_THRESHOLD, viewport, estimate)
}

/// [`visible_range`] with an explicit full-render threshold.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn visible_range_with_threshold(
    total: usize,
    threshold: usize,
    viewport: &Viewport,
    estimate: &ItemEstimate,
) -> Range<usize> {
    if total <= threshold {
        return 0..total;
    }

    let item_height = positive_or(estimate.height, 1.0);
    let per_row = if positive(estimate.width) && positive(viewport.container_width) {
        ((viewport.container_width / estimate.width).floor() as usize).max(1)
    } else {
        1
    };

    let offset = non_negative(viewport.scroll_offset);
    let height = non_negative(viewport.viewport_height);

    let first_row = (offset / item_height).floor() as usize;
    let rows = (height / item_height).ceil() as usize + OVERSCAN_ROWS;

    let end = first_row
        .saturating_add(rows)
        .saturating_mul(per_row)
        .min(total);
    let start = first_row.saturating_mul(per_row).min(end);
    start..end
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if positive(value) { value } else { fallback }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// WindowedList
// ---------------------------------------------------------------------------

/// Tracks the current window of a list as the user scrolls.
///
/// Scroll events pass through a [`ScrollThrottle`]; a dropped event is kept
/// and can be applied later with [`WindowedList::flush`].
#[derive(Debug, Clone)]
pub struct WindowedList {
    estimate: ItemEstimate,
    threshold: usize,
    throttle: ScrollThrottle,
    total: usize,
    viewport: Viewport,
    range: Range<usize>,
}

impl WindowedList {
    #[must_use]
    pub fn new(estimate: ItemEstimate, threshold: usize) -> Self {
        Self {
            estimate,
            threshold,
            throttle: ScrollThrottle::default(),
            total: 0,
            viewport: Viewport::default(),
            range: 0..0,
        }
    }

    #[must_use]
    pub fn with_throttle(mut self, throttle: ScrollThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    /// The list length changed (new data or new filter). Recomputes immediately.
    pub fn reset(&mut self, total: usize, viewport: Viewport) -> Range<usize> {
        self.total = total;
        self.viewport = viewport;
        self.recompute()
    }

    /// A scroll or resize event. Returns the new range if the throttle let it through.
    pub fn on_scroll(&mut self, now: Instant, viewport: Viewport) -> Option<Range<usize>> {
        self.viewport = viewport;
        self.throttle.poll(now).then(|| self.recompute())
    }

    /// Apply the last dropped scroll event, if any and if allowed at `now`.
    pub fn flush(&mut self, now: Instant) -> Option<Range<usize>> {
        self.throttle.flush(now).then(|| self.recompute())
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The windowed part of `items`, clamped to its length.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.range.end.min(items.len());
        let start = self.range.start.min(end);
        &items[start..end]
    }

    fn recompute(&mut self) -> Range<usize> {
        self.range =
            visible_range_with_threshold(self.total, self.threshold, &self.viewport, &self.estimate);
        self.range.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn viewport(scroll_offset: f64) -> Viewport {
        Viewport {
            scroll_offset,
            viewport_height: 900.0,
            container_width: 1100.0,
        }
    }

    #[test]
    fn short_lists_render_everything() {
        let estimate = ItemEstimate::default();
        assert_eq!(visible_range(0, &viewport(0.0), &estimate), 0..0);
        assert_eq!(visible_range(8, &viewport(5000.0), &estimate), 0..8);
    }

    #[test]
    fn top_of_long_list() {
        // 1100 / 350 = 3 per row; ceil(900 / 450) + 1 = 3 rows.
        let range = visible_range(100, &viewport(0.0), &ItemEstimate::default());
        assert_eq!(range, 0..9);
    }

    #[test]
    fn scrolled_window_starts_on_row_boundary() {
        // offset 1000 → row 2 → index 6.
        let range = visible_range(100, &viewport(1000.0), &ItemEstimate::default());
        assert_eq!(range, 6..15);
    }

    #[test]
    fn end_is_clamped_to_total() {
        let range = visible_range(10, &viewport(1000.0), &ItemEstimate::default());
        assert_eq!(range, 6..10);
        let past_end = visible_range(10, &viewport(1_000_000.0), &ItemEstimate::default());
        assert_eq!(past_end, 10..10);
    }

    #[test]
    fn narrow_container_is_one_per_row() {
        let narrow = Viewport {
            scroll_offset: 0.0,
            viewport_height: 450.0,
            container_width: 200.0,
        };
        assert_eq!(visible_range(20, &narrow, &ItemEstimate::default()), 0..2);
    }

    #[test]
    fn degenerate_estimates_do_not_panic() {
        let estimate = ItemEstimate {
            width: 0.0,
            height: f64::NAN,
        };
        let range = visible_range(50, &viewport(-10.0), &estimate);
        assert_eq!(range.start, 0);
        assert!(range.end <= 50);
    }

    #[test]
    fn windowed_list_throttles_scroll() {
        let mut list = WindowedList::new(ItemEstimate::default(), WINDOWING_THRESHOLD);
        assert_eq!(list.reset(100, viewport(0.0)), 0..9);

        let start = Instant::now();
        assert_eq!(list.on_scroll(start, viewport(1000.0)), Some(6..15));
        assert_eq!(list.on_scroll(start + Duration::from_millis(4), viewport(2000.0)), None);
        assert_eq!(list.range(), 6..15);
        assert_eq!(list.flush(start + Duration::from_millis(20)), Some(12..21));
    }

    #[test]
    fn slice_clamps_to_items() {
        let mut list = WindowedList::new(ItemEstimate::default(), 2);
        list.reset(100, viewport(1000.0));
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(list.slice(&items), &[6, 7, 8, 9]);
    }
}
