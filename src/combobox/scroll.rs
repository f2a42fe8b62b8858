/// Compute the scroll offset that brings an item fully into view.
///
/// - Item starts above the viewport: align its top with the viewport top.
/// - Item ends below the viewport: align its bottom with the viewport bottom.
/// - Otherwise the current offset is returned unchanged.
///
/// All values are in the same unit (pixels, terminal rows, ...).
pub fn scroll_into_view(
    item_top: usize,
    item_height: usize,
    viewport_height: usize,
    scroll_top: usize,
) -> usize {
    let item_bottom = item_top + item_height;
    if item_top < scroll_top {
        item_top
    } else if item_bottom > scroll_top + viewport_height {
        item_bottom.saturating_sub(viewport_height)
    } else {
        scroll_top
    }
}

/// Scroll state of a list of uniformly sized items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    pub scroll_top: usize,
    pub item_height: usize,
    pub viewport_height: usize,
}

impl ListViewport {
    pub fn new(item_height: usize, viewport_height: usize) -> Self {
        Self { scroll_top: 0, item_height, viewport_height }
    }

    pub fn set_viewport_height(&mut self, viewport_height: usize) {
        self.viewport_height = viewport_height;
    }

    /// Scroll so that the item at `index` is fully visible.
    pub fn reveal(&mut self, index: usize) {
        self.scroll_top = scroll_into_view(
            index * self.item_height,
            self.item_height,
            self.viewport_height,
            self.scroll_top,
        );
    }

    /// Index of the first (possibly partly) visible item.
    pub fn first_visible(&self) -> usize {
        if self.item_height == 0 { 0 } else { self.scroll_top / self.item_height }
    }

    /// Range of item indices that intersect the viewport, bounded by `len`.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        if self.item_height == 0 {
            return 0..0;
        }
        let start = self.first_visible().min(len);
        let end = (self.scroll_top + self.viewport_height).div_ceil(self.item_height).min(len);
        start..end.max(start)
    }

    /// Pull the offset back when the list shrank below it.
    pub fn clamp(&mut self, len: usize) {
        let max_top = (len * self.item_height).saturating_sub(self.viewport_height);
        self.scroll_top = self.scroll_top.min(max_top);
    }

    pub fn reset(&mut self) {
        self.scroll_top = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_above_viewport_aligns_top() {
        // Item at 40..60, viewport shows 100..300
        assert_eq!(scroll_into_view(40, 20, 200, 100), 40);
    }

    #[test]
    fn test_item_below_viewport_aligns_bottom() {
        // Item at 300..340, viewport shows 0..200
        assert_eq!(scroll_into_view(300, 40, 200, 0), 140);
    }

    #[test]
    fn test_item_fully_visible_keeps_offset() {
        assert_eq!(scroll_into_view(120, 20, 200, 100), 100);
    }

    #[test]
    fn test_item_touching_bottom_edge_is_visible() {
        assert_eq!(scroll_into_view(280, 20, 200, 100), 100);
    }

    #[test]
    fn test_item_partly_below_scrolls() {
        assert_eq!(scroll_into_view(290, 20, 200, 100), 110);
    }

    #[test]
    fn test_item_taller_than_viewport_prefers_top() {
        assert_eq!(scroll_into_view(50, 300, 200, 100), 50);
    }

    #[test]
    fn test_viewport_reveal_walks_down_and_up() {
        let mut viewport = ListViewport::new(1, 5);

        viewport.reveal(4);
        assert_eq!(viewport.scroll_top, 0);

        viewport.reveal(7);
        assert_eq!(viewport.scroll_top, 3);
        assert_eq!(viewport.visible_range(20), 3..8);

        viewport.reveal(0);
        assert_eq!(viewport.scroll_top, 0);
    }

    #[test]
    fn test_visible_range_bounded_by_len() {
        let viewport = ListViewport::new(1, 10);
        assert_eq!(viewport.visible_range(3), 0..3);
        assert_eq!(viewport.visible_range(0), 0..0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut viewport = ListViewport::new(1, 5);
        viewport.reveal(19);
        assert_eq!(viewport.scroll_top, 15);

        viewport.clamp(8);
        assert_eq!(viewport.scroll_top, 3);

        viewport.clamp(2);
        assert_eq!(viewport.scroll_top, 0);
    }

    #[test]
    fn test_visible_range_zero_item_height() {
        let viewport = ListViewport::new(0, 10);
        assert_eq!(viewport.visible_range(5), 0..0);
        assert_eq!(viewport.first_visible(), 0);
    }
}
