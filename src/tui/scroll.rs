// Scroll state for the detail screen
//
// The detail body is a fixed list of lines (no wrapping), so scrolling is a
// vertical line offset plus a horizontal column offset for wide values.
// Dimensions are refreshed every render frame; offsets are clamped then.

/// Scroll state for a scrollable body
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,

    /// Columns skipped from the left
    horizontal: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // If dimensions not set (total=0), allow unbounded scroll
        // Render will clamp to actual content size
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn scroll_left(&mut self) {
        self.horizontal = self.horizontal.saturating_sub(1);
    }

    pub fn scroll_right(&mut self) {
        self.horizontal = self.horizontal.saturating_add(1);
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn horizontal_offset(&self) -> usize {
        self.horizontal
    }

    /// Check if content overflows viewport
    pub fn overflows(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 4);
        for _ in 0..20 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 6);

        scroll.page_up();
        assert_eq!(scroll.offset(), 2);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 40);

        scroll.update_dimensions(12, 10);
        assert_eq!(scroll.offset(), 2);
        assert!(scroll.overflows());
    }

    #[test]
    fn test_horizontal() {
        let mut scroll = ScrollState::new();
        scroll.scroll_left();
        assert_eq!(scroll.horizontal_offset(), 0);
        scroll.scroll_right();
        scroll.scroll_right();
        assert_eq!(scroll.horizontal_offset(), 2);
    }
}
