use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Scroll position of a dialog with long content
#[derive(Debug, Clone, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_SIZE));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    /// Rendering clamps the offset to the last page
    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp the offset for `total` lines shown `visible` at a time and sync the scrollbar
    pub fn clamp(&mut self, total: usize, visible: usize) -> usize {
        let max_scroll = total.saturating_sub(visible);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(total)
            .viewport_content_length(visible)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.state = self.state.position(offset);
    }
}
