/// Suggestion panel state
///
/// Two states: closed (no panel drawn) and open with one highlighted index
/// in `0..N-1`. A panel can be open over an empty hit list; the UI then
/// shows the no-matches placeholder and navigation is a no-op.
pub struct PanelState {
    pub open: bool,
    pub highlighted: usize,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            open: false,
            highlighted: 0,
            scroll_offset: 0,
            visible_rows: 8,
        }
    }
}

impl PanelState {
    /// Open on a fresh result set, highlight on the first row.
    pub fn open_at_top(&mut self) {
        self.open = true;
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    /// Advance the highlight, clamped at the last index.
    pub fn highlight_next(&mut self, total: usize) {
        if !self.open || total == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1).min(total - 1);
        self.ensure_visible(self.highlighted);
    }

    /// Retreat the highlight, clamped at 0.
    pub fn highlight_prev(&mut self) {
        if !self.open {
            return;
        }
        self.highlighted = self.highlighted.saturating_sub(1);
        self.ensure_visible(self.highlighted);
    }

    /// Keep `index` inside the scroll window.
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}
