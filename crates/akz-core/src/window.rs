/// Whether the last search produced anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Empty,
    HasResults,
}

/// Bounded, advanceable view over a ranked candidate list.
///
/// Invariant: `cursor <= total`. The visible slice is `[cursor, min(cursor + page_size, total))`.
#[derive(Debug, Clone)]
pub struct ResultWindow {
    ranked: Vec<usize>,
    cursor: usize,
    page_size: usize,
}

impl ResultWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            ranked: Vec::new(),
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the ranked list and rewind to the first page
    pub fn reset(&mut self, ranked: Vec<usize>) -> &[usize] {
        self.ranked = ranked;
        self.cursor = 0;
        self.visible()
    }

    /// Move the cursor by `delta`, clamped to `[0, total]`. Never re-ranks.
    pub fn advance(&mut self, delta: isize) -> &[usize] {
        let moved = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta.unsigned_abs())
        };
        self.cursor = moved.min(self.total());
        self.visible()
    }

    pub fn visible(&self) -> &[usize] {
        let end = self.cursor.saturating_add(self.page_size).min(self.total());
        &self.ranked[self.cursor..end]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.ranked.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> WindowState {
        if self.ranked.is_empty() {
            WindowState::Empty
        } else {
            WindowState::HasResults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_empty() {
        let window = ResultWindow::new(50);
        assert_eq!(window.state(), WindowState::Empty);
        assert_eq!(window.total(), 0);
        assert!(window.visible().is_empty());
    }

    #[test]
    fn test_paging_through_120() {
        let mut window = ResultWindow::new(50);
        assert_eq!(window.reset((0..120).collect()).len(), 50);
        assert_eq!(window.state(), WindowState::HasResults);

        let page = window.advance(50).to_vec();
        assert_eq!(page, (50..100).collect::<Vec<_>>());

        let page = window.advance(50).to_vec();
        assert_eq!(page, (100..120).collect::<Vec<_>>());
        assert_eq!(window.cursor(), 100);

        assert!(window.advance(50).is_empty());
        assert_eq!(window.cursor(), 120);
    }

    #[test]
    fn test_advance_clamps() {
        let mut window = ResultWindow::new(10);
        window.reset((0..25).collect());

        window.advance(isize::MAX);
        assert_eq!(window.cursor(), 25);

        window.advance(isize::MIN);
        assert_eq!(window.cursor(), 0);

        window.advance(-5);
        assert_eq!(window.cursor(), 0);
        assert_eq!(window.visible(), &(0..10).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_retract() {
        let mut window = ResultWindow::new(10);
        window.reset((0..25).collect());
        window.advance(20);
        assert_eq!(window.visible(), &[20, 21, 22, 23, 24]);
        window.advance(-10);
        assert_eq!(window.cursor(), 10);
        assert_eq!(window.visible().len(), 10);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut window = ResultWindow::new(10);
        window.reset((0..25).collect());
        window.advance(20);
        window.reset(vec![7, 3]);
        assert_eq!(window.cursor(), 0);
        assert_eq!(window.visible(), &[7, 3]);

        window.reset(Vec::new());
        assert_eq!(window.state(), WindowState::Empty);
    }

    #[test]
    fn test_zero_page_size_still_advances() {
        let window = ResultWindow::new(0);
        assert_eq!(window.page_size(), 1);
    }
}
