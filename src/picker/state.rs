//! Icon picker state.

use crate::icons::{Catalog, Icon};

use super::layout::PickerLayout;
use super::traits::Paginated;

/// Keyboard cursor movement inside the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// View state of one mounted icon picker.
///
/// The catalog and layout are fixed at construction. Only user interaction
/// mutates the open flag, the selection and the page.
#[derive(Debug, Clone)]
pub struct IconPicker {
    catalog: Catalog,
    layout: PickerLayout,
    is_open: bool,
    selected_icon: Option<Icon>,
    current_page: usize,
    /// Index into the current page's slice
    cursor: usize,
    /// First visible grid row when the page is taller than the panel
    grid_scroll: usize,
    /// Grid rows that fit in the panel
    grid_viewport: usize,
}

impl IconPicker {
    pub fn new(catalog: Catalog, layout: PickerLayout) -> Self {
        Self {
            catalog,
            layout,
            is_open: false,
            selected_icon: None,
            current_page: 0,
            cursor: 0,
            grid_scroll: 0,
            grid_viewport: layout.rows_in_one_page(),
        }
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_icon(&self) -> Option<Icon> {
        self.selected_icon
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn grid_scroll(&self) -> usize {
        self.grid_scroll
    }

    /// Open or close the picker.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Select `icon` and close the picker.
    pub fn select(&mut self, icon: Icon) {
        self.selected_icon = Some(icon);
        self.is_open = false;
    }

    /// Select the icon under the keyboard cursor, if any.
    pub fn select_at_cursor(&mut self) -> Option<Icon> {
        let icon = self.page_items().get(self.cursor).copied()?;
        self.select(icon);
        Some(icon)
    }

    /// Number of grid rows the current page occupies.
    pub fn page_rows(&self) -> usize {
        self.page_items()
            .len()
            .div_ceil(self.layout.columns_in_one_page())
    }

    /// Move the keyboard cursor, clamped to the current page.
    pub fn move_cursor(&mut self, direction: CursorMove) {
        let visible = self.page_items().len();
        if visible == 0 {
            return;
        }
        let columns = self.layout.columns_in_one_page();
        let target = match direction {
            CursorMove::Left => self.cursor.checked_sub(1),
            CursorMove::Right => Some(self.cursor + 1),
            CursorMove::Up => self.cursor.checked_sub(columns),
            CursorMove::Down => Some(self.cursor + columns),
        };
        if let Some(target) = target.filter(|t| *t < visible) {
            self.cursor = target;
            self.scroll_to_cursor();
        }
    }

    /// Record how many grid rows fit in the panel.
    ///
    /// Called by the renderer once the panel size is known.
    pub fn set_grid_viewport(&mut self, rows: usize) {
        self.grid_viewport = rows.max(1);
        self.grid_scroll = self.grid_scroll.min(self.max_grid_scroll());
        self.scroll_to_cursor();
    }

    /// Scroll the grid by `delta` rows.
    ///
    /// The cursor is dragged along so it stays on a visible row.
    pub fn scroll_grid(&mut self, delta: i32) {
        let next = self.grid_scroll.saturating_add_signed(delta as isize);
        self.grid_scroll = next.min(self.max_grid_scroll());

        let columns = self.layout.columns_in_one_page();
        let row = self.cursor / columns;
        let last_visible = self.grid_scroll + self.grid_viewport - 1;
        let clamped_row = row.clamp(self.grid_scroll, last_visible);
        if clamped_row != row {
            let target = clamped_row * columns + self.cursor % columns;
            self.cursor = target.min(self.page_items().len().saturating_sub(1));
        }
    }

    fn max_grid_scroll(&self) -> usize {
        self.page_rows().saturating_sub(self.grid_viewport)
    }

    fn scroll_to_cursor(&mut self) {
        let row = self.cursor / self.layout.columns_in_one_page();
        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + self.grid_viewport {
            self.grid_scroll = row + 1 - self.grid_viewport;
        }
    }
}

impl Paginated for IconPicker {
    type Item = Icon;

    fn items(&self) -> &[Icon] {
        self.catalog.as_slice()
    }

    fn page_size(&self) -> usize {
        self.layout.page_size()
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.cursor = 0;
        self.grid_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: usize, columns: usize) -> PickerLayout {
        PickerLayout::new(rows, columns, 48, 48).unwrap()
    }

    fn picker(len: usize, rows: usize, columns: usize) -> IconPicker {
        let icons = Icon::ALL.iter().copied().cycle().take(len).collect();
        IconPicker::new(Catalog::new(icons), layout(rows, columns))
    }

    #[test]
    fn test_initial_state() {
        let picker = IconPicker::new(Catalog::bundled(), layout(6, 6));
        assert!(!picker.is_open());
        assert_eq!(picker.selected_icon(), None);
        assert_eq!(picker.current_page(), 0);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut picker = picker(100, 3, 3);
        picker.select(Icon::Star);
        picker.next_page();

        picker.toggle();
        assert!(picker.is_open());
        picker.toggle();
        assert!(!picker.is_open());
        assert_eq!(picker.selected_icon(), Some(Icon::Star));
        assert_eq!(picker.current_page(), 1);
    }

    #[test]
    fn test_select_closes_picker() {
        let mut picker = picker(100, 3, 3);
        picker.toggle();
        picker.next_page();
        let icon = picker.page_items()[4];

        picker.select(icon);
        assert_eq!(picker.selected_icon(), Some(icon));
        assert!(!picker.is_open());

        // Selecting while closed still lands closed
        picker.select(Icon::Home);
        assert!(!picker.is_open());
        assert_eq!(picker.selected_icon(), Some(Icon::Home));
    }

    #[test]
    fn test_reopen_preserves_page() {
        let mut picker = IconPicker::new(Catalog::bundled(), layout(6, 6));
        picker.toggle();
        picker.next_page();
        picker.next_page();
        picker.select(Icon::Home);

        picker.toggle();
        assert!(picker.is_open());
        assert_eq!(picker.current_page(), 2);
        assert_eq!(picker.selected_icon(), Some(Icon::Home));
    }

    #[test]
    fn test_three_hundred_icons_six_by_six() {
        let mut picker = picker(300, 6, 6);
        assert_eq!(picker.page_size(), 36);
        assert_eq!(picker.total_pages(), 9);
        assert!(!picker.has_prev_page());

        assert!(picker.change_page(8));
        assert_eq!(picker.page_items().len(), 12);
        assert_eq!(picker.page_items(), &picker.items()[288..300]);
        assert!(!picker.has_next_page());
        assert!(!picker.next_page());
        assert_eq!(picker.current_page(), 8);
    }

    #[test]
    fn test_empty_catalog() {
        let mut picker = IconPicker::new(Catalog::new(vec![]), layout(6, 6));
        assert_eq!(picker.total_pages(), 1);
        assert!(picker.page_items().is_empty());
        assert!(!picker.next_page());
        assert!(!picker.prev_page());
        picker.move_cursor(CursorMove::Right);
        assert_eq!(picker.cursor(), 0);
        assert_eq!(picker.select_at_cursor(), None);
        assert_eq!(picker.selected_icon(), None);
    }

    #[test]
    fn test_cursor_moves_within_page() {
        let mut picker = picker(10, 2, 3);
        // Page 0 holds six icons in two rows of three
        picker.move_cursor(CursorMove::Left);
        assert_eq!(picker.cursor(), 0);
        picker.move_cursor(CursorMove::Down);
        assert_eq!(picker.cursor(), 3);
        picker.move_cursor(CursorMove::Down);
        assert_eq!(picker.cursor(), 3);
        picker.move_cursor(CursorMove::Right);
        picker.move_cursor(CursorMove::Right);
        picker.move_cursor(CursorMove::Right);
        assert_eq!(picker.cursor(), 5);
        picker.move_cursor(CursorMove::Up);
        assert_eq!(picker.cursor(), 2);

        // Last page has four icons; the cursor resets and stays inside
        picker.next_page();
        assert_eq!(picker.cursor(), 0);
        picker.move_cursor(CursorMove::Down);
        assert_eq!(picker.cursor(), 3);
        picker.move_cursor(CursorMove::Right);
        assert_eq!(picker.cursor(), 3);
    }

    #[test]
    fn test_select_at_cursor() {
        let mut picker = picker(10, 2, 3);
        picker.toggle();
        picker.next_page();
        picker.move_cursor(CursorMove::Right);
        let expected = picker.items()[7];
        assert_eq!(picker.select_at_cursor(), Some(expected));
        assert_eq!(picker.selected_icon(), Some(expected));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_grid_scroll_follows_cursor() {
        let mut picker = picker(36, 6, 6);
        picker.set_grid_viewport(2);
        assert_eq!(picker.grid_scroll(), 0);

        for _ in 0..4 {
            picker.move_cursor(CursorMove::Down);
        }
        assert_eq!(picker.cursor(), 24);
        assert_eq!(picker.grid_scroll(), 3);

        picker.move_cursor(CursorMove::Up);
        picker.move_cursor(CursorMove::Up);
        picker.move_cursor(CursorMove::Up);
        assert_eq!(picker.grid_scroll(), 1);
    }

    #[test]
    fn test_scroll_grid_drags_cursor() {
        let mut picker = picker(36, 6, 6);
        picker.set_grid_viewport(2);
        picker.move_cursor(CursorMove::Right);

        picker.scroll_grid(10);
        assert_eq!(picker.grid_scroll(), 4);
        assert_eq!(picker.cursor(), 25);

        picker.scroll_grid(-10);
        assert_eq!(picker.grid_scroll(), 0);
        assert_eq!(picker.cursor(), 7);
    }

    #[test]
    fn test_page_change_resets_cursor_and_scroll() {
        let mut picker = picker(72, 6, 6);
        picker.set_grid_viewport(2);
        picker.scroll_grid(3);
        picker.next_page();
        assert_eq!(picker.cursor(), 0);
        assert_eq!(picker.grid_scroll(), 0);
    }
}
