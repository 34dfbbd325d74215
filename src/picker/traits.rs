//! Paginated trait definition
//!
//! A generic trait for grid components that show a fixed-size slice of a
//! longer item list.

use std::ops::Range;

/// Number of pages needed to show `len` items `page_size` at a time.
///
/// An empty list still occupies one (empty) page. `page_size` must be non-zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Index range of `page` within a list of `len` items.
///
/// The final page holds the remainder; pages past the end are empty.
pub fn page_bounds(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// A generic paging trait for grid selection
///
/// Implementors only store the current page; bounds, slicing and clamped
/// navigation come from the default methods.
///
/// # Example
///
/// ```ignore
/// struct MyGrid {
///     items: Vec<String>,
///     page: usize,
/// }
///
/// impl Paginated for MyGrid {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn page_size(&self) -> usize {
///         12
///     }
///
///     fn current_page(&self) -> usize {
///         self.page
///     }
///
///     fn set_current_page(&mut self, page: usize) {
///         self.page = page;
///     }
/// }
/// ```
pub trait Paginated {
    /// The type of items being paged
    type Item;

    /// Get the full item list
    fn items(&self) -> &[Self::Item];

    /// Items per page (always non-zero)
    fn page_size(&self) -> usize;

    /// Get the current page index
    fn current_page(&self) -> usize;

    /// Set the current page index (already validated by the caller)
    fn set_current_page(&mut self, page: usize);

    /// Total number of pages, at least one
    fn total_pages(&self) -> usize {
        total_pages(self.items().len(), self.page_size())
    }

    /// Index of the last page
    fn last_page(&self) -> usize {
        self.total_pages() - 1
    }

    /// Items visible on the current page
    fn page_items(&self) -> &[Self::Item] {
        let range = page_bounds(self.items().len(), self.page_size(), self.current_page());
        &self.items()[range]
    }

    /// Whether the previous-page control is active
    fn has_prev_page(&self) -> bool {
        self.current_page() > 0
    }

    /// Whether the next-page control is active
    fn has_next_page(&self) -> bool {
        self.current_page() < self.last_page()
    }

    /// Move by `offset` pages.
    ///
    /// Offsets that would leave the valid range are ignored. Returns whether
    /// the page changed.
    fn change_page(&mut self, offset: isize) -> bool {
        let Some(target) = self.current_page().checked_add_signed(offset) else {
            return false;
        };
        if offset == 0 || target > self.last_page() {
            return false;
        }
        self.set_current_page(target);
        true
    }

    /// Go to the next page (inert on the last page)
    fn next_page(&mut self) -> bool {
        self.change_page(1)
    }

    /// Go to the previous page (inert on the first page)
    fn prev_page(&mut self) -> bool {
        self.change_page(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid {
        items: Vec<usize>,
        page_size: usize,
        page: usize,
    }

    impl Grid {
        fn new(len: usize, page_size: usize) -> Self {
            Self {
                items: (0..len).collect(),
                page_size,
                page: 0,
            }
        }
    }

    impl Paginated for Grid {
        type Item = usize;

        fn items(&self) -> &[usize] {
            &self.items
        }

        fn page_size(&self) -> usize {
            self.page_size
        }

        fn current_page(&self) -> usize {
            self.page
        }

        fn set_current_page(&mut self, page: usize) {
            self.page = page;
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(300, 36), 9);
        assert_eq!(total_pages(36, 36), 1);
        assert_eq!(total_pages(37, 36), 2);
        assert_eq!(total_pages(1, 36), 1);
    }

    #[test]
    fn test_empty_list_is_one_empty_page() {
        let grid = Grid::new(0, 4);
        assert_eq!(grid.total_pages(), 1);
        assert!(grid.page_items().is_empty());
        assert!(!grid.has_prev_page());
        assert!(!grid.has_next_page());
    }

    #[test]
    fn test_last_page_holds_remainder() {
        for len in 1..=50 {
            for page_size in 1..=9 {
                let pages = total_pages(len, page_size);
                let last = page_bounds(len, page_size, pages - 1);
                let expected = len - page_size * (pages - 1);
                assert_eq!(last.len(), expected);
                assert!((1..=page_size).contains(&last.len()));
            }
        }
    }

    #[test]
    fn test_six_by_six_over_three_hundred() {
        let mut grid = Grid::new(300, 36);
        assert_eq!(grid.total_pages(), 9);
        assert_eq!(grid.page_items(), &grid.items[0..36]);
        assert!(!grid.has_prev_page());
        assert!(grid.has_next_page());

        while grid.next_page() {}
        assert_eq!(grid.current_page(), 8);
        assert_eq!(grid.page_items().len(), 12);
        assert_eq!(grid.page_items(), &grid.items[288..300]);
        assert!(!grid.has_next_page());
        assert!(grid.has_prev_page());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut grid = Grid::new(10, 4);
        assert!(!grid.prev_page());
        assert_eq!(grid.current_page(), 0);

        assert!(grid.change_page(2));
        assert_eq!(grid.current_page(), 2);
        assert!(!grid.next_page());
        assert!(!grid.change_page(5));
        assert!(!grid.change_page(-3));
        assert_eq!(grid.current_page(), 2);
    }
}
