//! Client-side paging over an already filtered list.

/// Current page of a list view. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Every filter change starts over from the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, total: usize) {
        if self.current_page < total_pages(total, self.page_size) {
            self.current_page += 1;
        }
    }

    /// Slice for `total` items, storing the clamped page back.
    pub fn apply(&mut self, total: usize) -> PageSlice {
        let slice = paginate(total, self.current_page, self.page_size);
        self.current_page = slice.page;
        slice
    }
}

/// `max(1, ceil(total / page_size))`
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total.div_ceil(size).max(1)
}

/// Result of paging `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Clamped current page
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    /// Index of the first item on the page
    pub start: usize,
    /// One past the last item on the page
    pub end: usize,
}

impl PageSlice {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end
    }

    /// "Showing 11-20 of 34", or "Showing 0 of 0" for an empty list.
    pub fn showing_label(&self) -> String {
        if self.total == 0 {
            "Showing 0 of 0".to_string()
        } else {
            format!("Showing {}-{} of {}", self.start + 1, self.end, self.total)
        }
    }

    /// "Page 2 of 3", or "Page 0 of 0" for an empty list.
    pub fn page_label(&self) -> String {
        if self.total == 0 {
            "Page 0 of 0".to_string()
        } else {
            format!("Page {} of {}", self.page, self.total_pages)
        }
    }
}

/// Clamp `page` into `[1, total_pages]` and compute the item range.
pub fn paginate(total: usize, page: usize, page_size: usize) -> PageSlice {
    let size = page_size.max(1);
    let total_pages = total_pages(total, size);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * size).min(total);
    let end = (start + size).min(total);

    PageSlice {
        page,
        total_pages,
        total,
        start,
        end,
    }
}

/// Items of one page plus the page count.
pub fn page_items<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let slice = paginate(items.len(), page, page_size);
    (&items[slice.start..slice.end], slice.total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn test_page_is_clamped() {
        let slice = paginate(25, 9, 10);
        assert_eq!(slice.page, 3);
        assert_eq!((slice.start, slice.end), (20, 25));
        assert!(slice.has_prev());
        assert!(!slice.has_next());

        let slice = paginate(25, 0, 10);
        assert_eq!(slice.page, 1);
        assert!(!slice.has_prev());
        assert!(slice.has_next());
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let slice = paginate(0, 4, 12);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.total_pages, 1);
        assert_eq!((slice.start, slice.end), (0, 0));
        assert!(!slice.has_next());
        assert_eq!(slice.showing_label(), "Showing 0 of 0");
        assert_eq!(slice.page_label(), "Page 0 of 0");
    }

    #[test]
    fn test_labels() {
        let slice = paginate(34, 2, 10);
        assert_eq!(slice.showing_label(), "Showing 11-20 of 34");
        assert_eq!(slice.page_label(), "Page 2 of 4");
    }

    #[test]
    fn test_page_items() {
        let items: Vec<u32> = (1..=23).collect();
        let (page, pages) = page_items(&items, 3, 10);
        assert_eq!(page, &[21, 22, 23]);
        assert_eq!(pages, 3);
    }

    #[test]
    fn test_page_state_navigation_and_reset() {
        let mut state = PageState::new(10);
        state.next(25);
        state.next(25);
        state.next(25);
        assert_eq!(state.current_page, 3);

        // Filter shrank the list: apply clamps the stored page.
        let slice = state.apply(12);
        assert_eq!(slice.page, 2);
        assert_eq!(state.current_page, 2);

        state.prev();
        state.prev();
        assert_eq!(state.current_page, 1);

        state.next(25);
        state.reset();
        assert_eq!(state.current_page, 1);
    }
}
