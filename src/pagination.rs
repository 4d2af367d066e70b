//! Paginator: page slices, page counts and the page-button layout.

use std::ops::RangeInclusive;

use serde::Serialize;

/// Page buttons shown around the current page.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages for `total` items. Never less than 1, so an empty
/// collection still renders as a single (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Items on `page` (1-based), clipped to the collection bounds.
///
/// Returns an empty slice for page 0 or any page past the last one.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    if page == 0 || page > page_count(items.len(), page_size) {
        return &[];
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start.min(end)..end]
}

/// Window of at most `max_visible` page numbers centred on `current`.
///
/// Near either edge the window shifts instead of shrinking, so it holds
/// `min(max_visible, page_count)` pages.
pub fn visible_button_range(
    current: usize,
    page_count: usize,
    max_visible: usize,
) -> RangeInclusive<usize> {
    let page_count = page_count.max(1);
    let max_visible = max_visible.max(1);
    let current = current.clamp(1, page_count);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(page_count);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    start..=end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// Full button layout: the visible window plus the first and last pages,
/// with an ellipsis wherever a gap separates them from the window.
pub fn page_controls(current: usize, page_count: usize, max_visible: usize) -> Vec<PageControl> {
    let window = visible_button_range(current, page_count, max_visible);
    let (start, end) = (*window.start(), *window.end());
    let mut controls = Vec::with_capacity(max_visible + 4);

    if start > 1 {
        controls.push(PageControl::Page(1));
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend(window.map(PageControl::Page));

    if end < page_count {
        if end + 1 < page_count {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page(page_count));
    }

    controls
}

/// Pagination summary for one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub controls: Vec<PageControl>,
}

impl Pagination {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = page_count(total_items, page_size);
        let current_page = current_page.clamp(1, page_count);
        Self {
            current_page,
            page_count,
            page_size,
            total_items,
            controls: page_controls(current_page, page_count, MAX_VISIBLE_PAGES),
        }
    }

    /// A single page needs no controls.
    pub fn is_visible(&self) -> bool {
        self.page_count > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// 1-based ordinal of the first item on this page (0 when empty).
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based ordinal of the last item on this page.
    pub fn last_item(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    /// e.g. "Showing 7-12 of 14 news articles".
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing {}-{} of {} {}",
            self.first_item(),
            self.last_item(),
            self.total_items,
            noun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageControl::{Ellipsis, Page};

    #[test]
    fn page_count_rounds_up_with_minimum_one() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(14, 6), 3);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn fourteen_items_in_pages_of_six() {
        let items: Vec<usize> = (0..14).collect();
        assert_eq!(page_count(items.len(), 6), 3);
        assert_eq!(page_slice(&items, 2, 6), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(page_slice(&items, 3, 6), &[12, 13]);
        assert!(page_slice(&items, 4, 6).is_empty());
        assert!(page_slice(&items, 0, 6).is_empty());
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let items: Vec<u8> = Vec::new();
        assert_eq!(page_count(items.len(), 6), 1);
        assert!(page_slice(&items, 1, 6).is_empty());
    }

    #[test]
    fn slices_reconstruct_collection_exactly() {
        for len in 1..40usize {
            for size in 1..9usize {
                let items: Vec<usize> = (0..len).collect();
                let rebuilt: Vec<usize> = (1..=page_count(len, size))
                    .flat_map(|p| page_slice(&items, p, size).iter().copied())
                    .collect();
                assert_eq!(rebuilt, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn window_shifts_near_edges() {
        assert_eq!(visible_button_range(1, 10, 5), 1..=5);
        assert_eq!(visible_button_range(2, 10, 5), 1..=5);
        assert_eq!(visible_button_range(6, 10, 5), 4..=8);
        assert_eq!(visible_button_range(9, 10, 5), 6..=10);
        assert_eq!(visible_button_range(10, 10, 5), 6..=10);
        assert_eq!(visible_button_range(2, 3, 5), 1..=3);
    }

    #[test]
    fn window_keeps_full_width_when_pages_allow() {
        for count in 1..20usize {
            for current in 1..=count {
                let window = visible_button_range(current, count, 5);
                assert_eq!(window.clone().count(), count.min(5));
                assert!(window.contains(&current));
            }
        }
    }

    #[test]
    fn controls_add_edges_and_ellipses() {
        assert_eq!(
            page_controls(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_controls(10, 10, 5),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_controls(5, 10, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn no_ellipsis_when_edge_is_adjacent() {
        assert_eq!(
            page_controls(4, 7, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
        assert_eq!(page_controls(1, 3, 5), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn pagination_summary_and_flags() {
        let pagination = Pagination::new(2, 6, 14);
        assert!(pagination.is_visible());
        assert!(pagination.has_previous());
        assert!(pagination.has_next());
        assert_eq!(pagination.summary("news articles"), "Showing 7-12 of 14 news articles");

        let last = Pagination::new(3, 6, 14);
        assert!(!last.has_next());
        assert_eq!(last.summary("news articles"), "Showing 13-14 of 14 news articles");

        let single = Pagination::new(1, 6, 4);
        assert!(!single.is_visible());
        assert_eq!(Pagination::new(1, 6, 0).first_item(), 0);
    }
}
