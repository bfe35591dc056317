use std::fmt;

/// Rows shown per page across the dashboard's tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Total page count for `count` records, never less than one page so an
/// empty table still has somewhere to land.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps the current page after the collection shrinks, so the view never
/// points past the last page.
pub fn clamp_page(current: usize, total_pages: usize) -> usize {
    current.min(total_pages).max(1)
}

/// The records visible on `page` (1-based), bounds saturated, input order
/// preserved.
pub fn page_slice<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Normalizes a requested page number: truncates toward zero, clamps into
/// `[1, total_pages]`. Non-finite input lands on the first page.
pub fn go_to_page(requested: f64, total_pages: usize) -> usize {
    let total = total_pages.max(1);
    if !requested.is_finite() {
        return 1;
    }

    let truncated = requested.trunc();
    if truncated < 1.0 {
        1
    } else if truncated >= total as f64 {
        total
    } else {
        truncated as usize
    }
}

/// One marker in the compact pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Markers for the pagination strip: every page when five or fewer fit,
/// otherwise the first two and last two around an ellipsis. The compaction
/// is fixed; there is no window around the current page.
pub fn page_items(total_pages: usize) -> PageItems {
    PageItems {
        total: total_pages.max(1),
        pos: 0,
    }
}

/// Iterator over the pagination strip, restartable via `Clone`.
#[derive(Debug, Clone)]
pub struct PageItems {
    total: usize,
    pos: usize,
}

impl Iterator for PageItems {
    type Item = PageItem;

    fn next(&mut self) -> Option<PageItem> {
        if self.total <= 5 {
            if self.pos < self.total {
                self.pos += 1;
                return Some(PageItem::Page(self.pos));
            }
            return None;
        }

        let item = match self.pos {
            0 => PageItem::Page(1),
            1 => PageItem::Page(2),
            2 => PageItem::Ellipsis,
            3 => PageItem::Page(self.total - 1),
            4 => PageItem::Page(self.total),
            _ => return None,
        };
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.total <= 5 { self.total } else { 5 };
        let remaining = len.saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageItems {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamp_page_keeps_view_in_range() {
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn page_slice_saturates_bounds() {
        let records: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&records, 1, 10), &records[0..10]);
        assert_eq!(page_slice(&records, 3, 10), &records[20..25]);
        assert_eq!(page_slice(&records, 9, 10), &[] as &[u32]);
        assert_eq!(page_slice(&records[..0], 1, 10), &[] as &[u32]);
    }

    #[test]
    fn go_to_page_truncates_and_clamps() {
        assert_eq!(go_to_page(4.9, 10), 4);
        assert_eq!(go_to_page(-3.0, 10), 1);
        assert_eq!(go_to_page(999.0, 10), 10);
        assert_eq!(go_to_page(f64::NAN, 10), 1);
        assert_eq!(go_to_page(1.0, 0), 1);
    }

    #[test]
    fn short_strips_enumerate_every_page() {
        let items: Vec<PageItem> = page_items(3).collect();
        assert_eq!(
            items,
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
    }

    #[test]
    fn long_strips_compact_to_the_extremes() {
        let items: Vec<PageItem> = page_items(7).collect();
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Ellipsis,
                PageItem::Page(6),
                PageItem::Page(7),
            ]
        );
    }

    #[test]
    fn strip_iterator_restarts_from_a_clone() {
        let strip = page_items(7);
        let first: Vec<PageItem> = strip.clone().collect();
        let second: Vec<PageItem> = strip.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn strip_renders_ellipsis_between_extremes() {
        let rendered: Vec<String> = page_items(7).map(|item| item.to_string()).collect();
        assert_eq!(rendered, vec!["1", "2", "...", "6", "7"]);
    }
}
