//! Page arithmetic.
//!
//! A page size of zero is treated as one everywhere; sizes and indices are
//! clamped, never rejected.

use std::ops::Range;

/// Number of pages needed for `len` items. Zero items make zero pages.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(effective_size(page_size))
}

/// Page count for display: never less than one.
#[must_use]
pub const fn display_total_pages(len: usize, page_size: usize) -> usize {
    let total = total_pages(len, page_size);
    if total == 0 {
        1
    } else {
        total
    }
}

/// Index range of page `page_index`, clamped to `len`.
#[must_use]
pub fn page_range(len: usize, page_size: usize, page_index: usize) -> Range<usize> {
    let size = effective_size(page_size);
    let start = page_index.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// The slice of `items` on page `page_index`.
#[must_use]
pub fn page<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    &items[page_range(items.len(), page_size, page_index)]
}

/// Every page of `items`, in order.
pub fn pages<T>(items: &[T], page_size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(effective_size(page_size))
}

/// Clamp a page index into `[0, total_pages - 1]` (zero when there are no pages).
#[must_use]
pub const fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    if page_index > last {
        last
    } else {
        page_index
    }
}

const fn effective_size(page_size: usize) -> usize {
    if page_size == 0 {
        1
    } else {
        page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 2), 3);
    }

    #[test]
    fn test_display_total_pages_clamps_empty() {
        assert_eq!(display_total_pages(0, 10), 1);
        assert_eq!(display_total_pages(21, 10), 3);
    }

    #[test]
    fn test_zero_page_size_is_one() {
        assert_eq!(total_pages(3, 0), 3);
        assert_eq!(page_range(3, 0, 1), 1..2);
    }

    #[test]
    fn test_page_lengths_two_two_one() {
        let items = [1, 2, 3, 4, 5];
        let lengths: Vec<usize> = pages(&items, 2).map(<[i32]>::len).collect();
        assert_eq!(lengths, vec![2, 2, 1]);
        assert_eq!(page(&items, 2, 2), &[5]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items = [1, 2, 3];
        assert!(page(&items, 2, 5).is_empty());
        assert_eq!(page_range(3, 2, usize::MAX), 3..3);
    }

    #[test]
    fn test_clamp_page_index() {
        assert_eq!(clamp_page_index(7, 3), 2);
        assert_eq!(clamp_page_index(1, 3), 1);
        assert_eq!(clamp_page_index(4, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_pages_partition(len in 0usize..200, size in 1usize..30) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, size);
            let mut joined = Vec::new();
            for index in 0..total {
                let p = page(&items, size, index);
                prop_assert!(!p.is_empty());
                prop_assert!(p.len() <= size);
                joined.extend_from_slice(p);
            }
            prop_assert_eq!(joined, items);
        }
    }
}
