// crates/countrydex-core/src/page.rs
use serde::Serialize;

/// Countries shown per page.
pub const PAGE_SIZE: usize = 12;

/// The 1-based `page` of `items`, `page_size` items long.
///
/// Returns the half-open slice `[(page-1)*page_size, page*page_size)` clipped
/// to the list. Page `0`, pages past the end and a zero `page_size` all give
/// an empty slice.
///
/// ```rust
/// use countrydex_core::page::paginate;
///
/// let items: Vec<u32> = (1..=30).collect();
/// assert_eq!(paginate(&items, 1, 12), &items[..12]);
/// assert_eq!(paginate(&items, 3, 12), &items[24..]);
/// assert!(paginate(&items, 4, 12).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Navigation bounds for one page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageInfo {
    /// `has_next` is computed from the exact page count
    /// (`ceil(total_items / page_size)`), not from whether the current page
    /// happens to be full.
    pub fn new(total_items: usize, page: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        PageInfo {
            page,
            page_size,
            total_items,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}
