use serde::Serialize;

/// One page of an ordered sequence
///
/// `prev` and `next` are not clamped: a click on "previous" from page 1 asks
/// for page 0, which the next request clamps back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub number: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn prev(&self) -> i64 {
        self.number - 1
    }

    pub fn next(&self) -> i64 {
        self.number + 1
    }
}

/// Slice `items` into pages of `per_page` and return the requested one,
/// clamped into `[1, total_pages]`. An empty sequence still has one (empty)
/// page, and `per_page` of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], requested: i64, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1) as i64;
    let number = requested.clamp(1, total_pages);

    let start = (number as usize - 1) * per_page;
    let end = (start + per_page).min(items.len());
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        number,
        total_pages,
        items,
    }
}
