//! Page slicing over id-ordered collections.
//!
//! # Invariants
//! - Pages are contiguous, non-overlapping and keep input order.
//! - Only an empty page over a non-empty collection is out of range; an empty
//!   collection yields an empty page for any page number.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    /// Collection length before slicing.
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total_items`; zero for an empty collection.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.page_size as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// Page numbers start at 1.
    ZeroPage,
    ZeroPageSize,
    /// Requested page lies past the end of a non-empty collection.
    OutOfRange { page: u32, total_items: usize },
}

impl Display for PaginationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPage => write!(f, "page numbers start at 1"),
            Self::ZeroPageSize => write!(f, "page size must be positive"),
            Self::OutOfRange { page, total_items } => {
                write!(f, "page {page} is past the end of {total_items} items")
            }
        }
    }
}

impl Error for PaginationError {}

/// Returns the `page`-th slice of `items` with `page_size` items per page.
///
/// `items` must already be sorted ascending by id.
///
/// # Errors
/// - `ZeroPage` / `ZeroPageSize` for non-positive inputs.
/// - `OutOfRange` when the page is empty but `items` is not.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Result<Page<T>, PaginationError> {
    if page == 0 {
        return Err(PaginationError::ZeroPage);
    }
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }

    let total_items = items.len();
    let start = (page as usize - 1).saturating_mul(page_size as usize);

    if start >= total_items && total_items > 0 {
        return Err(PaginationError::OutOfRange { page, total_items });
    }

    let items = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Ok(Page {
        items,
        page,
        page_size,
        total_items,
    })
}

#[cfg(test)]
mod tests {
    use super::{paginate, PaginationError};

    #[test]
    fn second_page_of_twelve_holds_the_tail() {
        let ids: Vec<i64> = (1..=12).collect();
        let page = paginate(ids, 2, 10).unwrap();
        assert_eq!(page.items, vec![11, 12]);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn pages_partition_the_collection_in_order() {
        for len in 1..=23_i64 {
            for size in 1..=7_u32 {
                let ids: Vec<i64> = (1..=len).collect();
                let pages = ids.len().div_ceil(size as usize) as u32;
                let mut joined = Vec::new();
                for page in 1..=pages {
                    let chunk = paginate(ids.clone(), page, size).unwrap();
                    assert!(!chunk.items.is_empty());
                    assert!(chunk.items.len() <= size as usize);
                    joined.extend(chunk.items);
                }
                assert_eq!(joined, ids, "len={len} size={size}");
                assert_eq!(
                    paginate(ids.clone(), pages + 1, size).unwrap_err(),
                    PaginationError::OutOfRange {
                        page: pages + 1,
                        total_items: len as usize
                    }
                );
            }
        }
    }

    #[test]
    fn empty_collection_yields_empty_page_not_error() {
        let page = paginate(Vec::<i64>::new(), 1, 10).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);

        let later = paginate(Vec::<i64>::new(), 3, 10).unwrap();
        assert!(later.is_empty());
    }

    #[test]
    fn zero_inputs_are_rejected() {
        assert_eq!(
            paginate(vec![1], 0, 10).unwrap_err(),
            PaginationError::ZeroPage
        );
        assert_eq!(
            paginate(vec![1], 1, 0).unwrap_err(),
            PaginationError::ZeroPageSize
        );
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let err = paginate(vec![1, 2, 3], u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, PaginationError::OutOfRange { .. }));
    }
}
