//! Pagination: offset/limit slicing and the paging metadata reported with
//! each page.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Paging metadata for one materialized page.
///
/// `total_items` is whatever count the issuing operation reports — for most
/// paged reads that is the full unfiltered collection, for search it is the
/// keyword-filtered count (see the query service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    pub total_items: u64,
    pub item_per_page: u32,
    pub current_page: u32,
}

impl PagingInfo {
    pub fn new(total_items: u64, item_per_page: u32, current_page: u32) -> Self {
        Self {
            total_items,
            item_per_page,
            current_page,
        }
    }
}

/// One page of products plus its paging metadata. Built fresh per query,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub paging: PagingInfo,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, paging: PagingInfo) -> Self {
        Self { products, paging }
    }
}

/// Slice one page out of an ordered sequence.
///
/// Skips `(page - 1) * page_size` elements and takes at most `page_size`.
/// Pages are 1-based; `page < 1` or `page_size < 1` clamps to an empty
/// slice rather than erroring. Returns the slice and the number of
/// elements skipped.
pub fn paginate<T>(
    items: impl IntoIterator<Item = T>,
    page: u32,
    page_size: u32,
) -> (Vec<T>, usize) {
    if page < 1 || page_size < 1 {
        return (Vec::new(), 0);
    }

    let skip = (page as usize - 1) * page_size as usize;
    let slice = items
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .collect();
    (slice, skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_page_starts_at_zero() {
        let (slice, skipped) = paginate(0..10, 1, 3);
        assert_eq!(slice, vec![0, 1, 2]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn later_pages_skip_ahead() {
        let (slice, skipped) = paginate(0..10, 3, 3);
        assert_eq!(slice, vec![6, 7, 8]);
        assert_eq!(skipped, 6);
    }

    #[test]
    fn final_page_may_be_short() {
        let (slice, _) = paginate(0..10, 4, 3);
        assert_eq!(slice, vec![9]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let (slice, skipped) = paginate(0..10, 5, 3);
        assert!(slice.is_empty());
        assert_eq!(skipped, 12);
    }

    #[test]
    fn invalid_page_or_size_clamps_to_empty() {
        let (slice, skipped) = paginate(0..10, 0, 3);
        assert!(slice.is_empty());
        assert_eq!(skipped, 0);

        let (slice, _) = paginate(0..10, 1, 0);
        assert!(slice.is_empty());
    }

    proptest! {
        /// Concatenating every page in order reconstructs the sequence
        /// exactly once per element: no duplicates, no gaps.
        #[test]
        fn pages_partition_the_sequence(len in 0usize..200, page_size in 1u32..20) {
            let items: Vec<usize> = (0..len).collect();
            let page_count = len.div_ceil(page_size as usize);

            let mut rebuilt = Vec::new();
            for page in 1..=(page_count.max(1) as u32) {
                let (slice, skipped) = paginate(items.clone(), page, page_size);
                prop_assert!(slice.len() <= page_size as usize);
                prop_assert_eq!(skipped, (page as usize - 1) * page_size as usize);
                rebuilt.extend(slice);
            }
            prop_assert_eq!(rebuilt, items);
        }
    }
}
