/// Page size of the news, places and history listings.
pub const LISTING_PAGE_SIZE: usize = 5;

/// Page size of the wishlist.
pub const WISHLIST_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// 1-based page number.
    pub number: usize,
    pub page_count: usize,
    pub item_count: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count
    }
}

/// Slices an ordered collection into a fixed-size page.
///
/// The page token is forgiving: a missing or non-numeric token
/// selects the first page and a numeric token outside the valid
/// range selects the last page. Invalid input never fails, it
/// degrades to a valid page.
pub fn paginate<T>(items: Vec<T>, page_size: usize, page_token: Option<&str>) -> Page<T> {
    debug_assert!(page_size > 0);
    let item_count = items.len();
    let page_count = item_count.div_ceil(page_size).max(1);
    let number = match page_token.map(str::trim).filter(|t| !t.is_empty()) {
        None => 1,
        Some(token) => match token.parse::<i64>() {
            Err(_) => 1,
            Ok(n) if n >= 1 && n as usize <= page_count => n as usize,
            Ok(_) => page_count,
        },
    };
    let items = items
        .into_iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .collect();
    Page {
        number,
        page_count,
        item_count,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn missing_token_selects_the_first_page() {
        let page = paginate(numbers(12), 5, None);
        assert_eq!(page.number, 1);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.item_count, 12);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn non_numeric_token_selects_the_first_page() {
        let page = paginate(numbers(12), 5, Some("abc"));
        assert_eq!(page.number, 1);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn token_beyond_the_last_page_selects_the_last_page() {
        let page = paginate(numbers(12), 5, Some("99"));
        assert_eq!(page.number, 3);
        assert_eq!(page.items, vec![11, 12]);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn token_below_one_selects_the_last_page() {
        let page = paginate(numbers(12), 5, Some("0"));
        assert_eq!(page.number, 3);
        let page = paginate(numbers(12), 5, Some("-3"));
        assert_eq!(page.number, 3);
    }

    #[test]
    fn valid_token_selects_the_requested_page() {
        let page = paginate(numbers(12), 5, Some("2"));
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn empty_collection_yields_a_single_empty_page() {
        let page = paginate(Vec::<usize>::new(), 5, Some("7"));
        assert_eq!(page.number, 1);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.item_count, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let page = paginate(numbers(10), 5, Some("2"));
        assert_eq!(page.page_count, 2);
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
    }
}
