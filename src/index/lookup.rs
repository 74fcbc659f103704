//! Binary-search lookup by book id

use crate::book::Book;

/// Find the array position of the book with the given id.
///
/// Requires `books` to be sorted ascending by id. Returns None when the
/// slice is empty or the id is absent. Ids are unique, so no tie-break
/// is needed.
pub fn find_by_id(books: &[Book], id: u64) -> Option<usize> {
    books.binary_search_by_key(&id, |book| book.id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf(ids: &[u64]) -> Vec<Book> {
        ids.iter()
            .map(|&id| Book::new(id, "t", "a", 2000))
            .collect()
    }

    #[test]
    fn test_empty_slice_finds_nothing() {
        assert_eq!(find_by_id(&[], 1), None);
    }

    #[test]
    fn test_finds_present_ids() {
        let books = shelf(&[1, 3, 5, 9]);
        assert_eq!(find_by_id(&books, 1), Some(0));
        assert_eq!(find_by_id(&books, 5), Some(2));
        assert_eq!(find_by_id(&books, 9), Some(3));
    }

    #[test]
    fn test_absent_id_finds_nothing() {
        let books = shelf(&[1, 3, 5, 9]);
        assert_eq!(find_by_id(&books, 2), None);
        assert_eq!(find_by_id(&books, 10), None);
    }

    #[test]
    fn test_single_element() {
        let books = shelf(&[7]);
        assert_eq!(find_by_id(&books, 7), Some(0));
        assert_eq!(find_by_id(&books, 6), None);
    }

    #[test]
    fn test_gaps_from_deletions() {
        // Deleted ids leave gaps; lookup must still land correctly
        let books = shelf(&[2, 4, 8]);
        assert_eq!(find_by_id(&books, 4), Some(1));
        assert_eq!(find_by_id(&books, 3), None);
    }
}
