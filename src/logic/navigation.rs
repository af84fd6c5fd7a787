//! Result card selection logic
//!
//! Pure functions for moving the selected card with wrapping (arrows) or
//! clamping (page jumps).

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use mapscout::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Jump forward by `page` cards, stopping at the last one
pub fn page_down(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let from = current.unwrap_or(0);
    Some(from.saturating_add(page.max(1)).min(list_len - 1))
}

/// Jump back by `page` cards, stopping at the first one
pub fn page_up(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let from = current.unwrap_or(0).min(list_len - 1);
    Some(from.saturating_sub(page.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection() {
        assert_eq!(prev_selection(None, 0), None);
        assert_eq!(prev_selection(None, 3), Some(2));
        assert_eq!(prev_selection(Some(2), 3), Some(1));
        assert_eq!(prev_selection(Some(0), 3), Some(2));
    }

    #[test]
    fn test_prev_selection_stale_index_clamped() {
        // Result list shrank after a new search
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_page_down_clamps() {
        assert_eq!(page_down(None, 0, 5), None);
        assert_eq!(page_down(Some(0), 10, 5), Some(5));
        assert_eq!(page_down(Some(8), 10, 5), Some(9));
        assert_eq!(page_down(None, 3, 0), Some(1));
    }

    #[test]
    fn test_page_up_clamps() {
        assert_eq!(page_up(None, 0, 5), None);
        assert_eq!(page_up(Some(7), 10, 5), Some(2));
        assert_eq!(page_up(Some(2), 10, 5), Some(0));
        assert_eq!(page_up(Some(20), 10, 5), Some(4));
    }
}
