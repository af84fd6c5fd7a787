//! Form input rules
//!
//! Pure functions deciding what the query and count fields accept.

/// Parse the raw text of the result-count field
///
/// Reads an optional sign and the leading run of digits after trimming, so
/// `"3.5"` is 3 and `"12abc"` is 12. No digits, or a value below 1, gives 1.
/// Values too large for a `u32` saturate.
///
/// # Examples
/// ```
/// use mapscout::logic::input::parse_result_count;
///
/// assert_eq!(parse_result_count("25"), 25);
/// assert_eq!(parse_result_count("12abc"), 12);
/// assert_eq!(parse_result_count("0"), 1);
/// assert_eq!(parse_result_count("-4"), 1);
/// assert_eq!(parse_result_count("ten"), 1);
/// assert_eq!(parse_result_count(""), 1);
/// ```
pub fn parse_result_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() || negative {
        return 1;
    }

    match digits.parse::<u32>() {
        Ok(n) => n.max(1),
        // Only overflow is possible on a non-empty digit run
        Err(_) => u32::MAX,
    }
}

/// Whether a query may be submitted (non-empty after trimming)
pub fn is_submittable_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Whether a keystroke belongs in the integer-only count field
pub fn is_count_char(c: char) -> bool {
    c.is_ascii_digit()
}
