//! Website link qualification

/// Whether `url` already starts with a URI scheme
///
/// Recognizes `<scheme>://` where the scheme starts with a letter and
/// continues with letters, digits, `+`, `-` or `.`, plus `mailto:`.
pub fn has_scheme(url: &str) -> bool {
    if url.get(..7).is_some_and(|prefix| prefix.eq_ignore_ascii_case("mailto:")) {
        return true;
    }

    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Link target for a raw website value
///
/// # Examples
/// ```
/// use mapscout::logic::links::website_href;
///
/// assert_eq!(website_href("example.com"), "http://example.com");
/// assert_eq!(website_href("https://example.com"), "https://example.com");
/// ```
pub fn website_href(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
