//! Result presentation mapping
//!
//! Turns a `SearchState` snapshot into what the results area should show.
//! The mapping is pure: the same snapshot always yields the same view, and
//! nothing is remembered between renders.

use crate::logic::links::website_href;
use crate::model::{Listing, Phase, SearchState};

/// Text shown in place of any absent field
pub const PLACEHOLDER: &str = "N/A";

pub const ONBOARDING_HINT: &str = "Enter a search query and number of results to begin.";

pub const NO_RESULTS_HINT: &str =
    "No results found for your query. Try different keywords or a broader search.";

/// Hyperlink for a listing's website
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebsiteLink {
    /// Raw value as returned by the service
    pub label: String,
    /// Scheme-qualified target
    pub href: String,
}

/// Display-ready text for one listing
#[derive(Clone, Debug, PartialEq)]
pub struct ListingCard {
    pub title: String,
    pub address: String,
    pub phone: String,
    pub website: Option<WebsiteLink>,
    pub reviews: String,
    pub coordinates: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing) -> Self {
        let website = listing
            .website
            .as_deref()
            .filter(|w| !w.trim().is_empty())
            .map(|w| WebsiteLink {
                label: w.to_string(),
                href: website_href(w),
            });

        Self {
            title: text_or_placeholder(listing.name.as_deref()),
            address: text_or_placeholder(listing.address.as_deref()),
            phone: text_or_placeholder(listing.phone_number.as_deref()),
            website,
            reviews: format!(
                "{} ({} reviews)",
                number_or_placeholder(listing.reviews_average),
                listing.reviews_count
            ),
            coordinates: format!(
                "Lat: {}, Lon: {}",
                number_or_placeholder(listing.latitude),
                number_or_placeholder(listing.longitude)
            ),
        }
    }

    /// Website label, or the placeholder when there is none
    pub fn website_label(&self) -> &str {
        self.website
            .as_ref()
            .map(|link| link.label.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    /// Labelled detail rows below the title
    pub fn detail_rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Address", self.address.as_str()),
            ("Phone", self.phone.as_str()),
            ("Website", self.website_label()),
            ("Reviews", self.reviews.as_str()),
            ("Coordinates", self.coordinates.as_str()),
        ]
    }
}

/// What the results area shows
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// Progress indicator only
    Loading,
    /// Error banner
    Error(String),
    /// Neutral hint before anything was typed
    Onboarding(&'static str),
    /// Search settled (or form filled) without any listing
    NoResults(&'static str),
    /// One card per listing, in result order
    Cards(Vec<ListingCard>),
}

impl ResultsView {
    /// Plain-text rendering for non-interactive output
    pub fn to_plain_text(&self) -> String {
        match self {
            ResultsView::Loading => "Searching...".to_string(),
            ResultsView::Error(message) => format!("Error: {}", message),
            ResultsView::Onboarding(hint) | ResultsView::NoResults(hint) => hint.to_string(),
            ResultsView::Cards(cards) => cards
                .iter()
                .map(|card| {
                    let mut lines = vec![card.title.clone()];
                    for (label, value) in card.detail_rows() {
                        lines.push(format!("  {}: {}", label, value));
                    }
                    if let Some(link) = &card.website {
                        lines.push(format!("  Link: {}", link.href));
                    }
                    lines.join("\n")
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// Map a search snapshot to the results view
pub fn present(state: &SearchState) -> ResultsView {
    match state.phase() {
        Phase::Loading => return ResultsView::Loading,
        Phase::Failure => {
            let message = state.error_message().unwrap_or_default().to_string();
            return ResultsView::Error(message);
        }
        Phase::Idle | Phase::Success => {}
    }

    if !state.results().is_empty() {
        return ResultsView::Cards(state.results().iter().map(ListingCard::from_listing).collect());
    }

    if state.phase() == Phase::Idle && state.query().is_empty() {
        ResultsView::Onboarding(ONBOARDING_HINT)
    } else {
        ResultsView::NoResults(NO_RESULTS_HINT)
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn number_or_placeholder(value: Option<f64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Listing, DEFAULT_RESULT_COUNT};

    fn state(phase: Phase, query: &str, results: Vec<Listing>, error: Option<&str>) -> SearchState {
        let mut state = SearchState::new(DEFAULT_RESULT_COUNT);
        state.phase = phase;
        state.query = query.to_string();
        state.results = results;
        state.error_message = error.map(str::to_string);
        state
    }

    #[test]
    fn test_loading_suppresses_everything() {
        let view = present(&state(Phase::Loading, "pizza", vec![], None));
        assert_eq!(view, ResultsView::Loading);
    }

    #[test]
    fn test_failure_shows_banner() {
        let view = present(&state(Phase::Failure, "pizza", vec![], Some("rate limited")));
        assert_eq!(view, ResultsView::Error("rate limited".to_string()));
    }

    #[test]
    fn test_idle_empty_query_shows_onboarding() {
        let view = present(&state(Phase::Idle, "", vec![], None));
        assert_eq!(view, ResultsView::Onboarding(ONBOARDING_HINT));
    }

    #[test]
    fn test_idle_with_query_shows_no_results() {
        let view = present(&state(Phase::Idle, "pizza", vec![], None));
        assert_eq!(view, ResultsView::NoResults(NO_RESULTS_HINT));
    }

    #[test]
    fn test_success_empty_shows_no_results_even_without_query() {
        let view = present(&state(Phase::Success, "", vec![], None));
        assert_eq!(view, ResultsView::NoResults(NO_RESULTS_HINT));
    }

    #[test]
    fn test_cards_in_order() {
        let results = vec![
            Listing { name: Some("First".to_string()), ..Default::default() },
            Listing { name: Some("Second".to_string()), ..Default::default() },
        ];
        let ResultsView::Cards(cards) = present(&state(Phase::Success, "q", results, None)) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[1].title, "Second");
    }

    #[test]
    fn test_absent_fields_use_placeholder() {
        let card = ListingCard::from_listing(&Listing::default());
        assert_eq!(card.title, PLACEHOLDER);
        assert_eq!(card.address, PLACEHOLDER);
        assert_eq!(card.phone, PLACEHOLDER);
        assert!(card.website.is_none());
        assert_eq!(card.website_label(), PLACEHOLDER);
        assert_eq!(card.reviews, "N/A (0 reviews)");
        assert_eq!(card.coordinates, "Lat: N/A, Lon: N/A");
    }

    #[test]
    fn test_empty_strings_use_placeholder() {
        let listing = Listing {
            name: Some(String::new()),
            website: Some(String::new()),
            ..Default::default()
        };
        let card = ListingCard::from_listing(&listing);
        assert_eq!(card.title, PLACEHOLDER);
        assert!(card.website.is_none());
    }

    #[test]
    fn test_present_fields_formatted() {
        let listing = Listing {
            name: Some("Cafe".to_string()),
            reviews_average: Some(4.5),
            reviews_count: 120,
            latitude: Some(40.7),
            longitude: Some(-74.0),
            ..Default::default()
        };
        let card = ListingCard::from_listing(&listing);
        assert_eq!(card.reviews, "4.5 (120 reviews)");
        assert_eq!(card.coordinates, "Lat: 40.7, Lon: -74");
    }

    #[test]
    fn test_website_link_qualified() {
        let bare = ListingCard::from_listing(&Listing {
            website: Some("example.com".to_string()),
            ..Default::default()
        });
        let link = bare.website.unwrap();
        assert_eq!(link.label, "example.com");
        assert_eq!(link.href, "http://example.com");

        let full = ListingCard::from_listing(&Listing {
            website: Some("https://example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(full.website.unwrap().href, "https://example.com");
    }

    #[test]
    fn test_plain_text_cards() {
        let listing = Listing {
            name: Some("Cafe".to_string()),
            website: Some("cafe.com".to_string()),
            ..Default::default()
        };
        let text = present(&state(Phase::Success, "q", vec![listing], None)).to_plain_text();
        assert!(text.starts_with("Cafe\n"));
        assert!(text.contains("  Website: cafe.com"));
        assert!(text.contains("  Link: http://cafe.com"));
    }

    #[test]
    fn test_plain_text_error() {
        let view = ResultsView::Error("boom".to_string());
        assert_eq!(view.to_plain_text(), "Error: boom");
    }
}
