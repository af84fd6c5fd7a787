//! Response normalization
//!
//! Maps the scraping service's raw JSON records onto `Listing`s. The mapping
//! is total: it never fails, keeps record order, and degrades any field with
//! an unexpected shape to "absent" (or 0 for `reviews_count`).

use serde_json::Value;

use crate::model::Listing;

/// Normalize a full response payload
///
/// Anything other than a JSON array (including `null`) yields no listings.
pub fn normalize(payload: &Value) -> Vec<Listing> {
    match payload {
        Value::Array(records) => records.iter().map(normalize_record).collect(),
        _ => Vec::new(),
    }
}

/// Normalize a single raw record
///
/// Non-object records produce a listing with every field absent.
pub fn normalize_record(record: &Value) -> Listing {
    Listing {
        name: text_field(record, "name"),
        address: text_field(record, "address"),
        phone_number: text_field(record, "phone_number"),
        website: text_field(record, "website"),
        reviews_average: number_field(record, "reviews_average"),
        reviews_count: count_field(record, "reviews_count").unwrap_or(0),
        latitude: number_field(record, "latitude"),
        longitude: number_field(record, "longitude"),
    }
}

fn text_field(record: &Value, key: &str) -> Option<String> {
    record.get(key)?.as_str().map(str::to_string)
}

fn number_field(record: &Value, key: &str) -> Option<f64> {
    record.get(key)?.as_f64()
}

fn count_field(record: &Value, key: &str) -> Option<u64> {
    let value = record.get(key)?;
    value.as_u64().or_else(|| {
        // Counts serialized as floats (e.g. 120.0) are still whole counts
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let record = json!({
            "name": "Blue Bottle",
            "address": "1 Ferry Building",
            "phone_number": "+1 510-653-3394",
            "website": "bluebottlecoffee.com",
            "reviews_average": 4.5,
            "reviews_count": 1203,
            "latitude": 37.7955,
            "longitude": -122.3937
        });

        let listing = normalize_record(&record);
        assert_eq!(listing.name.as_deref(), Some("Blue Bottle"));
        assert_eq!(listing.address.as_deref(), Some("1 Ferry Building"));
        assert_eq!(listing.phone_number.as_deref(), Some("+1 510-653-3394"));
        assert_eq!(listing.website.as_deref(), Some("bluebottlecoffee.com"));
        assert_eq!(listing.reviews_average, Some(4.5));
        assert_eq!(listing.reviews_count, 1203);
        assert_eq!(listing.latitude, Some(37.7955));
        assert_eq!(listing.longitude, Some(-122.3937));
    }

    #[test]
    fn test_missing_fields_are_absent_not_empty() {
        let listing = normalize_record(&json!({}));
        assert_eq!(listing, Listing::default());
        assert!(listing.name.is_none());
        assert!(listing.reviews_average.is_none());
        assert_eq!(listing.reviews_count, 0);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let listing = normalize_record(&json!({
            "name": null,
            "website": null,
            "reviews_count": null,
            "latitude": null
        }));
        assert!(listing.name.is_none());
        assert!(listing.website.is_none());
        assert_eq!(listing.reviews_count, 0);
        assert!(listing.latitude.is_none());
    }

    #[test]
    fn test_shape_mismatch_degrades() {
        // The scraper emits "" for counts and averages it could not read
        let listing = normalize_record(&json!({
            "name": 42,
            "reviews_average": "",
            "reviews_count": "",
            "latitude": "37.1"
        }));
        assert!(listing.name.is_none());
        assert!(listing.reviews_average.is_none());
        assert_eq!(listing.reviews_count, 0);
        assert!(listing.latitude.is_none());
    }

    #[test]
    fn test_count_variants() {
        assert_eq!(normalize_record(&json!({"reviews_count": 12.0})).reviews_count, 12);
        assert_eq!(normalize_record(&json!({"reviews_count": 12.5})).reviews_count, 0);
        assert_eq!(normalize_record(&json!({"reviews_count": -3})).reviews_count, 0);
    }

    #[test]
    fn test_integer_coordinates_accepted() {
        let listing = normalize_record(&json!({"latitude": 40, "longitude": -74}));
        assert_eq!(listing.latitude, Some(40.0));
        assert_eq!(listing.longitude, Some(-74.0));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let listing = normalize_record(&json!({"name": "A", "place_id": "xyz", "hours": []}));
        assert_eq!(listing.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        let payload = json!([{"name": "B"}, {"name": "A"}, {"name": "B"}]);
        let names: Vec<_> = normalize(&payload)
            .into_iter()
            .map(|l| l.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(normalize(&Value::Null).is_empty());
        assert!(normalize(&json!({"results": []})).is_empty());
        assert!(normalize(&json!("nope")).is_empty());
    }

    #[test]
    fn test_non_object_record_kept_as_blank_listing() {
        let listings = normalize(&json!([1, {"name": "A"}]));
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0], Listing::default());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let payload = json!([
            {"name": "A", "reviews_count": 3},
            {"website": "a.com", "latitude": 1.5}
        ]);
        assert_eq!(normalize(&payload), normalize(&payload));
    }
}
