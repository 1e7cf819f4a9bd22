// Rust guideline compliant 2026-02-06

//! Integration tests for dataset loading and normalization.

use bizdir_core::{AttributeValue, Dataset, DatasetFormat, Facet, OutboundLinks, UNCATEGORIZED};
use std::fs;
use tempfile::TempDir;

const SCRAPED_RECORDS: &str = r#"[
  {
    "placeId": "ChIJ-mama-put",
    "title": "Mama Put Kitchen",
    "categoryName": "Restaurant",
    "address": "12 Allen Avenue, Ikeja",
    "street": "12 Allen Avenue",
    "city": "Lagos",
    "neighborhood": "Ikeja",
    "state": "Lagos State",
    "postalCode": "100271",
    "countryCode": "NG",
    "location": { "lat": 6.6018, "lng": 3.3515 },
    "website": "https://mamaput.example.ng",
    "phone": "+234 803 000 0000",
    "phoneUnformatted": "+2348030000000",
    "totalScore": 4.6,
    "reviewsCount": 212,
    "openingHours": [
      { "day": "Monday", "hours": "8 AM to 10 PM" },
      { "day": "Sunday", "hours": "Closed" }
    ],
    "additionalInfo": {
      "Payments": [ { "Debit cards": true }, { "Cash only": false } ],
      "Accessibility": [ { "Wheelchair accessible entrance": true } ]
    }
  },
  {
    "placeId": "ChIJ-no-city",
    "title": "Roadside Suya",
    "address": "Opposite the filling station"
  },
  {
    "placeId": "ChIJ-mama-put",
    "title": "Duplicate Mama Put"
  },
  {
    "title": "No Identifier"
  },
  {
    "placeId": "ChIJ-bad-rating",
    "title": "Broken Record",
    "totalScore": "five stars",
    "city": "Abuja"
  }
]"#;

fn write_dataset(dir: &TempDir, name: &str, content: &str) -> Dataset {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    Dataset::new(path).unwrap()
}

#[test]
fn test_scraped_records_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = write_dataset(&temp_dir, "listings.json", SCRAPED_RECORDS);
    assert_eq!(dataset.format(), DatasetFormat::Json);

    let store = dataset.load_store().unwrap();
    let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["ChIJ-mama-put", "ChIJ-no-city", "ChIJ-bad-rating"]);

    let mama_put = store.resolve("ChIJ-mama-put").unwrap();
    assert_eq!(mama_put.name, "Mama Put Kitchen");
    assert_eq!(mama_put.category, "Restaurant");
    assert_eq!(mama_put.rating, Some(4.6));
    assert_eq!(mama_put.review_count, 212);
    assert_eq!(mama_put.hours.len(), 2);
    assert!(mama_put.hours[1].is_closed());
    let coordinates = mama_put.coordinates.as_ref().unwrap();
    assert_eq!(coordinates.latitude, 6.6018);
    assert_eq!(coordinates.longitude, 3.3515);

    assert_eq!(mama_put.phone.as_deref(), Some("+234 803 000 0000"));
    assert_eq!(
        OutboundLinks::for_listing(mama_put).phone.as_deref(),
        Some("tel:+2348030000000")
    );

    let attributes = mama_put.attributes.as_ref().unwrap();
    assert_eq!(
        attributes["Payments"][0]["Debit cards"],
        AttributeValue::Flag(true)
    );
}

#[test]
fn test_missing_location_fields_get_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let store = write_dataset(&temp_dir, "listings.json", SCRAPED_RECORDS)
        .load_store()
        .unwrap();

    let suya = store.resolve("ChIJ-no-city").unwrap();
    for facet in Facet::ALL {
        assert_eq!(suya.facet_value(facet), UNCATEGORIZED);
    }
    assert_eq!(suya.location_label(), "Opposite the filling station");
    assert_eq!(suya.review_count, 0);
    assert!(suya.attributes.is_none());
}

#[test]
fn test_malformed_record_is_salvaged() {
    let temp_dir = TempDir::new().unwrap();
    let store = write_dataset(&temp_dir, "listings.json", SCRAPED_RECORDS)
        .load_store()
        .unwrap();

    let broken = store.resolve("ChIJ-bad-rating").unwrap();
    assert_eq!(broken.name, "Broken Record");
    assert_eq!(broken.city, UNCATEGORIZED);
    assert_eq!(broken.rating, None);
}

#[test]
fn test_json_lines_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let content = concat!(
        "{\"id\":\"a\",\"name\":\"Alpha\",\"category\":\"Cafe\"}\n",
        "\n",
        "{\"id\":\"b\",\"name\":\"Beta\",\"category\":\"Bakery\"}\n",
    );
    let dataset = write_dataset(&temp_dir, "listings.jsonl", content);
    assert_eq!(dataset.format(), DatasetFormat::JsonLines);

    let store = dataset.load_store().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.facets().categories, vec!["Bakery", "Cafe"]);
}

#[test]
fn test_invalid_json_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = write_dataset(&temp_dir, "listings.json", "[{\"id\": ");
    assert!(dataset.load_store().is_err());
}

#[test]
fn test_missing_dataset_is_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = Dataset::new(temp_dir.path().join("absent.json")).unwrap();
    let store = dataset.load_store().unwrap();
    assert!(store.is_empty());
    assert!(store.facets().categories.is_empty());
}
