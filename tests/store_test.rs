use std::time::Duration;

use layoutist::catalog::Layout;
use layoutist::store::{LayoutDraft, RestStore, StoreError};

fn draft() -> LayoutDraft {
    LayoutDraft {
        room_name: "Reading Nook".to_string(),
        width: 8.0,
        length: 6.0,
        image: None,
        notes: Some("Corner unit".to_string()),
        price: 2200.0,
        discount: 10.0,
        available: true,
    }
}

#[test]
fn test_draft_serializes_with_camel_case_and_no_id() {
    let json = serde_json::to_string(&draft()).unwrap();
    assert!(json.contains("\"roomName\":\"Reading Nook\""));
    assert!(json.contains("\"discount\":10.0"));
    assert!(!json.contains("\"id\""));
    assert!(!json.contains("room_name"));
}

#[test]
fn test_created_record_parses_as_layout() {
    // What the store echoes back after a POST: the draft plus an id
    let json = r#"{
        "id": "17",
        "roomName": "Reading Nook",
        "width": 8,
        "length": 6,
        "notes": "Corner unit",
        "price": 2200,
        "discount": 10,
        "available": true
    }"#;

    let layout: Layout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.id, "17");
    assert_eq!(layout.room_name, "Reading Nook");
    assert_eq!(layout.final_price(), 1980.0);
}

#[test]
fn test_rest_store_builds_from_endpoint_parts() {
    let store = RestStore::new(
        "https://example.com/api/",
        "romm-furniture",
        Duration::from_secs(30),
    );
    assert!(store.is_ok());
}

#[test]
fn test_store_error_messages() {
    assert_eq!(
        StoreError::NotFound("17".to_string()).to_string(),
        "Record not found: 17"
    );
    assert_eq!(StoreError::Api(500).to_string(), "Service returned status 500");
    assert!(StoreError::Network("timed out".to_string())
        .to_string()
        .contains("timed out"));
}
