use layoutist::catalog::{
    filter_and_sort, final_price, search_matches, Layout, SortConfig, SortDirection, SortKey,
};

fn layout(id: &str, name: &str, price: f64, discount: f64) -> Layout {
    Layout {
        id: id.to_string(),
        room_name: name.to_string(),
        width: 12.0,
        length: 10.0,
        image: None,
        notes: None,
        price,
        discount,
        available: true,
    }
}

#[test]
fn test_final_price_without_discount() {
    assert_eq!(final_price(4500.0, 0.0), 4500.0);
    // A negative discount is treated like no discount
    assert_eq!(final_price(4500.0, -10.0), 4500.0);
}

#[test]
fn test_final_price_representative_discounts() {
    assert_eq!(final_price(4500.0, 10.0), 4050.0);
    assert_eq!(final_price(999.0, 33.0), 669.0); // 669.33 rounds down
    assert_eq!(final_price(4500.0, 100.0), 0.0);
}

#[test]
fn test_final_price_rounds_to_nearest() {
    // 150 - 49.5 = 100.5 rounds up
    assert_eq!(final_price(150.0, 33.0), 101.0);
    // 101 - 10.1 = 90.9 rounds up
    assert_eq!(final_price(101.0, 10.0), 91.0);
}

#[test]
fn test_layout_final_price_uses_record_fields() {
    let discounted = layout("1", "Studio", 2000.0, 25.0);
    assert_eq!(discounted.final_price(), 1500.0);
    assert!(discounted.has_discount());

    let plain = layout("2", "Loft", 2000.0, 0.0);
    assert_eq!(plain.final_price(), 2000.0);
    assert!(!plain.has_discount());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    assert!(search_matches("Master Bedroom", "bed"));
    assert!(search_matches("Master Bedroom", "BEDROOM"));
    assert!(search_matches("Master Bedroom", "ter Bed"));
    assert!(!search_matches("Master Bedroom", "kitchen"));
}

#[test]
fn test_blank_query_matches_everything() {
    assert!(search_matches("Master Bedroom", ""));
    assert!(search_matches("Master Bedroom", "   "));
}

#[test]
fn test_filter_keeps_server_order() {
    let layouts = vec![
        layout("1", "Bedroom A", 100.0, 0.0),
        layout("2", "Kitchen", 200.0, 0.0),
        layout("3", "Bedroom B", 300.0, 0.0),
    ];

    let view = filter_and_sort(&layouts, "bedroom", SortConfig::default());
    let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_sort_by_name_is_case_insensitive() {
    let layouts = vec![
        layout("1", "studio", 0.0, 0.0),
        layout("2", "Attic", 0.0, 0.0),
        layout("3", "Bedroom", 0.0, 0.0),
    ];

    let sort = SortConfig {
        key: Some(SortKey::RoomName),
        direction: SortDirection::Ascending,
    };
    let view = filter_and_sort(&layouts, "", sort);
    let names: Vec<&str> = view.iter().map(|l| l.room_name.as_str()).collect();
    assert_eq!(names, vec!["Attic", "Bedroom", "studio"]);
}

#[test]
fn test_sort_direction_reverses_order() {
    let layouts = vec![
        layout("1", "A", 300.0, 0.0),
        layout("2", "B", 100.0, 0.0),
        layout("3", "C", 200.0, 0.0),
    ];

    let ascending = SortConfig {
        key: Some(SortKey::Price),
        direction: SortDirection::Ascending,
    };
    let view = filter_and_sort(&layouts, "", ascending);
    let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);

    let descending = SortConfig {
        key: Some(SortKey::Price),
        direction: SortDirection::Descending,
    };
    let view = filter_and_sort(&layouts, "", descending);
    let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
}

#[test]
fn test_sort_by_final_price_differs_from_price() {
    // Heavily discounted record ends up cheaper than a lower-MRP one
    let layouts = vec![
        layout("1", "A", 100.0, 50.0), // final 50
        layout("2", "B", 80.0, 0.0),   // final 80
    ];

    let by_price = SortConfig {
        key: Some(SortKey::Price),
        direction: SortDirection::Ascending,
    };
    let view = filter_and_sort(&layouts, "", by_price);
    assert_eq!(view[0].id, "2");

    let by_final = SortConfig {
        key: Some(SortKey::FinalPrice),
        direction: SortDirection::Ascending,
    };
    let view = filter_and_sort(&layouts, "", by_final);
    assert_eq!(view[0].id, "1");
}

#[test]
fn test_sort_is_stable_on_ties() {
    let layouts = vec![
        layout("1", "A", 100.0, 0.0),
        layout("2", "B", 100.0, 0.0),
        layout("3", "C", 100.0, 0.0),
    ];

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sort = SortConfig {
            key: Some(SortKey::Price),
            direction,
        };
        let view = filter_and_sort(&layouts, "", sort);
        let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}

#[test]
fn test_sort_key_cycle_order() {
    let mut sort = SortConfig::default();
    assert_eq!(sort.key, None);

    sort.cycle_key();
    assert_eq!(sort.key, Some(SortKey::RoomName));
    sort.cycle_key();
    assert_eq!(sort.key, Some(SortKey::Price));
    sort.cycle_key();
    assert_eq!(sort.key, Some(SortKey::Discount));
    sort.cycle_key();
    assert_eq!(sort.key, Some(SortKey::FinalPrice));
    sort.cycle_key();
    assert_eq!(sort.key, None);
}

#[test]
fn test_sort_config_parsing() {
    assert_eq!(SortConfig::parse("none"), Some(SortConfig::default()));
    assert_eq!(
        SortConfig::parse("price-desc"),
        Some(SortConfig {
            key: Some(SortKey::Price),
            direction: SortDirection::Descending,
        })
    );
    assert_eq!(
        SortConfig::parse("final-price-asc"),
        Some(SortConfig {
            key: Some(SortKey::FinalPrice),
            direction: SortDirection::Ascending,
        })
    );
    assert_eq!(SortConfig::parse("price"), None);
    assert_eq!(SortConfig::parse("size-asc"), None);
    assert_eq!(SortConfig::parse("price-up"), None);
}

#[test]
fn test_missing_optional_fields_use_defaults() {
    let json = r#"{
        "id": "7",
        "roomName": "Guest Room",
        "width": 10,
        "length": 8,
        "price": 1200
    }"#;

    let parsed: Layout = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.discount, 0.0);
    assert!(parsed.available);
    assert!(!parsed.is_out_of_stock());
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.notes, None);
}

#[test]
fn test_explicit_unavailable_is_out_of_stock() {
    let json = r#"{
        "id": "8",
        "roomName": "Guest Room",
        "width": 10,
        "length": 8,
        "price": 1200,
        "available": false
    }"#;

    let parsed: Layout = serde_json::from_str(json).unwrap();
    assert!(parsed.is_out_of_stock());
}

#[test]
fn test_wire_format_uses_camel_case() {
    let record = layout("9", "Den", 500.0, 5.0);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"roomName\":\"Den\""));
    assert!(!json.contains("room_name"));
}
