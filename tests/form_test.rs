use layoutist::catalog::Layout;
use layoutist::ui::form::{FormError, FormField, LayoutForm};

fn filled_form() -> LayoutForm {
    let mut form = LayoutForm::new();
    form.room_name = "Master Bedroom".to_string();
    form.width = "14".to_string();
    form.length = "12".to_string();
    form.price = "4500".to_string();
    form
}

#[test]
fn test_room_name_is_required() {
    let form = LayoutForm::new();
    assert_eq!(form.to_draft(), Err(FormError::Required("Room name")));
}

#[test]
fn test_numeric_fields_are_required() {
    let mut form = LayoutForm::new();
    form.room_name = "Studio".to_string();
    assert_eq!(form.to_draft(), Err(FormError::Required("Width")));

    form.width = "10".to_string();
    assert_eq!(form.to_draft(), Err(FormError::Required("Length")));

    form.length = "8".to_string();
    assert_eq!(form.to_draft(), Err(FormError::Required("MRP")));
}

#[test]
fn test_numeric_fields_must_parse() {
    let mut form = filled_form();
    form.width = "wide".to_string();
    assert_eq!(form.to_draft(), Err(FormError::Invalid("Width")));

    let mut form = filled_form();
    form.price = "1,200".to_string();
    assert_eq!(form.to_draft(), Err(FormError::Invalid("MRP")));
}

#[test]
fn test_valid_form_coerces_numbers() {
    let draft = filled_form().to_draft().unwrap();
    assert_eq!(draft.room_name, "Master Bedroom");
    assert_eq!(draft.width, 14.0);
    assert_eq!(draft.length, 12.0);
    assert_eq!(draft.price, 4500.0);
    assert_eq!(draft.discount, 0.0);
    assert!(draft.available);
}

#[test]
fn test_blank_or_unparseable_discount_becomes_zero() {
    let mut form = filled_form();
    form.discount = String::new();
    assert_eq!(form.to_draft().unwrap().discount, 0.0);

    form.discount = "ten".to_string();
    assert_eq!(form.to_draft().unwrap().discount, 0.0);

    form.discount = "15".to_string();
    assert_eq!(form.to_draft().unwrap().discount, 15.0);
}

#[test]
fn test_blank_optional_fields_become_absent() {
    let mut form = filled_form();
    form.image = "   ".to_string();
    form.notes = String::new();

    let draft = form.to_draft().unwrap();
    assert_eq!(draft.image, None);
    assert_eq!(draft.notes, None);

    form.image = " https://example.com/room.jpg ".to_string();
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.image.as_deref(), Some("https://example.com/room.jpg"));
}

#[test]
fn test_availability_toggle_reaches_the_draft() {
    let mut form = filled_form();
    assert!(form.available);

    form.toggle_available();
    assert!(!form.to_draft().unwrap().available);

    form.toggle_available();
    assert!(form.to_draft().unwrap().available);
}

#[test]
fn test_field_navigation_wraps() {
    let mut form = LayoutForm::new();
    assert_eq!(form.focused, FormField::RoomName);

    form.previous_field();
    assert_eq!(form.focused, FormField::Available);

    form.next_field();
    assert_eq!(form.focused, FormField::RoomName);

    for _ in 0..FormField::ALL.len() {
        form.next_field();
    }
    assert_eq!(form.focused, FormField::RoomName);
}

#[test]
fn test_typing_edits_the_focused_field() {
    let mut form = LayoutForm::new();
    form.insert_char('D');
    form.insert_char('e');
    form.insert_char('n');
    assert_eq!(form.room_name, "Den");

    form.backspace();
    assert_eq!(form.room_name, "De");

    form.next_field();
    form.insert_char('1');
    form.insert_char('2');
    assert_eq!(form.width, "12");
}

#[test]
fn test_availability_field_ignores_typed_text() {
    let mut form = LayoutForm::new();
    while form.focused != FormField::Available {
        form.next_field();
    }

    form.insert_char('x');
    form.backspace();
    assert!(form.available);
    assert_eq!(form.field_text(FormField::Available), "In Stock");

    form.toggle_available();
    assert_eq!(form.field_text(FormField::Available), "Out of Stock");
}

#[test]
fn test_edit_form_prefills_from_record() {
    let record = Layout {
        id: "42".to_string(),
        room_name: "Attic Suite".to_string(),
        width: 15.5,
        length: 11.0,
        image: Some("https://example.com/attic.jpg".to_string()),
        notes: Some("Sloped ceiling".to_string()),
        price: 7800.0,
        discount: 12.0,
        available: false,
    };

    let form = LayoutForm::from_layout(&record);
    assert!(form.is_edit());
    assert_eq!(form.editing_id(), Some("42"));
    assert_eq!(form.title(), "Edit Layout");
    assert_eq!(form.room_name, "Attic Suite");
    assert_eq!(form.width, "15.50");
    assert_eq!(form.length, "11");
    assert_eq!(form.price, "7800");
    assert_eq!(form.discount, "12");
    assert!(!form.available);

    // Round-trips back into an equivalent draft
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.width, 15.5);
    assert_eq!(draft.notes.as_deref(), Some("Sloped ceiling"));
    assert!(!draft.available);
}

#[test]
fn test_create_form_has_no_editing_id() {
    let form = LayoutForm::new();
    assert!(!form.is_edit());
    assert_eq!(form.editing_id(), None);
    assert_eq!(form.title(), "Add New Layout");
}

#[test]
fn test_validation_error_messages() {
    assert_eq!(FormError::Required("Room name").to_string(), "Room name is required");
    assert_eq!(FormError::Invalid("Width").to_string(), "Width must be a number");
}
