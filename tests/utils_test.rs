use layoutist::utils::format::{format_amount, format_dimensions, format_price};
use layoutist::utils::text::truncate;

#[test]
fn test_whole_amounts_drop_the_fraction() {
    assert_eq!(format_amount(4500.0), "4500");
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(12.5), "12.50");
}

#[test]
fn test_price_formatting() {
    assert_eq!(format_price("₹", 4050.0), "₹4050");
    assert_eq!(format_price("$", 99.5), "$99.50");
}

#[test]
fn test_dimension_formatting() {
    assert_eq!(format_dimensions(12.0, 10.0, "ft"), "12 × 10 ft");
    assert_eq!(format_dimensions(8.5, 6.0, "m"), "8.50 × 6 m");
}

#[test]
fn test_truncate_keeps_short_text() {
    assert_eq!(truncate("Master Bedroom", 40), "Master Bedroom");
}

#[test]
fn test_truncate_cuts_long_text_with_ellipsis() {
    let cut = truncate("A very long room name that will not fit", 20);
    assert_eq!(cut, "A very long room ...");
    assert_eq!(cut.chars().count(), 20);
}
