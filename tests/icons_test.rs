use layoutist::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.in_stock(), "🟢");
    assert_eq!(service.out_of_stock(), "🔴");
    assert_eq!(service.catalog_title(), "🏠");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.in_stock(), "●");
    assert_eq!(service.out_of_stock(), "○");
    assert_eq!(service.sort_ascending(), "↑");
    assert_eq!(service.sort_descending(), "↓");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.in_stock(), "[+]");
    assert_eq!(service.out_of_stock(), "[-]");
    assert_eq!(service.sort_ascending(), "^");
    assert_eq!(service.sort_descending(), "v");
}

#[test]
fn test_theme_cycling_order() {
    let mut service = IconService::new(IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}
