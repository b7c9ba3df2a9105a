use layoutist::catalog::{SortDirection, SortKey};
use layoutist::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.api.base_url.starts_with("https://"));
    assert_eq!(config.api.resource, "romm-furniture");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.default_sort, "none");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.currency, "₹");
    assert_eq!(config.display.dimension_unit, "ft");
    assert!(config.display.show_notes);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid base URL should fail
    config.api.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid resource
    config.api.base_url = "https://example.com/api".to_string();
    config.api.resource = "rooms/extra".to_string();
    assert!(config.validate().is_err());

    config.api.resource = String::new();
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.api.resource = "rooms".to_string();
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());

    config.api.timeout_seconds = 400;
    assert!(config.validate().is_err());

    // Reset and test invalid sort spec
    config.api.timeout_seconds = 30;
    config.ui.default_sort = "size-asc".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty currency
    config.ui.default_sort = "price-desc".to_string();
    config.display.currency = String::new();
    assert!(config.validate().is_err());

    // Reset and test logging with no file
    config.display.currency = "$".to_string();
    config.logging.enabled = true;
    config.logging.file = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("resource = \"romm-furniture\""));
    assert!(toml_str.contains("timeout_seconds = 30"));
    assert!(toml_str.contains("default_sort = \"none\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_sort = "price-desc"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.default_sort, "price-desc");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.api.resource, "romm-furniture"); // default value
    assert_eq!(config.api.timeout_seconds, 30); // default value
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.display.currency, "₹"); // default value
    assert_eq!(config.logging.file, "layoutist.log"); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.ui.default_sort, default_config.ui.default_sort);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.currency, default_config.display.currency);
}

#[test]
fn test_default_sort_resolves_to_sort_config() {
    let mut config = Config::default();
    assert_eq!(config.default_sort().key, None);

    config.ui.default_sort = "final-price-desc".to_string();
    let sort = config.default_sort();
    assert_eq!(sort.key, Some(SortKey::FinalPrice));
    assert_eq!(sort.direction, SortDirection::Descending);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("layoutist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Layoutist Configuration File"));
    assert!(content.contains("resource = \"romm-furniture\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
