//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Default catalog endpoint (the hosted CRUD store)
pub const DEFAULT_API_BASE_URL: &str = "https://68be829f9c70953d96ec8200.mockapi.io/api";
pub const DEFAULT_API_RESOURCE: &str = "romm-furniture";

// Success Messages
pub const SUCCESS_LAYOUT_ADDED: &str = "Layout added";
pub const SUCCESS_LAYOUT_UPDATED: &str = "Layout updated";
pub const SUCCESS_LAYOUT_DELETED: &str = "Layout deleted";

// Error Messages
pub const ERROR_LAYOUT_CREATE_FAILED: &str = "Failed to add layout";
pub const ERROR_LAYOUT_UPDATE_FAILED: &str = "Failed to update layout";
pub const ERROR_LAYOUT_DELETE_FAILED: &str = "Failed to delete layout";
pub const ERROR_LAYOUT_FETCH_FAILED: &str = "Failed to load layout";
pub const ERROR_LIST_FETCH_FAILED: &str = "Failed to load layouts";

// Empty states
pub const EMPTY_NO_MATCHES: &str = "No rooms match your search.";
pub const EMPTY_NO_LAYOUTS: &str = "No layouts yet. Press 'a' to add one.";
pub const NO_IMAGE_PLACEHOLDER: &str = "No Image";

// Stock badges
pub const BADGE_IN_STOCK: &str = "In Stock";
pub const BADGE_OUT_OF_STOCK: &str = "Out of Stock";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// UI Layout Constants
/// Width of the form dialog as a percentage of the screen
pub const FORM_DIALOG_WIDTH_PERCENT: u16 = 60;
/// Width of the detail dialog as a percentage of the screen
pub const DETAIL_DIALOG_WIDTH_PERCENT: u16 = 70;
/// Height of the detail dialog as a percentage of the screen
pub const DETAIL_DIALOG_HEIGHT_PERCENT: u16 = 60;
/// Maximum characters of a room name shown in confirmation prompts
pub const NAME_PREVIEW_MAX_CHARS: usize = 40;
