//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Stock status icons
#[derive(Debug, Clone)]
pub struct StockIcons {
    pub in_stock: &'static str,
    pub out_of_stock: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub catalog_title: &'static str,
    pub search: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Sort direction indicators
#[derive(Debug, Clone)]
pub struct SortIcons {
    pub ascending: &'static str,
    pub descending: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub stock: StockIcons,
    pub ui: UiIcons,
    pub sort: SortIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            stock: StockIcons {
                in_stock: "🟢",
                out_of_stock: "🔴",
            },
            ui: UiIcons {
                catalog_title: "🏠",
                search: "🔎",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            sort: SortIcons {
                ascending: "⬆️",
                descending: "⬇️",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            stock: StockIcons {
                in_stock: "●",
                out_of_stock: "○",
            },
            ui: UiIcons {
                catalog_title: "⌂",
                search: "⌕",
                error: "✗",
                info: "ℹ",
                warning: "‼",
                success: "✓",
            },
            sort: SortIcons {
                ascending: "↑",
                descending: "↓",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            stock: StockIcons {
                in_stock: "[+]",
                out_of_stock: "[-]",
            },
            ui: UiIcons {
                catalog_title: "#",
                search: "/",
                error: "[!]",
                info: "[i]",
                warning: "[!]",
                success: "[ok]",
            },
            sort: SortIcons {
                ascending: "^",
                descending: "v",
            },
        }
    }

    // Convenience accessors for commonly used icons

    #[must_use]
    pub fn in_stock(&self) -> &'static str {
        self.icons().stock.in_stock
    }

    #[must_use]
    pub fn out_of_stock(&self) -> &'static str {
        self.icons().stock.out_of_stock
    }

    #[must_use]
    pub fn catalog_title(&self) -> &'static str {
        self.icons().ui.catalog_title
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn sort_ascending(&self) -> &'static str {
        self.icons().sort.ascending
    }

    #[must_use]
    pub fn sort_descending(&self) -> &'static str {
        self.icons().sort.descending
    }
}
