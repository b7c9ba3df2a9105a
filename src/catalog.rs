//! Catalog domain model and derived list logic.
//!
//! A [`Layout`] is a furnished-room listing as the hosted catalog service
//! returns it. This module also owns the logic the list view derives from
//! the collection: discount math, search filtering and sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

fn default_available() -> bool {
    true
}

/// A room layout record.
///
/// Records written before the discount and availability fields existed omit
/// them; an absent `discount` reads as 0 and an absent `available` reads as
/// in stock. Only an explicit `available: false` marks a record out of stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Opaque identifier assigned by the catalog service.
    pub id: String,
    pub room_name: String,
    /// Width in feet.
    pub width: f64,
    /// Length in feet.
    pub length: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Undiscounted price (MRP).
    pub price: f64,
    /// Discount percentage.
    #[serde(default)]
    pub discount: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Layout {
    /// Price after the discount is applied and rounded.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        final_price(self.price, self.discount)
    }

    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }

    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        !self.available
    }
}

/// Compute the price after discount, rounded to the nearest integer.
///
/// A zero or negative discount leaves the price untouched.
#[must_use]
pub fn final_price(price: f64, discount: f64) -> f64 {
    if discount > 0.0 {
        (price - price * discount / 100.0).round()
    } else {
        price
    }
}

/// Sortable fields of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RoomName,
    Price,
    Discount,
    FinalPrice,
}

impl SortKey {
    /// Human-readable label for the status bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::RoomName => "name",
            Self::Price => "price",
            Self::Discount => "discount",
            Self::FinalPrice => "final price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current sort selection: which key, which direction.
///
/// `key: None` means server order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Advance to the next sort key: none, name, price, discount, final price.
    pub fn cycle_key(&mut self) {
        self.key = match self.key {
            None => Some(SortKey::RoomName),
            Some(SortKey::RoomName) => Some(SortKey::Price),
            Some(SortKey::Price) => Some(SortKey::Discount),
            Some(SortKey::Discount) => Some(SortKey::FinalPrice),
            Some(SortKey::FinalPrice) => None,
        };
    }

    /// Flip between ascending and descending.
    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
    }

    /// Parse a config-file sort spec such as `"price-desc"` or `"none"`.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        if spec == "none" {
            return Some(Self::default());
        }

        let (key, direction) = spec.rsplit_once('-')?;
        let key = match key {
            "name" => SortKey::RoomName,
            "price" => SortKey::Price,
            "discount" => SortKey::Discount,
            "final-price" => SortKey::FinalPrice,
            _ => return None,
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return None,
        };

        Some(Self {
            key: Some(key),
            direction,
        })
    }
}

/// Case-insensitive substring match of `query` against a room name.
///
/// A blank or whitespace-only query matches everything.
#[must_use]
pub fn search_matches(room_name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    room_name.to_lowercase().contains(&query.to_lowercase())
}

fn compare_by_key(a: &Layout, b: &Layout, key: SortKey) -> Ordering {
    match key {
        SortKey::RoomName => a.room_name.to_lowercase().cmp(&b.room_name.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Discount => a.discount.total_cmp(&b.discount),
        SortKey::FinalPrice => a.final_price().total_cmp(&b.final_price()),
    }
}

/// Derive the visible list from the full collection.
///
/// Filters by room name, then applies the selected sort. The sort is stable:
/// records comparing equal keep their server order, in both directions.
#[must_use]
pub fn filter_and_sort(layouts: &[Layout], query: &str, sort: SortConfig) -> Vec<Layout> {
    let mut view: Vec<Layout> = layouts
        .iter()
        .filter(|layout| search_matches(&layout.room_name, query))
        .cloned()
        .collect();

    if let Some(key) = sort.key {
        view.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, key);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    view
}
