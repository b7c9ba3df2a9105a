//! Form state and payload coercion for the create/edit dialog.
//!
//! The dialog edits plain text buffers; coercion to a typed draft happens on
//! submit. Numeric fields must parse, except discount which falls back to 0
//! the way the catalog treats a blank discount.

use crate::catalog::Layout;
use crate::store::LayoutDraft;
use crate::utils::format::format_amount;

/// Fields of the layout form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    RoomName,
    Width,
    Length,
    Image,
    Notes,
    Price,
    Discount,
    Available,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::RoomName,
        FormField::Width,
        FormField::Length,
        FormField::Image,
        FormField::Notes,
        FormField::Price,
        FormField::Discount,
        FormField::Available,
    ];

    /// Field title shown on the input box.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::RoomName => "Room Name",
            Self::Width => "Width (ft)",
            Self::Length => "Length (ft)",
            Self::Image => "Image URL",
            Self::Notes => "Notes",
            Self::Price => "MRP",
            Self::Discount => "Discount (%)",
            Self::Available => "Availability",
        }
    }

    #[must_use]
    fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Validation errors raised when coercing the form into a draft.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a number")]
    Invalid(&'static str),
}

/// Editable state of the create/edit dialog.
#[derive(Debug, Clone)]
pub struct LayoutForm {
    pub room_name: String,
    pub width: String,
    pub length: String,
    pub image: String,
    pub notes: String,
    pub price: String,
    pub discount: String,
    pub available: bool,
    pub focused: FormField,
    editing_id: Option<String>,
}

impl LayoutForm {
    /// Blank form for creating a new layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            room_name: String::new(),
            width: String::new(),
            length: String::new(),
            image: String::new(),
            notes: String::new(),
            price: String::new(),
            discount: String::new(),
            available: true,
            focused: FormField::RoomName,
            editing_id: None,
        }
    }

    /// Form pre-filled from an existing record, for editing.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            room_name: layout.room_name.clone(),
            width: format_amount(layout.width),
            length: format_amount(layout.length),
            image: layout.image.clone().unwrap_or_default(),
            notes: layout.notes.clone().unwrap_or_default(),
            price: format_amount(layout.price),
            discount: format_amount(layout.discount),
            available: layout.available,
            focused: FormField::RoomName,
            editing_id: Some(layout.id.clone()),
        }
    }

    /// The id of the record being edited, if this is an edit form.
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Dialog title matching the form mode.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Layout"
        } else {
            "Add New Layout"
        }
    }

    /// Move focus to the next field, wrapping at the end.
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field, wrapping at the start.
    pub fn previous_field(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Type a character into the focused field.
    ///
    /// The availability field is a toggle, not a text buffer.
    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
    }

    /// Flip the availability toggle.
    pub fn toggle_available(&mut self) {
        self.available = !self.available;
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::RoomName => Some(&mut self.room_name),
            FormField::Width => Some(&mut self.width),
            FormField::Length => Some(&mut self.length),
            FormField::Image => Some(&mut self.image),
            FormField::Notes => Some(&mut self.notes),
            FormField::Price => Some(&mut self.price),
            FormField::Discount => Some(&mut self.discount),
            FormField::Available => None,
        }
    }

    /// Display text for a field.
    #[must_use]
    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::RoomName => &self.room_name,
            FormField::Width => &self.width,
            FormField::Length => &self.length,
            FormField::Image => &self.image,
            FormField::Notes => &self.notes,
            FormField::Price => &self.price,
            FormField::Discount => &self.discount,
            FormField::Available => {
                if self.available {
                    "In Stock"
                } else {
                    "Out of Stock"
                }
            }
        }
    }

    /// Coerce the buffers into a typed draft payload.
    ///
    /// Room name, width, length and price are required; width, length and
    /// price must parse as numbers. A blank or unparseable discount becomes
    /// 0. Blank image and notes become absent rather than empty strings.
    pub fn to_draft(&self) -> Result<LayoutDraft, FormError> {
        let room_name = self.room_name.trim();
        if room_name.is_empty() {
            return Err(FormError::Required("Room name"));
        }

        let width = parse_required(&self.width, "Width")?;
        let length = parse_required(&self.length, "Length")?;
        let price = parse_required(&self.price, "MRP")?;
        let discount = self.discount.trim().parse::<f64>().unwrap_or(0.0);

        Ok(LayoutDraft {
            room_name: room_name.to_string(),
            width,
            length,
            image: optional_text(&self.image),
            notes: optional_text(&self.notes),
            price,
            discount,
            available: self.available,
        })
    }
}

impl Default for LayoutForm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_required(buffer: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    trimmed.parse::<f64>().map_err(|_| FormError::Invalid(field))
}

fn optional_text(buffer: &str) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
