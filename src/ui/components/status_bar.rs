//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::catalog::SortDirection;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.loading {
            "Loading layouts...".to_string()
        } else if app.saving {
            "Saving layout...".to_string()
        } else if app.deleting {
            "Deleting layout...".to_string()
        } else if app.searching {
            "Type to filter by room name • Enter: keep filter • Esc: clear".to_string()
        } else {
            // Show the sort selection plus helpful shortcuts
            let sort = match app.sort.key {
                Some(key) => {
                    let arrow = match app.sort.direction {
                        SortDirection::Ascending => app.icons.sort_ascending(),
                        SortDirection::Descending => app.icons.sort_descending(),
                    };
                    format!("sort: {} {arrow}", key.label())
                }
                None => "sort: none".to_string(),
            };
            format!("{sort} • a: add • e: edit • d: delete • /: search • s/S: sort • r: reload • ?: help • q: quit")
        };

        let status_color = if app.loading || app.saving || app.deleting {
            Color::Yellow
        } else if app.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
