//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::constants::NAME_PREVIEW_MAX_CHARS;
use crate::utils::text::truncate;

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(layout_id) = &app.delete_confirmation else {
            return;
        };

        if let Some(layout) = app.view.iter().find(|l| &l.id == layout_id) {
            let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
            f.render_widget(Clear, confirm_area);

            let name_preview = truncate(&layout.room_name, NAME_PREVIEW_MAX_CHARS);

            let confirm_text = format!(
                "Delete this layout?\n\n\"{name_preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
            );

            let confirm_paragraph = Paragraph::new(confirm_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Confirm Delete")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(confirm_paragraph, confirm_area);
        }
    }
}
