//! Simple modal dialog indicating an in-flight store call

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

pub struct LoadingDialog;

impl LoadingDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(50, 25, f.area());

        let title = if app.saving {
            "Saving layout"
        } else if app.deleting {
            "Deleting layout"
        } else {
            "Loading layouts"
        };
        let spinner = "⟳"; // simple indicator
        let lines = vec![
            Line::from(Span::styled(
                format!("{spinner} {title}..."),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::raw("Press q to quit")),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Please wait"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        // Clear the area first to draw a modal
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
