//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &mut App) {
        // Adaptive help panel size based on terminal size
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
LAYOUTIST - Room Layout Catalog Manager
=======================================

NAVIGATION
----------
j/k or arrows   Navigate layouts (down/up)
Enter or v      View layout details
Esc             Cancel action or close dialogs

CATALOG MANAGEMENT
------------------
a           Add a new layout
e           Edit selected layout
d           Delete selected layout (with confirmation)
r           Reload the catalog from the service

SEARCH & SORT
-------------
/           Search by room name (Enter keeps the filter, Esc clears)
s           Cycle sort key: none, name, price, discount, final price
S           Flip sort direction

FORM DIALOG
-----------
Tab/Down    Next field
Shift+Tab/Up  Previous field
Space       Toggle availability (on the Availability field)
Enter       Save the layout
Esc         Cancel

GENERAL CONTROLS
----------------
t           Cycle icon theme (ASCII, Unicode, emoji)
?           Toggle help panel
q           Quit application
Ctrl+C      Quit application

HELP PANEL SCROLLING
--------------------
j/k or arrows  Scroll help content
Home        Jump to top of help
End         Jump to bottom of help

LIST ROW FORMAT
---------------
Stock marker, room name, dimensions, then pricing.
A discounted row shows the discount badge, the struck-through
MRP and the final price after discount.
Out-of-stock rows are dimmed.

Press 'Esc' or '?' to close this help panel
";

        // Apply scroll offset to the content
        let lines: Vec<&str> = help_content.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_height.saturating_sub(2) as usize; // Account for borders

        // Clamp scroll offset to valid range
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = app.help_scroll_offset.min(max_scroll);

        // Extract visible portion of content
        let visible_lines: Vec<&str> = lines
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .copied()
            .collect();

        let help_text = visible_lines.join("\n");

        // Add scroll indicator if content is scrollable
        let scroll_indicator = if total_lines > visible_height {
            let scroll_percent = if max_scroll > 0 {
                (scroll_offset * 100) / max_scroll
            } else {
                0
            };
            format!("\n\n[Scroll: {scroll_percent}% - j/k to navigate, Home/End for extremes]")
        } else {
            String::new()
        };

        let final_text = format!("{help_text}{scroll_indicator}");

        let help_paragraph = Paragraph::new(final_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Help - {}/{} lines", scroll_offset + 1, total_lines))
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(help_paragraph, help_area);
    }
}
