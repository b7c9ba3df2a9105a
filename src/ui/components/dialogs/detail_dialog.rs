//! Detail view dialog component

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::create_dialog_block;
use crate::constants::{
    BADGE_IN_STOCK, BADGE_OUT_OF_STOCK, DETAIL_DIALOG_HEIGHT_PERCENT, DETAIL_DIALOG_WIDTH_PERCENT,
    NO_IMAGE_PLACEHOLDER,
};
use crate::utils::format::{format_amount, format_dimensions, format_price};

/// Detail view dialog component
pub struct DetailDialog;

impl DetailDialog {
    /// Render the detail dialog for the viewed layout
    pub fn render(f: &mut Frame, app: &App) {
        let Some(layout) = &app.viewing else {
            return;
        };

        let area = LayoutManager::centered_rect(
            DETAIL_DIALOG_WIDTH_PERCENT,
            DETAIL_DIALOG_HEIGHT_PERCENT,
            f.area(),
        );
        f.render_widget(Clear, area);

        let currency = &app.display.currency;
        let mut lines: Vec<Line> = Vec::new();

        // Stock badge
        let (badge_icon, badge_text, badge_color) = if layout.is_out_of_stock() {
            (app.icons.out_of_stock(), BADGE_OUT_OF_STOCK, Color::Red)
        } else {
            (app.icons.in_stock(), BADGE_IN_STOCK, Color::Green)
        };
        lines.push(Line::from(Span::styled(
            format!("{badge_icon} {badge_text}"),
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Dimensions
        lines.push(Line::from(vec![
            Span::styled("Dimensions: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_dimensions(layout.width, layout.length, &app.display.dimension_unit)),
        ]));

        // Image URL, or a placeholder when absent
        match &layout.image {
            Some(url) => lines.push(Line::from(vec![
                Span::styled("Image: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(url.clone(), Style::default().fg(Color::Blue)),
            ])),
            None => lines.push(Line::from(Span::styled(
                NO_IMAGE_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))),
        }

        // Notes
        if app.display.show_notes {
            if let Some(notes) = &layout.notes {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    notes.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        lines.push(Line::from(""));

        // Pricing: discounted records show the badge, the struck MRP and the
        // final price; others show the MRP alone
        if layout.has_discount() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("-{}% ", format_amount(layout.discount)),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format_price(currency, layout.price),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                ),
                Span::raw("  "),
                Span::styled(
                    format_price(currency, layout.final_price()),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format_price(currency, layout.price),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::Gray),
        )));

        let title = format!(" {} ", layout.room_name);
        let paragraph = Paragraph::new(lines)
            .block(create_dialog_block(&title, Color::Cyan))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
