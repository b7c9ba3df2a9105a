//! Catalog list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::catalog::Layout;
use crate::constants::{BADGE_OUT_OF_STOCK, EMPTY_NO_LAYOUTS, EMPTY_NO_MATCHES};
use crate::utils::format::{format_dimensions, format_price};

/// Catalog list component
pub struct CatalogList;

impl CatalogList {
    /// Render the catalog list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let title = Self::title(app);

        if app.view.is_empty() {
            // Show empty state message
            let empty_message = if app.layouts.is_empty() {
                EMPTY_NO_LAYOUTS
            } else {
                EMPTY_NO_MATCHES
            };

            let empty_list = List::new(vec![ListItem::new(empty_message)]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );

            f.render_stateful_widget(empty_list, area, &mut app.list_state.clone());
        } else {
            let items: Vec<ListItem> = app
                .view
                .iter()
                .map(|layout| Self::layout_item(layout, app))
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title)
                        .title_alignment(Alignment::Center),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );

            f.render_stateful_widget(list, area, &mut app.list_state.clone());
        }
    }

    /// List title with count and the active search query
    fn title(app: &App) -> String {
        let mut title = format!(
            "{} Room Layouts ({}/{})",
            app.icons.catalog_title(),
            app.view.len(),
            app.layouts.len()
        );

        if app.searching || !app.search_query.is_empty() {
            title.push_str(&format!(" {} {}", app.icons.search(), app.search_query));
            if app.searching {
                title.push('█');
            }
        }

        title
    }

    /// Build one list row for a layout
    fn layout_item<'a>(layout: &'a Layout, app: &App) -> ListItem<'a> {
        let currency = &app.display.currency;
        let out_of_stock = layout.is_out_of_stock();

        let stock_icon = if out_of_stock {
            app.icons.out_of_stock()
        } else {
            app.icons.in_stock()
        };

        let name_style = if out_of_stock {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::raw(stock_icon),
            Span::raw(" "),
            Span::styled(layout.room_name.as_str(), name_style),
            Span::raw("  "),
            Span::styled(
                format_dimensions(layout.width, layout.length, &app.display.dimension_unit),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
        ];

        if layout.has_discount() {
            spans.push(Span::styled(
                format!("-{}% ", crate::utils::format::format_amount(layout.discount)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format_price(currency, layout.price),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format_price(currency, layout.final_price()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format_price(currency, layout.price),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        if out_of_stock {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                BADGE_OUT_OF_STOCK,
                Style::default().fg(Color::Red),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}
