//! Create/edit form dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Clear,
    Frame,
};

use super::super::super::app::App;
use super::super::super::form::FormField;
use super::super::super::layout::LayoutManager;
use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::FORM_DIALOG_WIDTH_PERCENT;

/// Create/edit form dialog component
pub struct LayoutFormDialog;

impl LayoutFormDialog {
    /// Render the layout form dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(form) = &app.form else {
            return;
        };

        // One 3-line box per field, one line of instructions, plus borders
        let field_count = FormField::ALL.len() as u16;
        let dialog_height = field_count * 3 + 3;
        let dialog_area = LayoutManager::centered_rect_lines(FORM_DIALOG_WIDTH_PERCENT, dialog_height, f.area());
        f.render_widget(Clear, dialog_area);

        let theme_color = if form.is_edit() { Color::Yellow } else { Color::Green };
        let block = create_dialog_block(form.title(), theme_color);
        f.render_widget(block, dialog_area);

        let mut constraints: Vec<Constraint> = FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(dialog_area);

        for (index, field) in FormField::ALL.iter().enumerate() {
            let focused = form.focused == *field;
            let input = create_input_paragraph(form.field_text(*field), field.title(), focused);
            f.render_widget(input, rows[index]);
        }

        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, rows[FormField::ALL.len()]);
    }
}
