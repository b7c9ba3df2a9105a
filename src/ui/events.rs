//! Event handling and key bindings

use super::app::App;
use crate::service::CatalogService;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App, service: &CatalogService) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle the create/edit form dialog
            if app.form.is_some() {
                return handle_form_mode(key, app, service).await;
            }

            // Handle error/info message dialogs
            if app.error_message.is_some() || app.info_message.is_some() {
                return handle_message_dialog(key, app);
            }

            // Handle delete confirmation dialog
            if app.delete_confirmation.is_some() {
                return handle_delete_confirmation(key, app, service).await;
            }

            // Handle the detail view
            if app.viewing.is_some() {
                return Ok(handle_detail_view(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle search input mode
            if app.searching {
                return Ok(handle_search_mode(key, app));
            }

            // Handle normal navigation and actions
            return handle_normal_mode(key, app, service).await;
        }
    }
    Ok(false)
}

/// Handle events when the create/edit form is open
async fn handle_form_mode(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &CatalogService,
) -> Result<bool, anyhow::Error> {
    use crate::ui::form::FormField;

    let on_toggle_field = app
        .form
        .as_ref()
        .is_some_and(|form| form.focused == FormField::Available);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form.as_mut() {
                form.next_field();
            }
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form.as_mut() {
                form.previous_field();
            }
            Ok(true)
        }
        KeyCode::Left | KeyCode::Right if on_toggle_field => {
            if let Some(form) = app.form.as_mut() {
                form.toggle_available();
            }
            Ok(true)
        }
        KeyCode::Char(' ') if on_toggle_field => {
            if let Some(form) = app.form.as_mut() {
                form.toggle_available();
            }
            Ok(true)
        }
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            if let Some(form) = app.form.as_mut() {
                form.insert_char(c);
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form.as_mut() {
                form.backspace();
            }
            Ok(true)
        }
        KeyCode::Enter => {
            app.submit_form(service).await;
            Ok(true)
        }
        KeyCode::Esc => {
            app.cancel_form();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys while the form is open
    }
}

/// Handle events when an error or info dialog is shown
fn handle_message_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'q') => {
            app.clear_messages();
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle events when the delete confirmation dialog is open
async fn handle_delete_confirmation(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &CatalogService,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            // Confirm delete
            app.delete_confirmed(service).await;
            Ok(true)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            // Cancel delete
            app.cancel_delete();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys during confirmation
    }
}

/// Handle events when the detail view is open
fn handle_detail_view(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.close_detail();
            true
        }
        _ => false,
    }
}

/// Handle events when help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::PageUp => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(10);
            true
        }
        KeyCode::PageDown => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(10);
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::End => {
            app.help_scroll_offset = usize::MAX; // Will be clamped in UI
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events while typing a search query
fn handle_search_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.push_search_char(c);
            true
        }
        KeyCode::Backspace => {
            app.pop_search_char();
            true
        }
        KeyCode::Enter => {
            // Keep the filter
            app.confirm_search();
            true
        }
        KeyCode::Esc => {
            // Drop the filter
            app.cancel_search();
            true
        }
        _ => false,
    }
}

/// Handle normal mode events (navigation and actions)
async fn handle_normal_mode(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &CatalogService,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_layout();
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_layout();
            Ok(true)
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            app.open_detail();
            Ok(true)
        }
        KeyCode::Char('a') => {
            app.start_create();
            Ok(true)
        }
        KeyCode::Char('e') => {
            app.start_edit(service).await;
            Ok(true)
        }
        KeyCode::Char('d') => {
            app.start_delete();
            Ok(true)
        }
        KeyCode::Char('r') => {
            app.spawn_reload(service);
            Ok(true)
        }
        KeyCode::Char('/') => {
            app.start_search();
            Ok(true)
        }
        KeyCode::Char('s') => {
            app.cycle_sort_key();
            Ok(true)
        }
        KeyCode::Char('S') => {
            app.toggle_sort_direction();
            Ok(true)
        }
        KeyCode::Char('t') => {
            app.icons.cycle_icon_theme();
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll_offset = 0;
            Ok(true)
        }
        KeyCode::Esc if !app.search_query.is_empty() => {
            // Clear an applied filter
            app.cancel_search();
            Ok(true)
        }
        _ => Ok(false),
    }
}
