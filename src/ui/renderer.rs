//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{
        DeleteConfirmationDialog, DetailDialog, ErrorDialog, InfoDialog, LayoutFormDialog,
        LoadingDialog,
    },
    CatalogList, HelpPanel, StatusBar,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::service::CatalogService;
use crate::store::RestStore;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Build the catalog service from configuration
    let store = RestStore::new(
        &config.api.base_url,
        &config.api.resource,
        Duration::from_secs(config.api.timeout_seconds),
    )?;
    let service = CatalogService::new(Arc::new(store));

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state and start the initial fetch in the background
    let mut app = App::new(&config);
    app.spawn_reload(&service);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &service).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    service: &CatalogService,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout to allow for async operations
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app, service).await?;
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next loop iteration
                }
                _ => {}
            }
        }

        // If a background fetch finished, fold its result into the state
        app.process_load_task().await;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());

    // Render components
    CatalogList::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    // Render loading dialog while a fetch or store call is in flight
    if app.loading || app.saving || app.deleting {
        LoadingDialog::render(f, app);
    }

    if app.form.is_some() {
        LayoutFormDialog::render(f, app);
    }

    if app.viewing.is_some() {
        DetailDialog::render(f, app);
    }

    if app.delete_confirmation.is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    // Render overlays - error messages have priority over info messages
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    } else if app.info_message.is_some() {
        InfoDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
