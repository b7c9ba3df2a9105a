//! Application state and business logic

use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use crate::catalog::{filter_and_sort, Layout, SortConfig};
use crate::config::{Config, DisplayConfig};
use crate::constants::{
    ERROR_LAYOUT_CREATE_FAILED, ERROR_LAYOUT_DELETE_FAILED, ERROR_LAYOUT_FETCH_FAILED,
    ERROR_LAYOUT_UPDATE_FAILED, ERROR_LIST_FETCH_FAILED, SUCCESS_LAYOUT_ADDED,
    SUCCESS_LAYOUT_DELETED, SUCCESS_LAYOUT_UPDATED,
};
use crate::icons::IconService;
use crate::service::CatalogService;
use crate::store::StoreError;
use crate::ui::form::LayoutForm;

/// Application state
pub struct App {
    pub should_quit: bool,
    /// Collection as the store returned it (server order)
    pub layouts: Vec<Layout>,
    /// Filtered and sorted list the UI renders
    pub view: Vec<Layout>,
    pub selected_index: usize,
    pub list_state: ListState,

    // Search and sort
    pub search_query: String,
    pub searching: bool,
    pub sort: SortConfig,

    // Remote operation state
    pub loading: bool,
    pub saving: bool,
    pub deleting: bool,
    pub load_task: Option<JoinHandle<Result<Vec<Layout>, StoreError>>>,

    // Modal state
    pub delete_confirmation: Option<String>, // Layout ID to delete if confirmed
    pub viewing: Option<Layout>,
    pub form: Option<LayoutForm>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,

    // Presentation
    pub display: DisplayConfig,
    pub icons: IconService,
}

impl App {
    /// Create a new App instance from the loaded configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            layouts: Vec::new(),
            view: Vec::new(),
            selected_index: 0,
            list_state,
            search_query: String::new(),
            searching: false,
            sort: config.default_sort(),
            loading: true,
            saving: false,
            deleting: false,
            load_task: None,
            delete_confirmation: None,
            viewing: None,
            form: None,
            error_message: None,
            info_message: None,
            show_help: false,
            help_scroll_offset: 0,
            display: config.display.clone(),
            icons: IconService::default(),
        }
    }

    /// Recompute the visible list from the collection, search and sort.
    ///
    /// Keeps the selection on a valid row when the list shrinks.
    pub fn apply_filters(&mut self) {
        self.view = filter_and_sort(&self.layouts, &self.search_query, self.sort);

        if self.view.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.view.len() {
                self.selected_index = self.view.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// The currently selected layout in the visible list
    #[must_use]
    pub fn selected_layout(&self) -> Option<&Layout> {
        self.view.get(self.selected_index)
    }

    pub fn next_layout(&mut self) {
        if !self.view.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.view.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_layout(&mut self) {
        if !self.view.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.view.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }

    // --- Loading ---

    /// Fetch the collection on a background task; the draw loop picks up the
    /// result via [`App::process_load_task`].
    pub fn spawn_reload(&mut self, service: &CatalogService) {
        if self.load_task.is_some() {
            return;
        }
        self.loading = true;
        let service = service.clone();
        self.load_task = Some(tokio::spawn(async move { service.load_layouts().await }));
    }

    /// If a background load finished, fold its result into the state.
    pub async fn process_load_task(&mut self) {
        let finished = self.load_task.as_ref().is_some_and(JoinHandle::is_finished);
        if !finished {
            return;
        }

        if let Some(handle) = self.load_task.take() {
            match handle.await {
                Ok(Ok(layouts)) => {
                    self.layouts = layouts;
                    self.apply_filters();
                }
                Ok(Err(e)) => {
                    self.error_message = Some(format!("{ERROR_LIST_FETCH_FAILED}: {e}"));
                }
                Err(join_err) => {
                    self.error_message = Some(format!("{ERROR_LIST_FETCH_FAILED}: {join_err}"));
                }
            }
            self.loading = false;
        }
    }

    // --- Search ---

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// Keep the current filter and leave search input mode
    pub fn confirm_search(&mut self) {
        self.searching = false;
    }

    /// Drop the filter and leave search input mode
    pub fn cancel_search(&mut self) {
        self.searching = false;
        self.search_query.clear();
        self.apply_filters();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.apply_filters();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.apply_filters();
    }

    // --- Sort ---

    pub fn cycle_sort_key(&mut self) {
        self.sort.cycle_key();
        self.apply_filters();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort.toggle_direction();
        self.apply_filters();
    }

    // --- Detail view ---

    pub fn open_detail(&mut self) {
        self.viewing = self.selected_layout().cloned();
    }

    pub fn close_detail(&mut self) {
        self.viewing = None;
    }

    // --- Create / edit form ---

    /// Open a blank form for a new layout
    pub fn start_create(&mut self) {
        self.form = Some(LayoutForm::new());
    }

    /// Open the form pre-filled from a fresh copy of the selected record.
    ///
    /// The record is refetched by id so edits start from what the store
    /// holds, not from the possibly stale row.
    pub async fn start_edit(&mut self, service: &CatalogService) {
        let Some(id) = self.selected_layout().map(|l| l.id.clone()) else {
            return;
        };

        match service.get_layout(&id).await {
            Ok(layout) => {
                self.form = Some(LayoutForm::from_layout(&layout));
            }
            Err(e) => {
                self.error_message = Some(format!("{ERROR_LAYOUT_FETCH_FAILED}: {e}"));
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validate the form and send it to the store.
    ///
    /// Validation failures surface as an error message and keep the form
    /// open. On success the form closes and the collection is reloaded.
    pub async fn submit_form(&mut self, service: &CatalogService) {
        let Some(form) = self.form.as_ref() else {
            return;
        };

        let editing_id = form.editing_id().map(str::to_string);
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        self.saving = true;
        self.clear_messages();

        let result = match editing_id.as_deref() {
            Some(id) => service
                .update_layout(id, &draft)
                .await
                .map(|_| SUCCESS_LAYOUT_UPDATED)
                .map_err(|e| format!("{ERROR_LAYOUT_UPDATE_FAILED}: {e}")),
            None => service
                .create_layout(&draft)
                .await
                .map(|_| SUCCESS_LAYOUT_ADDED)
                .map_err(|e| format!("{ERROR_LAYOUT_CREATE_FAILED}: {e}")),
        };

        match result {
            Ok(message) => {
                self.form = None;
                self.info_message = Some(message.to_string());
                self.spawn_reload(service);
            }
            Err(message) => {
                self.error_message = Some(message);
            }
        }

        self.saving = false;
    }

    // --- Delete ---

    /// Ask for confirmation before deleting the selected layout
    pub fn start_delete(&mut self) {
        if let Some(layout) = self.selected_layout() {
            self.delete_confirmation = Some(layout.id.clone());
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = None;
    }

    /// Delete the confirmed layout and drop it from the in-memory
    /// collection; no refetch is needed.
    pub async fn delete_confirmed(&mut self, service: &CatalogService) {
        let Some(id) = self.delete_confirmation.take() else {
            return;
        };

        self.deleting = true;
        self.clear_messages();

        match service.delete_layout(&id).await {
            Ok(()) => {
                self.layouts.retain(|layout| layout.id != id);
                self.apply_filters();
                self.info_message = Some(SUCCESS_LAYOUT_DELETED.to_string());
            }
            Err(e) => {
                self.error_message = Some(format!("{ERROR_LAYOUT_DELETE_FAILED}: {e}"));
            }
        }

        self.deleting = false;
    }
}
