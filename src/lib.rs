//! Layoutist - A Terminal User Interface (TUI) for a room layout catalog
//!
//! This library provides a terminal-based interface for managing a catalog
//! of furnished-room listings held in a third-party hosted CRUD store:
//! listing, searching, sorting, viewing, creating, updating and deleting
//! records, with a rich interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`catalog`] - The layout record and derived list logic
//! * [`config`] - Application configuration management
//! * [`service`] - Async facade over the catalog store
//! * [`store`] - REST client for the hosted catalog resource
//! * [`ui`] - Terminal user interface components

/// Catalog domain model: layouts, discount math, search and sort
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Async facade the UI talks to
pub mod service;

/// Store abstraction and REST client for the catalog resource
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for formatting and text handling
pub mod utils;

// Re-export the core types for convenient access
pub use catalog::Layout;
pub use store::{CatalogStore, LayoutDraft, RestStore, StoreError};
