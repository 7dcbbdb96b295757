//! # ticklist
//!
//! Persistent checkbox state for task lists that are re-rendered from
//! markup. Each checkbox gets an identity derived from its text and
//! position, so a ticked item is still ticked after the page is rendered
//! again, while the stored record for the page is kept free of items that
//! no longer exist.
//!
//! This crate re-exports the platform-agnostic engine and the native
//! filesystem store, and ships the `ticklist` operator CLI. The browser
//! plugin lives in `ticklist-wasm`.
//!
//! ```ignore
//! use ticklist::{CheckboxPlugin, Config, FilesystemStorage, LogNotifier};
//!
//! let plugin = CheckboxPlugin::new(Config::default(), FilesystemStorage::new("state"), LogNotifier);
//! let summary = plugin.on_render_complete(&document);
//! ```

pub mod cli;
pub mod error;

pub use error::CliError;

pub use ticklist_core::*;
pub use ticklist_storage::{FilesystemStorage, STORE_FILE_NAME};
