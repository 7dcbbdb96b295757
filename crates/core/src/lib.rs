//! # ticklist-core
//!
//! Platform-agnostic checkbox state persistence.
//!
//! This crate keeps the checked state of task-list checkboxes across full
//! re-renders of a document:
//! - **hash** / **identity**: content-derived identities for checkboxes
//! - **store** / **bulk**: the state record adapter over a key-value store
//! - **reconcile**: aligning a fresh render with stored state
//! - **presentation**: the completed/open look of an entry
//! - **plugin**: the handle the host talks to
//!
//! ## Design Principle
//!
//! The crate has **no platform dependencies**. The rendered document, the
//! durable storage and outbound notifications are all reached through the
//! traits in `ticklist-traits`, so the same engine runs against a browser DOM
//! and against in-memory fixtures.

// Re-export foundation crates
pub use ticklist_traits as traits;
pub use ticklist_types as types;

pub mod bulk;
pub mod config;
pub mod error;
pub mod hash;
pub mod identity;
pub mod plugin;
pub mod presentation;
pub mod progress;
pub mod reconcile;
pub mod store;

pub use bulk::StateExport;
pub use config::Config;
pub use error::CheckboxError;
pub use hash::content_hash;
pub use identity::assign_identity;
pub use plugin::CheckboxPlugin;
pub use reconcile::{ReconcileSummary, Reconciler, RenderTable, TrackedItem};
pub use store::StateStore;

// Re-export commonly used types from foundation crates
pub use types::{ChangeEvent, Identity, Progress, ScopeKey, StateRecord};

// Re-export platform abstraction traits
pub use traits::{
    CheckboxNode, EntryNode, InMemoryDocument, InMemoryStorage, LogNotifier, Notifier,
    RecordingNotifier, RenderedDocument, StateStorage, StorageError,
};
