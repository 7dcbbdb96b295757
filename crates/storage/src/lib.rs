//! Storage backends for ticklist.
//!
//! This crate provides platform-specific implementations of the
//! `StateStorage` trait from ticklist-traits.
//!
//! ## Available Backends
//!
//! - [`FilesystemStorage`]: Persists to a JSON file on the local filesystem
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory backend from ticklist-traits:
//! - [`InMemoryStorage`]: Volatile storage for tests and embedding

mod filesystem;

pub use filesystem::{FilesystemStorage, LOCK_FILE_NAME, STORE_FILE_NAME};

// Re-export the in-memory backend from ticklist-traits for convenience
pub use ticklist_traits::InMemoryStorage;
