pub mod document;
pub mod memory;
pub mod notify;
pub mod storage;

pub use document::{CheckboxNode, EntryNode, RenderedDocument};
pub use memory::{InMemoryCheckbox, InMemoryDocument, InMemoryEntry};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use storage::{InMemoryStorage, StateStorage, StorageError};
