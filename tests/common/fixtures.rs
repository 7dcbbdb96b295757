use ticklist_traits::InMemoryDocument;

/// The two-item page most scenarios start from.
pub fn task_page() -> InMemoryDocument {
    InMemoryDocument::new("/test-page")
        .with_item("Task 1", false)
        .with_item("Task 2", false)
}

/// A setup checklist with one item already ticked in the markup.
pub fn setup_guide() -> InMemoryDocument {
    InMemoryDocument::new("/guide/setup")
        .with_item("Install the CLI", true)
        .with_item("Create a config file", false)
        .with_item("Run the first sync", false)
}

/// The same page after its author inserted a new first item.
pub fn setup_guide_with_prelude() -> InMemoryDocument {
    InMemoryDocument::new("/guide/setup")
        .with_item("Read the overview", false)
        .with_item("Install the CLI", true)
        .with_item("Create a config file", false)
        .with_item("Run the first sync", false)
}

/// A page with `count` distinct items.
pub fn long_page(count: usize) -> InMemoryDocument {
    (0..count).fold(InMemoryDocument::new("/long"), |doc, i| {
        doc.with_item(format!("Item number {}", i), false)
    })
}

/// A 60-character item text; only its first 50 characters are hashed.
pub fn long_text(suffix: &str) -> String {
    format!("{}{}", "x".repeat(50), suffix)
}
