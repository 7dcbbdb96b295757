/// Asserts that the checkbox at `$ordinal` is ticked and its entry shows the
/// completed look.
#[macro_export]
macro_rules! assert_completed {
    ($doc:expr, $ordinal:expr) => {{
        use ticklist_traits::{CheckboxNode, EntryNode};
        let checkbox = $doc
            .checkbox($ordinal)
            .unwrap_or_else(|| panic!("no checkbox #{}", $ordinal));
        assert!(checkbox.is_checked(), "checkbox #{} should be checked", $ordinal);
        let target = checkbox.styling_target().expect("styling target");
        assert!(
            target.has_class("checked"),
            "entry #{} should carry the 'checked' class",
            $ordinal
        );
    }};
}

/// Asserts that the checkbox at `$ordinal` is open and its entry has no
/// completed look.
#[macro_export]
macro_rules! assert_open {
    ($doc:expr, $ordinal:expr) => {{
        use ticklist_traits::{CheckboxNode, EntryNode};
        let checkbox = $doc
            .checkbox($ordinal)
            .unwrap_or_else(|| panic!("no checkbox #{}", $ordinal));
        assert!(!checkbox.is_checked(), "checkbox #{} should be open", $ordinal);
        let target = checkbox.styling_target().expect("styling target");
        assert!(
            !target.has_class("checked"),
            "entry #{} should not carry the 'checked' class",
            $ordinal
        );
        assert_eq!(target.style("text-decoration"), None);
    }};
}
