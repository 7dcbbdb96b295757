mod common;

use common::fixtures::*;
use common::TestResult;
use std::fs;
use tempfile::TempDir;
use ticklist::cli::{self, Args, Command};
use ticklist::{
    CheckboxPlugin, CliError, Config, FilesystemStorage, LogNotifier, RecordingNotifier,
    StateExport, StateStorage, STORE_FILE_NAME,
};
use ticklist_traits::InMemoryCheckbox;

type FsPlugin = CheckboxPlugin<FilesystemStorage, LogNotifier, InMemoryCheckbox>;

fn fs_plugin(dir: &TempDir) -> FsPlugin {
    CheckboxPlugin::new(
        Config::default().with_storage_prefix("fs-"),
        FilesystemStorage::new(dir.path()),
        LogNotifier,
    )
}

fn cli_args(dir: &TempDir, command: Command) -> Args {
    Args {
        store: dir.path().to_path_buf(),
        prefix: "fs-".to_string(),
        command,
    }
}

fn run_cli(dir: &TempDir, command: Command) -> Result<String, CliError> {
    let mut out = Vec::new();
    cli::run(&cli_args(dir, command), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn test_state_survives_process_restart() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new()?;

    {
        let plugin = fs_plugin(&dir);
        let doc = setup_guide();
        plugin.on_render_complete(&doc);
        plugin.set_checked(&doc, 2, true).ok_or("toggle not handled")?;
    }
    assert!(dir.path().join(STORE_FILE_NAME).exists());

    // A new plugin over the same directory sees the saved state
    let plugin = fs_plugin(&dir);
    let doc = setup_guide();
    let summary = plugin.on_render_complete(&doc);
    assert_eq!(summary.restored, 1);
    assert_completed!(doc, 0);
    assert_open!(doc, 1);
    assert_completed!(doc, 2);
    Ok(())
}

#[test]
fn test_pages_are_scoped_separately() -> TestResult {
    let dir = TempDir::new()?;
    let plugin = fs_plugin(&dir);

    let guide = task_page().at_path("/guide");
    plugin.on_render_complete(&guide);
    plugin.set_checked(&guide, 0, true);

    let faq = task_page().at_path("/faq");
    let summary = plugin.on_render_complete(&faq);
    assert_eq!(summary.restored, 0);
    assert_open!(faq, 0);

    let keys = plugin.store().list_scope_keys("fs-");
    assert_eq!(keys, vec!["fs-/guide".to_string()]);
    Ok(())
}

#[test]
fn test_export_import_moves_state_between_stores() -> TestResult {
    let source_dir = TempDir::new()?;
    let target_dir = TempDir::new()?;

    let source = fs_plugin(&source_dir);
    let doc = setup_guide();
    source.on_render_complete(&doc);
    source.set_checked(&doc, 1, true);
    let export = source.export_all();
    assert_eq!(export.len(), 1);

    let notifier = RecordingNotifier::new();
    let target = CheckboxPlugin::<_, _, InMemoryCheckbox>::new(
        Config::default().with_storage_prefix("fs-"),
        FilesystemStorage::new(target_dir.path()),
        &notifier,
    );
    assert!(target.import_all(&export));
    assert_eq!(notifier.reloads(), 1);

    let doc = setup_guide();
    target.on_render_complete(&doc);
    assert_completed!(doc, 1);
    Ok(())
}

#[test]
fn test_clear_only_touches_own_prefix() -> TestResult {
    let dir = TempDir::new()?;
    let storage = FilesystemStorage::new(dir.path());
    storage.set("fs-/a", r#"{"cb-1-0":true}"#)?;
    storage.set("fs-/b", r#"{"cb-2-0":false}"#)?;
    storage.set("other-/a", r#"{"cb-3-0":true}"#)?;

    let plugin = fs_plugin(&dir);
    assert_eq!(plugin.clear_all(None), 2);
    assert_eq!(storage.keys()?, vec!["other-/a".to_string()]);

    // An explicit prefix overrides the configured one
    assert_eq!(plugin.clear_all(Some("other-")), 1);
    assert!(storage.keys()?.is_empty());
    Ok(())
}

#[test]
fn test_export_skips_corrupt_records() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new()?;
    let storage = FilesystemStorage::new(dir.path());
    storage.set("fs-/good", r#"{"cb-1-0":true}"#)?;
    storage.set("fs-/bad", r#"{"cb-1-0":"yes"}"#)?;

    let export = fs_plugin(&dir).export_all();
    assert_eq!(export.keys().collect::<Vec<_>>(), vec!["fs-/good"]);
    Ok(())
}

#[test]
fn test_corrupt_store_file_refuses_writes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new()?;
    fs::write(dir.path().join(STORE_FILE_NAME), "{ broken")?;

    let plugin = fs_plugin(&dir);
    let doc = task_page();
    plugin.on_render_complete(&doc);
    let event = plugin.set_checked(&doc, 0, true).ok_or("toggle not handled")?;

    // The toggle still shows; the damaged file is left for the operator
    assert!(event.checked);
    assert_completed!(doc, 0);
    assert_eq!(fs::read_to_string(dir.path().join(STORE_FILE_NAME))?, "{ broken");
    Ok(())
}

#[test]
fn test_cli_export_then_import() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let source_dir = TempDir::new()?;
    let plugin = fs_plugin(&source_dir);
    let doc = task_page();
    plugin.on_render_complete(&doc);
    plugin.set_checked(&doc, 0, true);
    drop(plugin);

    let exported = run_cli(&source_dir, Command::Export)?;
    let parsed: StateExport = serde_json::from_str(&exported)?;
    assert!(parsed.contains_key("fs-/test-page"));

    let target_dir = TempDir::new()?;
    let file = target_dir.path().join("export.json");
    fs::write(&file, &exported)?;
    let report = run_cli(&target_dir, Command::Import { file })?;
    assert!(report.contains("Imported 1"));

    let shown = run_cli(
        &target_dir,
        Command::Show {
            path: "/test-page".to_string(),
        },
    )?;
    let shown: serde_json::Value = serde_json::from_str(&shown)?;
    assert_eq!(shown["key"], "fs-/test-page");
    assert_eq!(shown["states"]["cb-tpw3nu-0"], true);
    assert_eq!(shown["progress"]["checked"], 1);

    let cleared = run_cli(&target_dir, Command::Clear)?;
    assert!(cleared.contains("Removed 1"));
    assert_eq!(run_cli(&target_dir, Command::Export)?.trim(), "{}");
    Ok(())
}
