use std::fs;

use env_setup::layout::{LayoutPatcher, PatchOutcome, insert_import, strip_import};
use tempfile::TempDir;

const MARKER: &str = "// [env-setup] css imports";
const IMPORT: &str = "import '../app.css';";

const LAYOUT: &str = concat!(
    "<script>\n",
    "\t// [env-setup] css imports\n",
    "\timport Header from '$lib/Header.svelte';\n",
    "</script>\n\n<slot />\n",
);

fn layout_in(dir: &TempDir, content: &str) -> LayoutPatcher {
    let path = dir.path().join("__layout.svelte");
    fs::write(&path, content).expect("write layout");
    LayoutPatcher::new(path, MARKER, IMPORT)
}

#[test]
fn inserts_after_marker_with_its_indent() {
    let patched = insert_import(LAYOUT, MARKER, IMPORT).expect("marker present");
    assert_eq!(
        patched,
        concat!(
            "<script>\n",
            "\t// [env-setup] css imports\n",
            "\timport '../app.css';\n",
            "\timport Header from '$lib/Header.svelte';\n",
            "</script>\n\n<slot />\n",
        )
    );
}

#[test]
fn inserts_after_marker_on_last_line() {
    let source = "<script>\n// [env-setup] css imports";
    let patched = insert_import(source, MARKER, IMPORT).expect("marker");
    assert_eq!(patched, "<script>\n// [env-setup] css imports\nimport '../app.css';");
    assert_eq!(strip_import(&patched, IMPORT), source);
}

#[test]
fn crlf_marker_on_last_line_round_trips() {
    let source = "<script>\r\n// [env-setup] css imports";
    let patched = insert_import(source, MARKER, IMPORT).expect("marker");
    assert_eq!(strip_import(&patched, IMPORT), source);
}

#[test]
fn strip_only_matches_the_exact_import() {
    let source = "a\nimport x;\nb\n";
    assert_eq!(strip_import(source, " import x; "), source);
}

#[test]
fn keeps_crlf_line_endings() {
    let source = "a\r\n// [env-setup] css imports\r\nb\r\n";
    let patched = insert_import(source, MARKER, IMPORT).expect("marker");
    assert_eq!(patched, "a\r\n// [env-setup] css imports\r\nimport '../app.css';\r\nb\r\n");
}

#[test]
fn insert_without_marker_is_none() {
    assert_eq!(insert_import("<slot />\n", MARKER, IMPORT), None);
}

#[test]
fn strip_removes_the_whole_line() {
    let patched = insert_import(LAYOUT, MARKER, IMPORT).expect("marker");
    assert_eq!(strip_import(&patched, IMPORT), LAYOUT);
}

#[test]
fn add_twice_matches_add_once() {
    let dir = TempDir::new().expect("temp dir");
    let patcher = layout_in(&dir, LAYOUT);

    assert_eq!(patcher.add_css_imports().expect("first add"), PatchOutcome::Inserted);
    let after_first = fs::read_to_string(patcher.path()).expect("read");

    assert_eq!(patcher.add_css_imports().expect("second add"), PatchOutcome::AlreadyPresent);
    let after_second = fs::read_to_string(patcher.path()).expect("read");

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.matches(IMPORT).count(), 1);
}

#[test]
fn remove_without_import_leaves_file_unchanged() {
    let dir = TempDir::new().expect("temp dir");
    let patcher = layout_in(&dir, LAYOUT);

    assert_eq!(patcher.remove_css_imports().expect("remove"), PatchOutcome::NotPresent);
    assert_eq!(fs::read_to_string(patcher.path()).expect("read"), LAYOUT);
}

#[test]
fn add_then_remove_restores_original() {
    let dir = TempDir::new().expect("temp dir");
    let patcher = layout_in(&dir, LAYOUT);

    patcher.add_css_imports().expect("add");
    assert_eq!(patcher.remove_css_imports().expect("remove"), PatchOutcome::Removed);
    assert_eq!(fs::read_to_string(patcher.path()).expect("read"), LAYOUT);
}

#[test]
fn missing_marker_skips_the_write() {
    let dir = TempDir::new().expect("temp dir");
    let patcher = layout_in(&dir, "<slot />\n");

    assert_eq!(patcher.add_css_imports().expect("add"), PatchOutcome::MarkerMissing);
    assert_eq!(fs::read_to_string(patcher.path()).expect("read"), "<slot />\n");
}

#[test]
fn missing_layout_is_reported_not_created() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("routes/__layout.svelte");
    let patcher = LayoutPatcher::new(path.clone(), MARKER, IMPORT);

    assert_eq!(patcher.add_css_imports().expect("add"), PatchOutcome::LayoutMissing);
    assert_eq!(patcher.remove_css_imports().expect("remove"), PatchOutcome::LayoutMissing);
    assert!(!path.exists());
}
