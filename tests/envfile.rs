use std::fs;

use env_setup::envfile::{
    check_config_dir, copy_profile, ensure_config_dir, load_profile, unexpected_entries,
};
use env_setup::error::AppError;
use tempfile::TempDir;

fn config_dir_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for name in files {
        fs::write(dir.path().join(name), format!("NAME={name}\n")).expect("write profile");
    }
    dir
}

#[test]
fn creates_missing_config_dir_once() {
    let root = TempDir::new().expect("temp dir");
    let config_dir = root.path().join("scripts/config");

    assert!(ensure_config_dir(&config_dir).expect("create"));
    assert!(config_dir.is_dir());
    assert!(!ensure_config_dir(&config_dir).expect("exists"));
    assert!(unexpected_entries(&config_dir).expect("list").is_empty());
}

#[test]
fn full_allow_list_passes_the_check() {
    let dir = config_dir_with(&[
        ".env.local",
        ".env.dev",
        ".env.development",
        ".env.prod",
        ".env.production",
        ".env.test",
    ]);

    check_config_dir(dir.path()).expect("allow-listed files only");
}

#[test]
fn reports_every_unexpected_file_sorted() {
    let dir = config_dir_with(&[".env.local", "secrets.txt", ".env", "notes.md"]);

    let err = check_config_dir(dir.path()).expect_err("unexpected files");
    match err {
        AppError::UnexpectedConfigFiles { files, .. } => {
            assert_eq!(files, [".env", "notes.md", "secrets.txt"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn subdirectories_count_as_unexpected() {
    let dir = config_dir_with(&[".env.local"]);
    fs::create_dir(dir.path().join("backup")).expect("subdir");

    assert_eq!(unexpected_entries(dir.path()).expect("list"), ["backup"]);
}

#[test]
fn loads_pairs_skipping_comments_and_blanks() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(".env.development");
    fs::write(
        &path,
        "# api\nAPI_URL=https://dev.example.com\n\nKNOW_APP_NAME=\"know app\"\nEMPTY=\n",
    )
    .expect("write profile");

    let profile = load_profile(&path).expect("profile");
    assert_eq!(profile.len(), 3);
    assert_eq!(profile.get("API_URL"), Some("https://dev.example.com"));
    assert_eq!(profile.get("KNOW_APP_NAME"), Some("know app"));
    assert_eq!(profile.get("EMPTY"), Some(""));
    assert_eq!(profile.keys().collect::<Vec<_>>(), ["API_URL", "KNOW_APP_NAME", "EMPTY"]);
}

#[test]
fn loading_does_not_touch_process_env() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(".env.local");
    fs::write(&path, "ENV_SETUP_LOADER_PROBE=1\n").expect("write profile");

    load_profile(&path).expect("profile");
    assert!(std::env::var("ENV_SETUP_LOADER_PROBE").is_err());
}

#[test]
fn missing_profile_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_profile(&dir.path().join(".env.local")).expect_err("missing profile");
    assert!(matches!(err, AppError::ProfileNotFound { .. }));
}

#[test]
fn malformed_profile_is_a_load_error_without_contents() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(".env.production");
    fs::write(&path, "SECRET=hunter2\nthis is not valid\n").expect("write profile");

    let err = load_profile(&path).expect_err("malformed profile");
    assert!(matches!(err, AppError::ProfileLoad { .. }));
    assert!(!err.to_string().contains("this is not valid"));
}

#[test]
fn copy_overwrites_destination_byte_for_byte() {
    let dir = TempDir::new().expect("temp dir");
    let profile = dir.path().join(".env.production");
    let dest = dir.path().join(".env");
    let content = b"A=1\r\nB='two words'\n# trailing comment";
    fs::write(&profile, content).expect("write profile");
    fs::write(&dest, "OLD=stale\nMORE=lines\nTHAN=source\n").expect("write old env");

    let bytes = copy_profile(&profile, &dest).expect("copy");
    assert_eq!(bytes, content.len() as u64);
    assert_eq!(fs::read(&dest).expect("read dest"), content);
}
