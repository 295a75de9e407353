use assert_cmd::Command;
use iconstamp::PLACEHOLDER_PNG;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn iconstamp() -> Command {
    Command::cargo_bin("iconstamp").unwrap()
}

#[test]
fn default_run_writes_standard_icon_set() {
    let dir = TempDir::new().unwrap();

    iconstamp().current_dir(dir.path()).assert().success();

    for size in [16u32, 48, 128] {
        let path = dir.path().join("icons").join(format!("icon{}.png", size));
        assert_eq!(fs::read(&path).unwrap(), PLACEHOLDER_PNG, "bad payload for size {}", size);
    }
}

#[test]
fn rerun_produces_identical_files() {
    let dir = TempDir::new().unwrap();

    iconstamp().current_dir(dir.path()).assert().success();
    let first = fs::read(dir.path().join("icons/icon128.png")).unwrap();

    iconstamp().current_dir(dir.path()).assert().success();
    let second = fs::read(dir.path().join("icons/icon128.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_output_directory_is_reused() {
    let dir = TempDir::new().unwrap();
    let icons = dir.path().join("icons");
    fs::create_dir_all(&icons).unwrap();
    fs::write(icons.join("notes.txt"), "hands off").unwrap();

    iconstamp().current_dir(dir.path()).assert().success();

    // Pre-existing unrelated content survives
    assert_eq!(fs::read_to_string(icons.join("notes.txt")).unwrap(), "hands off");
    assert!(icons.join("icon16.png").exists());
}

#[test]
fn custom_directory_and_sizes() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .args(["assets/branding", "--sizes", "32,64", "--template", "logo-{size}.png"])
        .assert()
        .success();

    let out = dir.path().join("assets/branding");
    assert_eq!(fs::read(out.join("logo-32.png")).unwrap(), PLACEHOLDER_PNG);
    assert_eq!(fs::read(out.join("logo-64.png")).unwrap(), PLACEHOLDER_PNG);
    assert!(!out.join("logo-16.png").exists());
}

#[test]
fn dry_run_touches_nothing() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon16.png"));

    assert!(!dir.path().join("icons").exists());
}

#[test]
fn json_output_contains_report() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .args(["--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"generated_at\""))
        .stdout(predicate::str::contains("icon128.png"));
}

#[test]
fn quiet_run_is_silent_on_stdout() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("icons/icon48.png").exists());
}

#[test]
fn generate_config_writes_sample_toml() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("iconstamp.toml"));

    let content = fs::read_to_string(dir.path().join("iconstamp.toml")).unwrap();
    assert!(content.contains("[assets]"));
    assert!(content.contains("filename_template"));
}

#[test]
fn config_file_drives_generation() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("iconstamp.toml"),
        "[assets]\nsizes = [24]\nfilename_template = \"badge{size}.png\"\n\n[output]\ndirectory = \"out\"\n",
    )
    .unwrap();

    iconstamp().current_dir(dir.path()).assert().success();

    assert_eq!(
        fs::read(dir.path().join("out/badge24.png")).unwrap(),
        PLACEHOLDER_PNG
    );
}

#[test]
fn invalid_sizes_exit_with_config_code() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .args(["--sizes", "16,zero"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!dir.path().join("icons").exists());
}

#[test]
fn traversal_template_is_rejected() {
    let dir = TempDir::new().unwrap();

    iconstamp()
        .current_dir(dir.path())
        .args(["--template", "../escape-{size}.png"])
        .assert()
        .code(2);

    assert!(!dir.path().join("escape-16.png").exists());
}
