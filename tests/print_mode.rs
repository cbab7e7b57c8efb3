use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const SCENARIO: &str = r#"{
    "version": "1.0.0",
    "default": "Checkbox",
    "classes": [
        { "name": "Root", "default_css": "background: black;", "listed": false },
        { "name": "Button", "parent": "Root" },
        { "name": "Checkbox", "parent": "Button", "default_css": "width: 10;", "children": ["Button", "Button"] }
    ]
}"#;

fn run(args: &[&str], config_home: &Path) -> (i32, String, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_textual-dissect"))
        .args(args)
        // Keep the user's real config out of the picture.
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn textual-dissect");
    let status = out.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    (status, stdout, stderr)
}

#[test]
fn prints_catalog_default_when_no_widget_named() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, SCENARIO).unwrap();

    let (code, stdout, stderr) = run(
        &["--print", "--catalog", catalog.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(code, 0, "print failed: {stderr}");
    assert!(stdout.starts_with("Checkbox\n"));
    assert!(stdout.contains("  Checkbox\n  └─ Button\n     └─ Root\n"));
    assert!(stdout.contains("── Button (inherited, 1 up) ──\n(no default CSS)\n"));
    // Declared twice, listed once.
    assert!(stdout.ends_with("Child widgets\n  Button\n"));
}

#[test]
fn named_widget_overrides_default() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, SCENARIO).unwrap();

    let (code, stdout, _) = run(
        &["Button", "--print", "--catalog", catalog.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Button\n"));
    assert!(stdout.ends_with("Child widgets\n  (none)\n"));
}

#[test]
fn unknown_widget_fails_with_not_found() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, SCENARIO).unwrap();

    let (code, stdout, stderr) = run(
        &["Unknown", "--print", "--catalog", catalog.to_str().unwrap()],
        dir.path(),
    );
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("widget class `Unknown` is not in the catalog"), "{stderr}");
}

#[test]
fn empty_catalog_fails_at_startup() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("empty.json");
    std::fs::write(&catalog, r#"{ "classes": [] }"#).unwrap();

    let (code, _, stderr) = run(&["--print", "--catalog", catalog.to_str().unwrap()], dir.path());
    assert_ne!(code, 0);
    assert!(stderr.contains("no widget classes"), "{stderr}");
}

#[test]
fn cyclic_catalog_is_reported() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("cyclic.json");
    std::fs::write(
        &catalog,
        r#"{ "classes": [{ "name": "A", "parent": "B" }, { "name": "B", "parent": "A" }] }"#,
    )
    .unwrap();

    let (code, _, stderr) = run(&["A", "--print", "--catalog", catalog.to_str().unwrap()], dir.path());
    assert_ne!(code, 0);
    assert!(stderr.contains("inheritance cycle"), "{stderr}");
}

#[test]
fn bundled_catalog_and_config_default_widget() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("textual-dissect");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "default_widget = DataTable\n").unwrap();

    let (code, stdout, stderr) = run(&["--print"], dir.path());
    assert_eq!(code, 0, "print failed: {stderr}");
    assert!(stdout.starts_with("DataTable\n"));
    assert!(stdout.contains("widgets/data_table"));
    assert!(stdout.contains("└─ ScrollView"));
    assert!(stdout.contains("── Widget (inherited,"));
}
