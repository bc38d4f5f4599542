// Integration tests for discovery and whole-project instrumentation

use covermark::discovery::{list_dir, list_sources};
use covermark::project::{instrument_file, instrument_project, Destination};
use covermark::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(&path, contents).expect("write file");
    path
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_list_dir_init_first() {
    let dir = TempDir::new().unwrap();
    for name in ["b.js", "a.js", "init.js", "c.js", "notes.txt"] {
        touch(dir.path(), name, "");
    }

    let files = list_dir(dir.path(), &Config::default()).unwrap();
    assert_eq!(names(&files), vec!["init.js", "a.js", "b.js", "c.js"]);
}

#[test]
fn test_list_sources_with_tests() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app.js", "");
    touch(dir.path(), "init.js", "");
    touch(dir.path(), "tests/app.js", "");
    touch(dir.path(), "tests/init.js", "");
    touch(dir.path(), "tests/zeta.js", "");

    let set = list_sources(dir.path(), &Config::default()).unwrap();
    assert_eq!(names(&set.sources), vec!["init.js", "app.js"]);
    assert_eq!(names(&set.tests), vec!["init.js", "app.js", "zeta.js"]);
    assert!(set.tests.iter().all(|p| p.starts_with(dir.path().join("tests"))));
}

#[test]
fn test_missing_tests_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app.js", "");

    let set = list_sources(dir.path(), &Config::default()).unwrap();
    assert_eq!(names(&set.sources), vec!["app.js"]);
    assert!(set.tests.is_empty());
}

#[test]
fn test_glob_characters_in_project_path() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("proj[1]*?");
    touch(&dir, "app.js", "");
    touch(&dir, "tests/init.js", "");

    let set = list_sources(&dir, &Config::default()).unwrap();
    assert_eq!(names(&set.sources), vec!["app.js"]);
    assert_eq!(names(&set.tests), vec!["init.js"]);
}

#[test]
fn test_custom_extension_and_tests_dir() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "main.es", "");
    touch(dir.path(), "init.es", "");
    touch(dir.path(), "other.js", "");
    touch(dir.path(), "spec/init.es", "");

    let config = Config {
        extension: "es".to_string(),
        tests_dir: "spec".to_string(),
        ..Config::default()
    };
    let set = list_sources(dir.path(), &config).unwrap();
    assert_eq!(names(&set.sources), vec!["init.es", "main.es"]);
    assert_eq!(names(&set.tests), vec!["init.es"]);
}

#[test]
fn test_instrument_file_labels_markers() {
    let dir = TempDir::new().unwrap();
    let path = touch(dir.path(), "app.js", "if (a) {\n}\n");

    let out = instrument_file(&path, "app.js", &Config::default()).unwrap();
    assert_eq!(out.markers.len(), 1);
    assert!(out.text.starts_with("if (a) {Lapiz.Test.incMk(\"app.js) 0 : 0\");"));
}

#[test]
fn test_instrument_project_writes_mirror() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    touch(src.path(), "init.js", "function init() {}\n");
    touch(src.path(), "app.js", "var x = 1;\n");
    touch(src.path(), "tests/init.js", "if (x) {}\nfor (;;) {}\n");

    let report = instrument_project(
        src.path(),
        &Config::default(),
        &Destination::Dir(out.path().to_path_buf()),
    )
    .unwrap();

    assert!(report.is_success());
    assert_eq!(report.files, 3);
    assert_eq!(report.markers, 3);

    let init = fs::read_to_string(out.path().join("init.js")).unwrap();
    assert!(init.contains("Lapiz.Test.incMk(\"init.js) 0 : 0\");"));

    let app = fs::read_to_string(out.path().join("app.js")).unwrap();
    assert_eq!(app, "var x = 1;\n");

    let tests = fs::read_to_string(out.path().join("tests/init.js")).unwrap();
    assert!(tests.ends_with(
        "Lapiz.Test.regMks(\n  \"tests/init.js) 0 : 0\",\n  \"tests/init.js) 1 : 0\"\n);"
    ));
}

#[test]
fn test_instrument_project_reports_bad_file() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    touch(src.path(), "good.js", "if (a) {}");
    fs::write(src.path().join("bad.js"), b"if (a) {\xff}").unwrap();

    let report = instrument_project(
        src.path(),
        &Config::default(),
        &Destination::Dir(out.path().to_path_buf()),
    )
    .unwrap();

    assert!(!report.is_success());
    assert_eq!(report.files, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].to_string().contains("bad.js"));
    assert!(out.path().join("good.js").exists());
    assert!(!out.path().join("bad.js").exists());
}
