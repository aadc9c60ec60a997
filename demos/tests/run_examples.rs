use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

#[test]
fn run_all_demos_on_fixtures() {
    let demos_dir = Path::new("examples");
    let entries = fs::read_dir(demos_dir).expect("read demos dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name_owned = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("demo name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new("cargo");
        cmd.arg("run").arg("--quiet").arg("--example").arg(&name_owned);
        cmd.env_remove("WICK_DEMOS_INPUT");
        cmd.assert().success();
    }
    assert!(found_any, "no demos found to run");
}

#[test]
fn basic_demo_reads_points_from_file() {
    let dir = std::env::temp_dir().join(format!("wick-demos-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let input = dir.join("points.json");
    fs::write(
        &input,
        r#"[{"t": 1700000000, "o": 100, "h": 90, "l": 110, "c": 95, "v": -5}]"#,
    )
    .expect("write input");

    let mut cmd = Command::new("cargo");
    cmd.arg("run")
        .arg("--quiet")
        .arg("--example")
        .arg("01_basic_sanitize")
        .env("WICK_DEMOS_INPUT", &input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1700000000000"))
        .stdout(predicate::str::contains("OhlcInconsistency"));

    let _ = fs::remove_dir_all(&dir);
}
