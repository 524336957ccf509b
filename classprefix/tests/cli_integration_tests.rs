// classprefix/tests/cli_integration_tests.rs
//! Command-line integration tests for the `classprefix` binary.
//!
//! Every command runs inside a fresh temporary directory with `XDG_CONFIG_HOME`
//! pointed at it, so no configuration from the developer's machine leaks in.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};
use test_log::test;

fn classprefix(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("classprefix"));
    cmd.current_dir(dir.path());
    cmd.env("XDG_CONFIG_HOME", dir.path());
    cmd.env_remove("CLASSPREFIX_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_add_from_stdin_to_stdout() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["add", "--no-summary"])
        .write_stdin(r#"<div className="foo bar baz"></div>"#)
        .assert()
        .success()
        .stdout(r#"<div className="app-foo app-bar app-baz"></div>"#);
    Ok(())
}

#[test]
fn test_remove_from_stdin_to_stdout() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["-q", "remove"])
        .write_stdin(r#"<div className={twMerge('app-a app-b', cond && "app-c")}></div>"#)
        .assert()
        .success()
        .stdout(r#"<div className={twMerge('a b', cond && "c")}></div>"#);
    Ok(())
}

#[test]
fn test_prefix_and_skip_flags() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["-q", "add", "--prefix", "tw-", "--skip", "group,peer"])
        .write_stdin(r#"<li className="group peer item" />"#)
        .assert()
        .success()
        .stdout(r#"<li className="group peer tw-item" />"#);
    Ok(())
}

#[test]
fn test_in_place_rewrites_file_and_prints_summary() -> Result<()> {
    let dir = tempdir()?;
    let file = write(dir.path(), "App.tsx", "export const A = () => <p className=\"title\" />;\n");

    classprefix(&dir)
        .args(["add", "--in-place", "-i"])
        .arg(&file)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Prefix added"))
        .stderr(predicate::str::contains("Tokens changed"));

    assert_eq!(fs::read_to_string(&file)?, "export const A = () => <p className=\"app-title\" />;\n");
    Ok(())
}

#[test]
fn test_unchanged_input_reports_no_changes_and_keeps_file() -> Result<()> {
    let dir = tempdir()?;
    let file = write(dir.path(), "util.ts", "export const x = 1;\n");
    let before = fs::metadata(&file)?.modified()?;

    classprefix(&dir)
        .args(["add", "--in-place", "-i"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("No class names found to update."));

    assert_eq!(fs::read_to_string(&file)?, "export const x = 1;\n");
    assert_eq!(fs::metadata(&file)?.modified()?, before);
    Ok(())
}

#[test]
fn test_unsupported_extension_is_rejected_unless_forced() -> Result<()> {
    let dir = tempdir()?;
    let file = write(dir.path(), "page.html", r#"<div className="x"></div>"#);

    classprefix(&dir)
        .args(["add", "-i"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a supported source file"));

    classprefix(&dir)
        .args(["-q", "add", "--force", "-i"])
        .arg(&file)
        .assert()
        .success()
        .stdout(r#"<div className="app-x"></div>"#);
    Ok(())
}

#[test]
fn test_config_file_and_invalid_regex_warning() -> Result<()> {
    let dir = tempdir()?;
    let config = write(
        dir.path(),
        "prefix.yaml",
        "prefix: \"ui-\"\nuse_regex: true\ncustom_regex_patterns:\n  - \"\\\\w+Classes\"\n  - \"(broken\"\n",
    );

    classprefix(&dir)
        .args(["add", "--no-summary", "--config"])
        .arg(&config)
        .write_stdin(r#"<X rootClasses={cn("a")} />"#)
        .assert()
        .success()
        .stdout(r#"<X rootClasses={cn("ui-a")} />"#)
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("(broken"));
    Ok(())
}

#[test]
fn test_local_config_file_is_discovered() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), ".classprefix.yaml", "prefix: \"x-\"\n");

    classprefix(&dir)
        .args(["-q", "add"])
        .write_stdin(r#"<a className="b" />"#)
        .assert()
        .success()
        .stdout(r#"<a className="x-b" />"#);
    Ok(())
}

#[test]
fn test_diff_output() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["-q", "add", "--diff"])
        .write_stdin("<a className=\"b\" />\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-<a className=\"b\" />"))
        .stdout(predicate::str::contains("+<a className=\"app-b\" />"));
    Ok(())
}

#[test]
fn test_check_mode_exit_codes() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["-q", "add", "--check"])
        .write_stdin(r#"<a className="b" />"#)
        .assert()
        .code(1)
        .stdout("");

    classprefix(&dir)
        .args(["-q", "add", "--check"])
        .write_stdin(r#"<a className="app-b" />"#)
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_json_summary_file() -> Result<()> {
    let dir = tempdir()?;
    let json_path = dir.path().join("summary.json");

    classprefix(&dir)
        .args(["-q", "add", "--json-file"])
        .arg(&json_path)
        .write_stdin(r#"<a className={cn('b c', "d")} />"#)
        .assert()
        .success();

    let json = fs::read_to_string(&json_path)?;
    assert!(json.contains("\"tokens_changed\": 3"));
    assert!(json.contains("\"expression_values\": 1"));
    Ok(())
}

#[test]
fn test_invalid_prefix_fails() -> Result<()> {
    let dir = tempdir()?;
    classprefix(&dir)
        .args(["add", "--prefix", ""])
        .write_stdin(r#"<a className="b" />"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid prefix"));
    Ok(())
}

#[test]
fn test_format_without_formatter_warns() -> Result<()> {
    let dir = tempdir()?;
    let file = write(dir.path(), "a.jsx", r#"<a className="b" />"#);

    classprefix(&dir)
        .args(["add", "--no-summary", "--format", "--in-place", "-i"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("no `formatter` is configured"));

    assert_eq!(fs::read_to_string(&file)?, r#"<a className="app-b" />"#);
    Ok(())
}

#[test]
fn test_unchanged_input_is_copied_to_output_file() -> Result<()> {
    let dir = tempdir()?;
    let input = write(dir.path(), "in.ts", "const x = 1;\n");
    let stale = write(dir.path(), "out.ts", "STALE");
    let missing = dir.path().join("out2.ts");

    for out in [&stale, &missing] {
        classprefix(&dir)
            .args(["add", "-i"])
            .arg(&input)
            .arg("-o")
            .arg(out)
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("No class names found to update."));

        assert_eq!(fs::read_to_string(out)?, "const x = 1;\n");
    }
    Ok(())
}

#[test]
fn test_output_file_receives_rewrite() -> Result<()> {
    let dir = tempdir()?;
    let input = write(dir.path(), "in.jsx", r#"<a className="b" />"#);
    let out = dir.path().join("out.jsx");

    classprefix(&dir)
        .args(["-q", "add", "-i"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out)?, r#"<a className="app-b" />"#);
    assert_eq!(fs::read_to_string(&input)?, r#"<a className="b" />"#);
    Ok(())
}

#[test]
fn test_check_mode_writes_json_summary() -> Result<()> {
    let dir = tempdir()?;
    let json_path = dir.path().join("check.json");

    classprefix(&dir)
        .args(["-q", "add", "--check", "--json-file"])
        .arg(&json_path)
        .write_stdin(r#"<a className="b c" />"#)
        .assert()
        .code(1)
        .stdout("");

    let json = fs::read_to_string(&json_path)?;
    assert!(json.contains("\"tokens_changed\": 2"));
    assert!(json.contains("\"direct_values\": 1"));
    Ok(())
}
