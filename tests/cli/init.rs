use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .compactrc.json"));

    let content = test.read_file(".compactrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["ignores"], Value::Array(vec![]));
    assert_eq!(parsed["skipDirs"], Value::Array(vec![]));
    assert_eq!(parsed["ignoreTestFiles"], Value::Bool(false));
    assert!(content.contains("\n  \"ignores\""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::with_file(".compactrc.json", "{\"ignores\": [\"dist\"]}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".compactrc.json already exists"));
    assert_eq!(
        test.read_file(".compactrc.json")?,
        "{\"ignores\": [\"dist\"]}"
    );

    Ok(())
}

#[test]
fn test_init_config_is_picked_up_by_compact() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "export function run() {}\n")?;
    test.write_file("vendor/lib.js", "export function lib() {}\n")?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    let output = test.compact_command().arg("--stdout").output()?;
    assert!(stdout(&output).contains("## vendor/lib.js"));

    test.write_file(".compactrc.json", "{\"skipDirs\": [\"vendor\"]}")?;
    let output = test.compact_command().arg("--stdout").output()?;
    assert!(output.status.success());
    assert!(!stdout(&output).contains("vendor"));
    assert!(stdout(&output).contains("## src/app.js"));

    Ok(())
}
