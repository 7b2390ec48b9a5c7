use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const COMPONENT: &str = r#"import { useState } from 'react';
import { api } from './api';

export default function Dashboard({ user }) {
  const [open, setOpen] = useState(false);
  return <div>{user.name}</div>;
}
"#;

const PYTHON: &str = r#"import os

MAX_RETRIES = 3

class Worker(Base):
    def run(self):
        pass

def main(argv):
    pass
"#;

#[test]
fn test_compact_stdout() -> Result<()> {
    let test = CliTest::with_file("src/Dashboard.jsx", COMPONENT)?;
    test.write_file("tools/worker.py", PYTHON)?;
    test.write_file("README.md", "# readme\n")?;

    let output = test.compact_command().arg("--stdout").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "## src/Dashboard.jsx\n\
         imports: 1 ext, ./api\n\
         exports: Dashboard*\n\
         components: Dashboard:4\n\
         hooks: useState(1)\n\
         ## tools/worker.py\n\
         imports: 1 ext\n\
         classes: Worker (Base):5\n\
         fn: main(argv):9\n\
         const: MAX_RETRIES\n"
    );
    assert!(test.files_with_prefix("compacted_")?.is_empty());

    Ok(())
}

#[test]
fn test_compact_writes_document() -> Result<()> {
    let test = CliTest::with_file("app.js", "export function run() {}\n")?;

    let output = test.compact_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Compaction complete"));
    assert!(stdout(&output).contains("Compaction rate"));

    let files = test.files_with_prefix("compacted_project_")?;
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".md"));
    assert_eq!(
        test.read_file(&files[0])?,
        "## app.js\nexports: run\nfn: run:1"
    );

    Ok(())
}

#[test]
fn test_compact_output_dir() -> Result<()> {
    let test = CliTest::with_file("app.js", "export function run() {}\n")?;

    let output = test.compact_command().args(["-o", "out"]).output()?;

    assert!(output.status.success());
    assert!(test.files_with_prefix("compacted_")?.is_empty());
    let written: Vec<_> = std::fs::read_dir(test.root().join("out"))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("compacted_project_"));

    Ok(())
}

#[test]
fn test_compact_output_dir_from_config() -> Result<()> {
    let test = CliTest::with_file("app.js", "export function run() {}\n")?;
    test.write_file(".compactrc.json", "{\"outputDir\": \"docs\"}")?;

    let output = test.compact_command().output()?;

    assert!(output.status.success());
    assert_eq!(std::fs::read_dir(test.root().join("docs"))?.count(), 1);

    Ok(())
}

#[test]
fn test_compact_json() -> Result<()> {
    let test = CliTest::with_file("tools/worker.py", PYTHON)?;

    let output = test.compact_command().args(["--json", "--stdout"]).output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["stats"]["files"], 1);
    assert_eq!(parsed["files"][0]["relativePath"], "tools/worker.py");
    assert_eq!(parsed["files"][0]["language"], "python");
    assert!(
        parsed["output"]
            .as_str()
            .is_some_and(|text| text.starts_with("## tools/worker.py\n"))
    );

    Ok(())
}

#[test]
fn test_compact_json_file() -> Result<()> {
    let test = CliTest::with_file("app.ts", "export const limit = 10;\n")?;

    let output = test.compact_command().arg("--json").output()?;

    assert!(output.status.success());
    let files = test.files_with_prefix("compacted_")?;
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".json"));
    let parsed: Value = serde_json::from_str(&test.read_file(&files[0])?)?;
    assert_eq!(parsed["output"], "## app.ts\nexports: limit\nconst: 1");

    Ok(())
}

#[test]
fn test_compact_signatures() -> Result<()> {
    let test = CliTest::with_file(
        "api.ts",
        "export async function load(id: string): Promise<User> {}\n",
    )?;

    let output = test
        .compact_command()
        .args(["--signatures", "--stdout"])
        .output()?;

    assert!(output.status.success());
    assert!(
        stdout(&output)
            .contains("    async function load(id: string): Promise  // line 1")
    );

    Ok(())
}

#[test]
fn test_compact_ignore_test_files() -> Result<()> {
    let test = CliTest::with_file("app.js", "export function run() {}\n")?;
    test.write_file("app.test.js", "test('run', () => {});\n")?;
    test.write_file("test_app.py", "def test_run():\n    pass\n")?;

    let output = test.compact_command().arg("--stdout").output()?;
    assert!(stdout(&output).contains("## app.test.js"));
    assert!(stdout(&output).contains("## test_app.py"));

    let output = test
        .compact_command()
        .args(["--stdout", "--ignore-test-files"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "## app.js\nexports: run\nfn: run:1\n");

    Ok(())
}

#[test]
fn test_compact_unparseable_file_warns() -> Result<()> {
    let test = CliTest::with_file("broken.js", "function (\n")?;
    test.write_file("ok.js", "function run() {}\n")?;

    let output = test.compact_command().arg("--stdout").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "## broken.js\n## ok.js\nfn: run:1\n");
    assert!(stderr(&output).contains("warning: 1 file(s) could not be parsed"));

    let output = test.compact_command().args(["--stdout", "-v"]).output()?;
    assert!(stderr(&output).contains("Failed to parse broken.js"));

    Ok(())
}

#[test]
fn test_compact_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.compact_command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Cannot access does-not-exist"));

    Ok(())
}

#[test]
fn test_compact_invalid_config() -> Result<()> {
    let test = CliTest::with_file("app.js", "export function run() {}\n")?;
    test.write_file(".compactrc.json", "{\"ignores\": [\"[bad\"]}")?;

    let output = test.compact_command().arg("--stdout").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
