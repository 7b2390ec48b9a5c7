use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const DOCUMENT: &str = "## app.js\nfn: main:1\n## src/api.ts\nexports: load\nfn: load:3\n## src/ui/Button.tsx\ncomponents: Button:1\n## tools/run.py\nfn: run():1";

fn with_document(name: &str) -> Result<CliTest> {
    CliTest::with_file(name, DOCUMENT)
}

fn picked_files(test: &CliTest) -> Result<Vec<String>> {
    Ok(test
        .files_with_prefix("compacted_")?
        .into_iter()
        .filter(|name| name.contains("_picked_"))
        .collect())
}

#[test]
fn test_pick_list() -> Result<()> {
    let test = with_document("compacted_app_2024-01-01_10-00-00.md")?;

    let output = test.pick_command().arg("--list").output()?;

    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.starts_with("compacted_app_2024-01-01_10-00-00.md - 4 sections ~"));
    assert!(listing.contains("── / ──\n  app.js"));
    assert!(listing.contains("── src/ ──\n  src/api.ts"));
    assert!(listing.contains("── src/ui/ ──\n  src/ui/Button.tsx"));
    assert!(listing.contains("── tools/ ──\n  tools/run.py"));
    assert!(picked_files(&test)?.is_empty());

    Ok(())
}

#[test]
fn test_pick_only() -> Result<()> {
    let test = with_document("compacted_app_2024-01-01_10-00-00.md")?;

    let output = test.pick_command().args(["--only", "src/**"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("2/4 sections"));

    let picked = picked_files(&test)?;
    assert_eq!(picked.len(), 1);
    assert!(picked[0].starts_with("compacted_app_2024-01-01_10-00-00_picked_"));
    assert_eq!(
        test.read_file(&picked[0])?,
        "## src/api.ts\nexports: load\nfn: load:3\n## src/ui/Button.tsx\ncomponents: Button:1\n"
    );

    Ok(())
}

#[test]
fn test_pick_exclude() -> Result<()> {
    let test = with_document("compacted_app_2024-01-01_10-00-00.md")?;

    let output = test
        .pick_command()
        .args(["--exclude", "**/*.py", "--exclude", "src/ui/**"])
        .output()?;

    assert!(output.status.success());
    let picked = picked_files(&test)?;
    assert_eq!(
        test.read_file(&picked[0])?,
        "## app.js\nfn: main:1\n## src/api.ts\nexports: load\nfn: load:3\n"
    );

    Ok(())
}

#[test]
fn test_pick_uses_newest_document() -> Result<()> {
    let test = CliTest::with_file("compacted_app_2024-01-01_10-00-00.md", "## old.js\n")?;
    test.write_file("compacted_app_2024-06-01_10-00-00.md", DOCUMENT)?;

    let output = test.pick_command().arg("--list").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("compacted_app_2024-06-01_10-00-00.md - 4 sections"));

    Ok(())
}

#[test]
fn test_pick_explicit_file() -> Result<()> {
    let test = with_document("docs/snapshot.md")?;

    let output = test
        .pick_command()
        .args(["docs/snapshot.md", "--only", "tools/*"])
        .output()?;

    assert!(output.status.success());
    let written: Vec<_> = std::fs::read_dir(test.root().join("docs"))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("snapshot_picked_"))
        .collect();
    assert_eq!(written.len(), 1);
    assert_eq!(
        test.read_file(&format!("docs/{}", written[0]))?,
        "## tools/run.py\nfn: run():1"
    );

    Ok(())
}

#[test]
fn test_pick_without_document() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.pick_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No compacted_*.md files found"));

    Ok(())
}

#[test]
fn test_pick_no_match() -> Result<()> {
    let test = with_document("compacted_app_2024-01-01_10-00-00.md")?;

    let output = test.pick_command().args(["--only", "lib/**"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No sections matched"));
    assert!(picked_files(&test)?.is_empty());

    Ok(())
}

#[test]
fn test_pick_after_compact() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "export function run() {}\n")?;
    test.write_file("lib/util.py", "def helper():\n    pass\n")?;

    let output = test.compact_command().output()?;
    assert!(output.status.success());

    let output = test.pick_command().args(["--only", "lib/**"]).output()?;
    assert!(output.status.success());

    let picked = picked_files(&test)?;
    assert_eq!(picked.len(), 1);
    assert_eq!(test.read_file(&picked[0])?, "## lib/util.py\nfn: helper():1\n");

    Ok(())
}
