use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

use super::{
    super::{
        args::PickCommand,
        exit_status::ExitStatus,
        report::{print_pick_summary, print_section_listing},
    },
    compact::OUTPUT_PREFIX,
};
use crate::{
    core::sections::{parse_sections, select_sections},
    utils::date_stamp,
};

/// Marker inserted into the names of documents written by `pick`.
const PICKED_MARKER: &str = "_picked_";

pub fn pick(cmd: PickCommand) -> Result<ExitStatus> {
    let args = cmd.args;

    let file = match args.file {
        Some(file) => file,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            match find_compacted_files(&cwd)?.into_iter().next() {
                Some(name) => cwd.join(name),
                None => {
                    eprintln!("Error: No {}*.md files found in current directory", OUTPUT_PREFIX);
                    return Ok(ExitStatus::Failure);
                }
            }
        }
    };

    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let sections = parse_sections(&text);
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    if args.list {
        print_section_listing(&file_name, &sections);
        return Ok(ExitStatus::Success);
    }

    let only = compile_patterns(&args.only, "--only")?;
    let exclude = compile_patterns(&args.exclude, "--exclude")?;
    let kept = select_sections(&sections, &only, &exclude);
    if kept.is_empty() {
        eprintln!("Error: No sections matched in {}", file_name);
        return Ok(ExitStatus::Failure);
    }

    let output: String = kept.iter().map(|s| s.content.as_str()).collect();
    let output_path = picked_path(&file, &file_name);
    fs::write(&output_path, output)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    print_pick_summary(&output_path, &kept, sections.len());
    Ok(ExitStatus::Success)
}

/// Compacted documents in `dir`, newest first. Picked documents are excluded.
pub fn find_compacted_files(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| {
            name.starts_with(OUTPUT_PREFIX) && name.ends_with(".md") && !name.contains(PICKED_MARKER)
        })
        .collect();
    names.sort();
    names.reverse();
    Ok(names)
}

fn compile_patterns(patterns: &[String], flag: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", flag, p))
        })
        .collect()
}

/// `<base>_picked_<stamp>.md` next to the source document.
fn picked_path(file: &Path, file_name: &str) -> PathBuf {
    let base = file_name.strip_suffix(".md").unwrap_or(file_name);
    file.with_file_name(format!("{}{}{}.md", base, PICKED_MARKER, date_stamp()))
}
