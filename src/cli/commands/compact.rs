use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::{
    args::CompactCommand,
    exit_status::ExitStatus,
    report::{print_compact_summary, print_skip_warning},
};
use crate::{
    config::load_config,
    core::{
        compact::{CompactOptions, CompactResult, compact_project},
        file_scanner::ScanOptions,
    },
    utils::date_stamp,
};

/// Prefix of every generated document name.
pub const OUTPUT_PREFIX: &str = "compacted_";

pub fn compact(cmd: CompactCommand) -> Result<ExitStatus> {
    let args = cmd.args;

    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("Cannot access {}", args.path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let loaded = load_config(&root)?;
    let config = &loaded.config;
    if args.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("Using config {}", path.display());
    }

    let options = CompactOptions {
        scan: ScanOptions {
            ignores: config.ignores.clone(),
            skip_dirs: config.skip_dirs.clone(),
            ignore_test_files: args.ignore_test_files || config.ignore_test_files,
            verbose: args.verbose,
        },
        signatures: args.signatures,
        verbose: args.verbose,
    };

    let result = compact_project(&root, &options);
    print_skip_warning(&result.stats, args.verbose);

    let content = render_document(&result, args.json)?;

    if args.stdout {
        println!("{}", content);
        return Ok(ExitStatus::Success);
    }

    let output_dir = args
        .output_dir
        .or_else(|| loaded.output_dir())
        .unwrap_or_else(|| root.clone());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(output_file_name(&root, args.json));
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    print_compact_summary(&output_path, &result.stats);
    Ok(ExitStatus::Success)
}

fn render_document(result: &CompactResult, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(result).context("Failed to serialize compaction result")
    } else {
        Ok(result.output.clone())
    }
}

/// `compacted_<dir>_<stamp>.md`, or `.json` for JSON output.
fn output_file_name(root: &Path, json: bool) -> String {
    let dir_name = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "root".to_string());
    let extension = if json { "json" } else { "md" };
    format!("{}{}_{}.{}", OUTPUT_PREFIX, dir_name, date_stamp(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        let name = output_file_name(Path::new("/work/my-app"), false);
        assert!(name.starts_with("compacted_my-app_"));
        assert!(name.ends_with(".md"));

        let name = output_file_name(Path::new("/work/my-app"), true);
        assert!(name.ends_with(".json"));

        let name = output_file_name(Path::new("/"), false);
        assert!(name.starts_with("compacted_root_"));
    }
}
