//! Report formatting and printing utilities.
//!
//! Kept separate from the core so the library can be used without any
//! terminal output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        compact::CompactStats,
        sections::{ROOT_DIR, Section},
    },
    utils::format_token_count,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Percentage of project tokens removed by compaction, one decimal.
pub fn compaction_rate(stats: &CompactStats) -> String {
    if stats.raw_tokens == 0 {
        return "0".to_string();
    }
    let kept = stats.compacted_tokens as f64 / stats.raw_tokens as f64;
    format!("{:.1}", (1.0 - kept) * 100.0)
}

pub fn print_compact_summary(output_path: &Path, stats: &CompactStats) {
    print_compact_summary_to(output_path, stats, &mut io::stdout().lock());
}

pub fn print_compact_summary_to<W: Write>(output_path: &Path, stats: &CompactStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Compaction complete".green().bold()
    );
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "  {} {}",
        "Saved to".dimmed(),
        output_path.display().to_string().cyan()
    );
    let _ = writeln!(writer);

    let rows = [
        ("Files", stats.files.to_string()),
        ("Project tokens", format_token_count(stats.raw_tokens)),
        ("Compacted tokens", format_token_count(stats.compacted_tokens)),
        ("Compaction rate", format!("{}%", compaction_rate(stats))),
    ];
    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    for (label, value) in rows {
        let padding = " ".repeat(label_width - label.width());
        let _ = writeln!(writer, "  {}{} {}", label.dimmed(), padding, value.bold());
    }
}

/// Warn about skipped or unparseable files when not in verbose mode.
pub fn print_skip_warning(stats: &CompactStats, verbose: bool) {
    print_skip_warning_to(stats, verbose, &mut io::stderr().lock());
}

pub fn print_skip_warning_to<W: Write>(stats: &CompactStats, verbose: bool, writer: &mut W) {
    if verbose {
        return;
    }
    if stats.skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            stats.skipped,
            "-v".cyan()
        );
    }
    if stats.unparsed > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            stats.unparsed,
            "-v".cyan()
        );
    }
}

/// List sections grouped by directory, token estimates aligned.
pub fn print_section_listing(file_name: &str, sections: &[Section]) {
    print_section_listing_to(file_name, sections, &mut io::stdout().lock());
}

pub fn print_section_listing_to<W: Write>(file_name: &str, sections: &[Section], writer: &mut W) {
    let total: usize = sections.iter().map(|s| s.tokens).sum();
    let _ = writeln!(
        writer,
        "{} - {} sections ~{} tokens",
        file_name.bold(),
        sections.len(),
        format_token_count(total)
    );

    let path_width = sections.iter().map(|s| s.path.width()).max().unwrap_or(0);
    let mut current_dir: Option<&str> = None;
    for section in sections {
        if current_dir != Some(section.dir.as_str()) {
            current_dir = Some(section.dir.as_str());
            let label = if section.dir == ROOT_DIR {
                ROOT_DIR.to_string()
            } else {
                format!("{}/", section.dir)
            };
            let _ = writeln!(writer, "{}", format!("── {} ──", label).dimmed());
        }
        let padding = " ".repeat(path_width - section.path.width());
        let _ = writeln!(
            writer,
            "  {}{}  ~{}",
            section.path,
            padding,
            format_token_count(section.tokens)
        );
    }
}

pub fn print_pick_summary(output_path: &Path, kept: &[&Section], total: usize) {
    print_pick_summary_to(output_path, kept, total, &mut io::stdout().lock());
}

pub fn print_pick_summary_to<W: Write>(
    output_path: &Path,
    kept: &[&Section],
    total: usize,
    writer: &mut W,
) {
    let tokens: usize = kept.iter().map(|s| s.tokens).sum();
    let _ = writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        "Saved to".green(),
        output_path.display().to_string().cyan()
    );
    let _ = writeln!(
        writer,
        "  {}/{} sections, ~{} tokens",
        kept.len(),
        total,
        format_token_count(tokens)
    );
}
