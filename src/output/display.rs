//! Display functions for command results

use super::formatters::{letters_or_dash, pattern_boxes, results_heading, word_grid};
use crate::commands::{CheckReport, QueryReport};
use crate::core::Pattern;
use crate::filter::{Constraints, MatchResult};
use colored::Colorize;
use std::io::{self, Write};

/// Words per row in result grids
pub const GRID_COLUMNS: usize = 8;

/// Write the pattern boxes and effective letter constraints
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_inputs<W: Write>(
    out: &mut W,
    pattern: &Pattern,
    constraints: &Constraints,
) -> io::Result<()> {
    writeln!(out, "Pattern:  {}", pattern_boxes(pattern).bright_white().bold())?;
    writeln!(
        out,
        "Excluded: {}",
        letters_or_dash(constraints.excluded).red()
    )?;
    writeln!(
        out,
        "Included: {}",
        letters_or_dash(constraints.included).green()
    )
}

/// Write a match result as a heading plus word grid
///
/// `nothing_entered` selects the empty-state prompt instead of the
/// no-matches message when the result is empty.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_results<W: Write>(
    out: &mut W,
    result: &MatchResult<'_>,
    nothing_entered: bool,
) -> io::Result<()> {
    if nothing_entered {
        return writeln!(
            out,
            "{}",
            "Enter a word pattern to see possible matches".bright_black()
        );
    }
    if result.total == 0 {
        return writeln!(out, "{}", "No words found matching your criteria".yellow());
    }

    writeln!(out, "\n{}", results_heading(result).bright_cyan().bold())?;
    if result.is_truncated() {
        writeln!(
            out,
            "{}",
            format!(
                "Showing first {} results. Refine your search for fewer matches.",
                result.words.len()
            )
            .yellow()
            .italic()
        )?;
    }
    for row in word_grid(result.texts(), GRID_COLUMNS) {
        writeln!(out, "  {}", row.green())?;
    }
    Ok(())
}

/// Print the outcome of a one-shot query
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_query_report(report: &QueryReport<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_inputs(&mut out, &report.pattern, &report.constraints)?;
    if !report.conflicts.is_empty() {
        writeln!(
            out,
            "{}",
            format!(
                "Both excluded and included, kept as included: {}",
                letters_or_dash(report.conflicts)
            )
            .yellow()
        )?;
    }
    let nothing_entered = report.pattern.is_empty() && report.constraints.is_empty();
    write_results(&mut out, &report.result, nothing_entered)
}

/// Print the outcome of a word list check
pub fn print_check_report(report: &CheckReport) {
    println!(
        "{} {}",
        "✓".green().bold(),
        report.path.display().to_string().bright_white()
    );
    println!("   Entries:    {}", report.entries);
    println!(
        "   Unique:     {}",
        report.unique.to_string().bright_yellow().bold()
    );
    if report.duplicates() > 0 {
        println!(
            "   Duplicates: {}",
            report.duplicates().to_string().yellow()
        );
    }
}
