//! Command handlers: collect metrics, then format them for the console.
//!
//! Everything in this module is presentation. Sorting, shaping and table
//! rendering happen here, after the analyzer has produced its results in
//! textual order.

use crate::analyzer::{analyze_directory, analyze_file, DirectoryMetrics, FunctionMetrics};
use crate::utils::find_source_files;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for the top-level directory comparison.
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    /// Output raw JSON instead of tables.
    pub json: bool,
    /// Output sections: "aggregate", "detailed" or "both".
    pub mode: Option<String>,
    /// Folders to exclude from the walk.
    pub exclude: Vec<String>,
    /// Ordering of function listings ("score", "lines", "alpha").
    pub order: Option<String>,
    /// Write output to this file path instead of the writer.
    pub output_file: Option<String>,
}

/// Options for the per-function cyclomatic complexity listing.
#[derive(Debug, Default)]
pub struct CcOptions {
    /// Output in JSON format.
    pub json: bool,
    /// Folders to exclude from the walk.
    pub exclude: Vec<String>,
    /// Calculate and show average complexity.
    pub average: bool,
    /// Only show the average, no individual rows.
    pub total_average: bool,
    /// Sort order ("score", "lines", "alpha").
    pub order: Option<String>,
    /// Exit with code 1 if any function exceeds this complexity.
    pub fail_threshold: Option<usize>,
    /// Write output to this file path.
    pub output_file: Option<String>,
}

/// Options for the Halstead metrics listing.
#[derive(Debug, Default)]
pub struct HalOptions {
    /// Output in JSON format.
    pub json: bool,
    /// Folders to exclude from the walk.
    pub exclude: Vec<String>,
    /// Report per function instead of per-file aggregates.
    pub functions: bool,
    /// Write output to this file path.
    pub output_file: Option<String>,
}

fn write_output<W: Write>(writer: &mut W, content: &str, output_file: Option<String>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{content}")?;
    } else {
        writeln!(writer, "{content}")?;
    }
    Ok(())
}

/// Presentation-layer ranking of a function list. Unknown keys leave the
/// textual order untouched.
fn sort_functions(functions: &mut [FunctionMetrics], order: &str) {
    match order {
        "score" => functions.sort_by(|a, b| {
            b.mccabe
                .cmp(&a.mccabe)
                .then(b.halstead.effort.total_cmp(&a.halstead.effort))
        }),
        "lines" => functions.sort_by_key(|f| f.location.start_line),
        "alpha" => functions.sort_by(|a, b| a.name.cmp(&b.name)),
        _ => {}
    }
}

/// Executes the directory comparison analysis.
///
/// Each path is analyzed as one directory; the aggregate section prints
/// one comparison row per directory, the detailed section one table per
/// retained file.
///
/// # Errors
///
/// Returns an error if output writing or JSON serialization fails.
pub fn run_analyze<W: Write>(
    paths: &[PathBuf],
    options: AnalyzeOptions,
    mut writer: W,
) -> Result<()> {
    let mut results: Vec<DirectoryMetrics> = paths
        .iter()
        .map(|path| analyze_directory(path, &options.exclude))
        .collect::<Result<Vec<_>>>()?;

    if let Some(order) = options.order.as_deref() {
        for dir in &mut results {
            for file in &mut dir.files {
                sort_functions(&mut file.functions, order);
            }
        }
    }

    // JSON without an explicit mode dumps the full structures; an
    // unrecognized mode falls back to the default rather than matching
    // no output section.
    let default_mode = if options.json { "both" } else { "aggregate" };
    let mode = match options.mode.as_deref() {
        Some(m @ ("aggregate" | "detailed" | "both")) => m,
        _ => default_mode,
    };

    if options.json {
        let shaped = shape_results(&results, mode)?;
        write_output(
            &mut writer,
            &serde_json::to_string_pretty(&shaped)?,
            options.output_file,
        )?;
        return Ok(());
    }

    let mut out = String::new();
    if mode == "aggregate" || mode == "both" {
        let _ = writeln!(out, "{}", "Aggregate comparison".bold());
        let mut table = Table::new();
        table.set_header(vec![
            "Directory",
            "Files",
            "Functions",
            "McCabe avg",
            "Volume avg",
            "Effort avg",
        ]);
        for dir in &results {
            table.add_row(vec![
                dir.directory_path.clone(),
                dir.aggregate.file_count.to_string(),
                dir.aggregate.function_count.to_string(),
                format!("{:.2}", dir.aggregate.mccabe.avg),
                format!("{:.2}", dir.aggregate.halstead.volume.avg),
                format!("{:.2}", dir.aggregate.halstead.effort.avg),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }
    if mode == "detailed" || mode == "both" {
        for dir in &results {
            let _ = writeln!(out, "\n{}", format!("Directory: {}", dir.directory_path).bold());
            for file in &dir.files {
                let _ = writeln!(out, "  {}", file.file_path.italic());
                let mut table = Table::new();
                table.set_header(vec![
                    "Function",
                    "Lines",
                    "McCabe",
                    "Volume",
                    "Difficulty",
                    "Effort",
                ]);
                for function in &file.functions {
                    table.add_row(vec![
                        function.name.clone(),
                        format!(
                            "{}-{}",
                            function.location.start_line, function.location.end_line
                        ),
                        function.mccabe.to_string(),
                        format!("{:.2}", function.halstead.volume),
                        format!("{:.2}", function.halstead.difficulty),
                        format!("{:.2}", function.halstead.effort),
                    ]);
                }
                let _ = writeln!(out, "{table}");
            }
        }
    }
    write_output(&mut writer, out.trim_end(), options.output_file)
}

/// Shapes the JSON payload to the requested sections: aggregate-only,
/// detailed (files and functions only), or the full structures.
fn shape_results(results: &[DirectoryMetrics], mode: &str) -> Result<serde_json::Value> {
    let value = match mode {
        "aggregate" => serde_json::Value::Array(
            results
                .iter()
                .map(|dir| {
                    serde_json::json!({
                        "directory_path": dir.directory_path,
                        "aggregate": dir.aggregate,
                    })
                })
                .collect(),
        ),
        "detailed" => serde_json::Value::Array(
            results
                .iter()
                .map(|dir| {
                    serde_json::json!({
                        "directory_path": dir.directory_path,
                        "files": dir.files.iter().map(|file| serde_json::json!({
                            "file_path": file.file_path,
                            "functions": file.functions,
                        })).collect::<Vec<_>>(),
                    })
                })
                .collect(),
        ),
        _ => serde_json::to_value(results)?,
    };
    Ok(value)
}

#[derive(Serialize)]
struct CcRow {
    file: String,
    name: String,
    line: usize,
    complexity: usize,
}

/// Executes the per-function cyclomatic complexity listing.
///
/// # Errors
///
/// Returns an error if output writing or JSON serialization fails.
pub fn run_cc<W: Write>(path: &Path, options: CcOptions, mut writer: W) -> Result<()> {
    let files = find_source_files(path, &options.exclude);

    let mut results: Vec<CcRow> = files
        .par_iter()
        .filter_map(|file_path| analyze_file(file_path).ok())
        .flat_map_iter(|file| {
            let file_path = file.file_path;
            file.functions
                .into_iter()
                .map(move |function| CcRow {
                    file: file_path.clone(),
                    name: function.name,
                    line: function.location.start_line,
                    complexity: function.mccabe,
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if let Some(threshold) = options.fail_threshold {
        let violations: Vec<&CcRow> = results
            .iter()
            .filter(|row| row.complexity > threshold)
            .collect();
        if !violations.is_empty() {
            eprintln!(
                "\n[Error] The following functions exceed the complexity threshold of {threshold}:"
            );
            for violation in violations {
                eprintln!(
                    "  {}:{}:{} - Complexity: {}",
                    violation.file, violation.line, violation.name, violation.complexity
                );
            }
            std::process::exit(1);
        }
    }

    if let Some(order) = options.order.as_deref() {
        match order {
            "score" => results.sort_by(|a, b| b.complexity.cmp(&a.complexity)),
            "lines" => results.sort_by(|a, b| a.line.cmp(&b.line)),
            "alpha" => results.sort_by(|a, b| a.name.cmp(&b.name)),
            _ => {}
        }
    }

    // All sections accumulate into one buffer so a single write_output
    // call performs the file redirection; per-section calls would
    // truncate the file each time.
    let mut out = String::new();

    if options.average || options.total_average {
        let total_complexity: usize = results.iter().map(|row| row.complexity).sum();
        let count = results.len();
        let avg = if count > 0 {
            total_complexity as f64 / count as f64
        } else {
            0.0
        };

        let _ = writeln!(out, "Average complexity: {avg:.2} ({count} functions)");
        if options.total_average {
            return write_output(&mut writer, out.trim_end(), options.output_file);
        }
    }

    if options.json {
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(&results)?);
    } else {
        let mut table = Table::new();
        table.set_header(vec!["File", "Name", "Line", "Complexity"]);
        for row in results {
            let complexity_colored = if row.complexity > 10 {
                row.complexity.to_string().red().bold()
            } else if row.complexity > 5 {
                row.complexity.to_string().yellow()
            } else {
                row.complexity.to_string().green()
            };
            table.add_row(vec![
                row.file,
                row.name,
                row.line.to_string(),
                complexity_colored.to_string(),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }
    write_output(&mut writer, out.trim_end(), options.output_file)
}

#[derive(Serialize)]
struct HalRow {
    file: String,
    name: String,
    h1: usize,
    h2: usize,
    n1: usize,
    n2: usize,
    vocabulary: f64,
    volume: f64,
    difficulty: f64,
    effort: f64,
}

/// Executes the Halstead metrics listing.
///
/// With `functions` set, one row per extracted function; otherwise one
/// row per file carrying the file-level aggregate averages.
///
/// # Errors
///
/// Returns an error if output writing or JSON serialization fails.
pub fn run_hal<W: Write>(path: &Path, options: HalOptions, mut writer: W) -> Result<()> {
    let files = find_source_files(path, &options.exclude);

    let analyzed: Vec<_> = files
        .par_iter()
        .filter_map(|file_path| analyze_file(file_path).ok())
        .collect();

    if options.functions {
        let results: Vec<HalRow> = analyzed
            .into_iter()
            .flat_map(|file| {
                let file_path = file.file_path;
                file.functions
                    .into_iter()
                    .map(move |function| HalRow {
                        file: file_path.clone(),
                        name: function.name,
                        h1: function.halstead.h1,
                        h2: function.halstead.h2,
                        n1: function.halstead.n1,
                        n2: function.halstead.n2,
                        vocabulary: function.halstead.vocabulary,
                        volume: function.halstead.volume,
                        difficulty: function.halstead.difficulty,
                        effort: function.halstead.effort,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        if options.json {
            write_output(
                &mut writer,
                &serde_json::to_string_pretty(&results)?,
                options.output_file,
            )?;
        } else {
            let mut table = Table::new();
            table.set_header(vec![
                "File", "Name", "h1", "h2", "n1", "n2", "Vocab", "Volume", "Diff", "Effort",
            ]);
            for row in results {
                table.add_row(vec![
                    row.file,
                    row.name,
                    row.h1.to_string(),
                    row.h2.to_string(),
                    row.n1.to_string(),
                    row.n2.to_string(),
                    format!("{:.2}", row.vocabulary),
                    format!("{:.2}", row.volume),
                    format!("{:.2}", row.difficulty),
                    format!("{:.2}", row.effort),
                ]);
            }
            write_output(&mut writer, &table.to_string(), options.output_file)?;
        }
        return Ok(());
    }

    #[derive(Serialize)]
    struct HalFileRow {
        file: String,
        functions: usize,
        volume_avg: f64,
        difficulty_avg: f64,
        effort_avg: f64,
    }

    let results: Vec<HalFileRow> = analyzed
        .into_iter()
        .map(|file| HalFileRow {
            file: file.file_path,
            functions: file.aggregate.function_count,
            volume_avg: file.aggregate.halstead.volume.avg,
            difficulty_avg: file.aggregate.halstead.difficulty.avg,
            effort_avg: file.aggregate.halstead.effort.avg,
        })
        .collect();

    if options.json {
        write_output(
            &mut writer,
            &serde_json::to_string_pretty(&results)?,
            options.output_file,
        )?;
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "File",
            "Functions",
            "Volume avg",
            "Diff avg",
            "Effort avg",
        ]);
        for row in results {
            table.add_row(vec![
                row.file,
                row.functions.to_string(),
                format!("{:.2}", row.volume_avg),
                format!("{:.2}", row.difficulty_avg),
                format!("{:.2}", row.effort_avg),
            ]);
        }
        write_output(&mut writer, &table.to_string(), options.output_file)?;
    }
    Ok(())
}
