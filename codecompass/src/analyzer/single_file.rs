//! File-level metrics: extract, compute per function, aggregate.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::{aggregate_functions, FileAggregate, FileMetrics, FunctionMetrics};
use crate::extract::extract_functions;
use crate::parsing::{Language, SourceTree};
use crate::utils::normalize_display_path;

/// Analyzes every function of a single source file.
///
/// A file with zero extractable functions is not an error: it produces a
/// well-formed result with `function_count == 0` and empty-sequence
/// aggregates. The function list keeps extraction order (textual order);
/// any ranking is applied later by the presentation layer.
///
/// # Errors
///
/// Returns an error for unsupported extensions, unreadable files, or a
/// parsing collaborator failure.
pub fn analyze_file(path: &Path) -> Result<FileMetrics> {
    let Some(language) = Language::from_path(path) else {
        bail!("unsupported source extension: {}", path.display());
    };
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let tree = SourceTree::parse(source, language)?;
    let units = extract_functions(&tree);

    // Strict pipeline: extraction completes before any metric runs, and
    // every per-function result exists before the aggregate is computed.
    let functions = units
        .iter()
        .map(|unit| super::analyze_function(unit, language))
        .collect::<Result<Vec<FunctionMetrics>>>()?;

    let pool: Vec<&FunctionMetrics> = functions.iter().collect();
    let (mccabe, halstead) = aggregate_functions(&pool);

    Ok(FileMetrics {
        file_path: normalize_display_path(path),
        aggregate: FileAggregate {
            mccabe,
            halstead,
            function_count: functions.len(),
        },
        functions,
    })
}
