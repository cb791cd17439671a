//! Directory-level metrics: per-file analysis over a recursive walk.

use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use super::{
    aggregate_functions, analyze_file, DirectoryAggregate, DirectoryMetrics, FileMetrics,
    FunctionMetrics,
};
use crate::utils::{find_source_files, normalize_display_path};

/// Analyzes every supported source file beneath `path`.
///
/// Zero-signal files — aggregate average McCabe of 0 or average Halstead
/// volume of 0, meaning nothing meaningfully analyzable was found — are
/// dropped entirely: they appear neither in `files` nor in the
/// directory-wide function pool. The aggregate then flattens all retained
/// functions into one pool, weighting every function equally regardless
/// of which file it lives in (deliberately not an average of per-file
/// averages).
///
/// Files that cannot be read or parsed are skipped at this level; a
/// directory where everything was skipped yields zeroed aggregates, not
/// an error.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` mirrors the other
/// analyze entry points so callers handle all three uniformly.
pub fn analyze_directory(path: &Path, exclude: &[String]) -> Result<DirectoryMetrics> {
    let file_paths = find_source_files(path, exclude);

    let mut files: Vec<FileMetrics> = file_paths
        .par_iter()
        .filter_map(|file_path| analyze_file(file_path).ok())
        .collect();
    files.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    files.retain(|file| {
        file.aggregate.mccabe.avg > 0.0 && file.aggregate.halstead.volume.avg > 0.0
    });

    let pool: Vec<&FunctionMetrics> = files.iter().flat_map(|f| &f.functions).collect();
    let function_count = pool.len();
    let (mccabe, halstead) = aggregate_functions(&pool);

    Ok(DirectoryMetrics {
        directory_path: normalize_display_path(path),
        aggregate: DirectoryAggregate {
            mccabe,
            halstead,
            file_count: files.len(),
            function_count,
        },
        files,
    })
}
