//! The metric composition engine: function -> file -> directory.
//!
//! Data flows strictly bottom-up. Each level owns its result exclusively
//! and nothing here depends on presentation concerns; ranking and
//! formatting happen in the command layer.

mod directory;
mod single_file;

pub use directory::analyze_directory;
pub use single_file::analyze_file;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregateStat};
use crate::extract::{FunctionLocation, FunctionUnit};
use crate::halstead::{analyze_halstead, HalsteadMetrics};
use crate::mccabe::analyze_mccabe;
use crate::parsing::Language;

/// Metrics for a single extracted function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetrics {
    /// Function name as extracted.
    pub name: String,
    /// Line span of the function in its file.
    pub location: FunctionLocation,
    /// Cyclomatic complexity.
    pub mccabe: usize,
    /// Halstead software-science metrics.
    pub halstead: HalsteadMetrics,
}

/// Aggregate stats over the Halstead values of a function pool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalsteadAggregate {
    /// Aggregate over per-function volumes.
    pub volume: AggregateStat,
    /// Aggregate over per-function difficulties.
    pub difficulty: AggregateStat,
    /// Aggregate over per-function efforts.
    pub effort: AggregateStat,
}

/// File-level rollup of all function metrics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileAggregate {
    /// Aggregate over per-function McCabe values.
    pub mccabe: AggregateStat,
    /// Aggregates over the Halstead value families.
    pub halstead: HalsteadAggregate,
    /// Number of functions that went into the aggregate.
    pub function_count: usize,
}

/// Metrics for one analyzed source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetrics {
    /// Display path of the file.
    pub file_path: String,
    /// Per-function metrics in textual order.
    pub functions: Vec<FunctionMetrics>,
    /// File-level aggregate.
    pub aggregate: FileAggregate,
}

/// Directory-level rollup over the retained function pool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectoryAggregate {
    /// Aggregate over all retained functions' McCabe values.
    pub mccabe: AggregateStat,
    /// Aggregates over all retained functions' Halstead values.
    pub halstead: HalsteadAggregate,
    /// Number of retained files.
    pub file_count: usize,
    /// Number of functions in the pool.
    pub function_count: usize,
}

/// Metrics for a whole directory tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryMetrics {
    /// Display path of the analyzed directory.
    pub directory_path: String,
    /// Retained per-file results.
    pub files: Vec<FileMetrics>,
    /// Directory-level aggregate.
    pub aggregate: DirectoryAggregate,
}

/// Runs both calculators over one extracted unit.
///
/// # Errors
///
/// Returns an error if the parsing collaborator fails on the unit's text.
pub fn analyze_function(unit: &FunctionUnit, language: Language) -> Result<FunctionMetrics> {
    Ok(FunctionMetrics {
        name: unit.name.clone(),
        location: unit.location,
        mccabe: analyze_mccabe(&unit.code, language)?,
        halstead: analyze_halstead(&unit.code, language)?,
    })
}

/// Rolls a pool of function metrics up into the shared aggregate shape.
/// Used identically at the file and directory levels.
fn aggregate_functions(functions: &[&FunctionMetrics]) -> (AggregateStat, HalsteadAggregate) {
    let mccabe: Vec<f64> = functions.iter().map(|f| f.mccabe as f64).collect();
    let volume: Vec<f64> = functions.iter().map(|f| f.halstead.volume).collect();
    let difficulty: Vec<f64> = functions.iter().map(|f| f.halstead.difficulty).collect();
    let effort: Vec<f64> = functions.iter().map(|f| f.halstead.effort).collect();

    (
        aggregate(&mccabe),
        HalsteadAggregate {
            volume: aggregate(&volume),
            difficulty: aggregate(&difficulty),
            effort: aggregate(&effort),
        },
    )
}
