//! Halstead software-science metrics.

mod metrics;
mod visitor;

use anyhow::Result;

use crate::parsing::{Language, SourceTree};
use visitor::HalsteadVisitor;

pub use metrics::HalsteadMetrics;

/// Calculates Halstead metrics for one function's source text.
///
/// A snippet with no qualifying constructs (say, a bare `return;`) is a
/// valid input and yields an all-zero result, not an error.
///
/// # Errors
///
/// Returns an error if the parsing collaborator fails to produce a tree.
pub fn analyze_halstead(code: &str, language: Language) -> Result<HalsteadMetrics> {
    let tree = SourceTree::parse(code, language)?;
    let mut visitor = HalsteadVisitor::new();
    visitor.visit(&tree, tree.root());
    Ok(visitor.calculate_metrics())
}
