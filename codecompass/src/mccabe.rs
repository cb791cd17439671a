//! Cyclomatic complexity via the simplified McCabe formula.
//!
//! No control-flow graph is built. Every branch-introducing construct
//! counts one edge and the result is `edges + 1`: a graph with no
//! branches has exactly one path, which collapses V(G) = E - N + 2 into a
//! single tree walk. This simplification is intentional.

use anyhow::Result;
use tree_sitter::Node;

use crate::parsing::{Language, SourceTree};

/// Calculates cyclomatic complexity for one function's source text.
///
/// # Errors
///
/// Returns an error if the parsing collaborator fails to produce a tree.
pub fn analyze_mccabe(code: &str, language: Language) -> Result<usize> {
    let tree = SourceTree::parse(code, language)?;
    Ok(complexity_of(tree.root()))
}

/// Complexity of the subtree rooted at `node`.
#[must_use]
pub fn complexity_of(node: Node<'_>) -> usize {
    let mut edges = 0;
    count_edges(node, &mut edges);
    edges + 1
}

fn count_edges(node: Node<'_>, edges: &mut usize) {
    match node.kind() {
        "if_statement"
        | "for_statement"
        | "while_statement"
        | "do_statement"
        | "switch_case"
        | "switch_default"
        | "ternary_expression"
        // an await is a wait-point, treated as a potential path
        | "await_expression" => *edges += 1,
        // short-circuit evaluation creates a branch
        "binary_expression" => {
            if node
                .child_by_field_name("operator")
                .is_some_and(|op| matches!(op.kind(), "&&" | "||"))
            {
                *edges += 1;
            }
        }
        // catch and finally each add a path; both can fire on one try
        "try_statement" => {
            if node.child_by_field_name("handler").is_some() {
                *edges += 1;
            }
            if node.child_by_field_name("finalizer").is_some() {
                *edges += 1;
            }
        }
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        count_edges(child, edges);
    }
}
