//! Function extraction: finds the analyzable units of a parsed file.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::parsing::SourceTree;

/// 1-based inclusive line range of a unit in its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLocation {
    /// First line of the unit's text span.
    pub start_line: usize,
    /// Last line of the unit's text span.
    pub end_line: usize,
}

/// One analyzable unit: a named function declaration, a class method, or
/// an arrow function bound to a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionUnit {
    /// Function name (for arrow bindings, the variable's name).
    pub name: String,
    /// The unit's full source text.
    pub code: String,
    /// Line span of the captured text.
    pub location: FunctionLocation,
}

/// Collects all analyzable units in textual order (pre-order walk).
///
/// Anonymous function declarations are skipped: without a stable name
/// there is nothing to report them under. Units may nest (a method is
/// reported independently of its class, an inner function independently
/// of its outer one). A file without any unit yields an empty vec, not an
/// error.
#[must_use]
pub fn extract_functions(tree: &SourceTree) -> Vec<FunctionUnit> {
    let mut units = Vec::new();
    visit(tree, tree.root(), &mut units);
    units
}

fn visit(tree: &SourceTree, node: Node<'_>, units: &mut Vec<FunctionUnit>) {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            if let Some(name) = node.child_by_field_name("name") {
                units.push(unit_from(tree, node, tree.text(name)));
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            for decl in node.named_children(&mut node.walk()) {
                if decl.kind() != "variable_declarator" {
                    continue;
                }
                let is_arrow = decl
                    .child_by_field_name("value")
                    .is_some_and(|value| value.kind() == "arrow_function");
                if !is_arrow {
                    continue;
                }
                if let Some(name) = decl.child_by_field_name("name") {
                    // The whole declaration statement is captured, not
                    // just the arrow body.
                    units.push(unit_from(tree, node, tree.text(name)));
                }
            }
        }
        "method_definition" => {
            if let Some(name) = node.child_by_field_name("name") {
                units.push(unit_from(tree, node, tree.text(name)));
            }
        }
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        visit(tree, child, units);
    }
}

fn unit_from(tree: &SourceTree, node: Node<'_>, name: &str) -> FunctionUnit {
    FunctionUnit {
        name: name.to_owned(),
        code: tree.text(node).to_owned(),
        location: FunctionLocation {
            start_line: tree.start_line(node),
            end_line: tree.end_line(node),
        },
    }
}
