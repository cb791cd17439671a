use rustc_hash::FxHashSet;
use tree_sitter::Node;

use super::metrics::HalsteadMetrics;
use crate::parsing::SourceTree;

pub(super) struct HalsteadVisitor {
    operators: FxHashSet<String>,
    operands: FxHashSet<String>,
    total_operators: usize,
    total_operands: usize,
}

impl HalsteadVisitor {
    pub(super) fn new() -> Self {
        Self {
            operators: FxHashSet::default(),
            operands: FxHashSet::default(),
            total_operators: 0,
            total_operands: 0,
        }
    }

    fn add_operator(&mut self, op: &str) {
        self.operators.insert(op.to_owned());
        self.total_operators += 1;
    }

    fn add_operand(&mut self, op: &str) {
        self.operands.insert(op.to_owned());
        self.total_operands += 1;
    }

    pub(super) fn visit(&mut self, tree: &SourceTree, node: Node<'_>) {
        self.classify(tree, node);
        for child in node.children(&mut node.walk()) {
            self.visit(tree, child);
        }
    }

    /// Per-kind classification into operators and operands.
    ///
    /// Operand texts are the sub-expressions' full source text, so an
    /// identifier appearing inside two different expressions contributes
    /// both the composite texts and (via its own node) itself.
    fn classify(&mut self, tree: &SourceTree, node: Node<'_>) {
        match node.kind() {
            "binary_expression" => {
                if let Some(op) = node.child_by_field_name("operator") {
                    self.add_operator(tree.text(op));
                }
                if let Some(left) = node.child_by_field_name("left") {
                    self.add_operand(tree.text(left));
                }
                if let Some(right) = node.child_by_field_name("right") {
                    self.add_operand(tree.text(right));
                }
            }
            "unary_expression" | "update_expression" => {
                if let Some(op) = node.child_by_field_name("operator") {
                    self.add_operator(tree.text(op));
                }
                if let Some(arg) = node.child_by_field_name("argument") {
                    self.add_operand(tree.text(arg));
                }
            }
            "call_expression" => {
                self.add_operator("call");
                if let Some(callee) = node.child_by_field_name("function") {
                    self.add_operand(tree.text(callee));
                }
                if let Some(args) = node.child_by_field_name("arguments") {
                    for arg in args.named_children(&mut args.walk()) {
                        self.add_operand(tree.text(arg));
                    }
                }
            }
            "variable_declarator" => {
                if let Some(value) = node.child_by_field_name("value") {
                    self.add_operator("=");
                    if let Some(name) = node.child_by_field_name("name") {
                        self.add_operand(tree.text(name));
                    }
                    self.add_operand(tree.text(value));
                }
            }
            "function_declaration" | "generator_function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.add_operator("function");
                    self.add_operand(tree.text(name));
                }
            }
            "return_statement" => {
                // `return;` contributes nothing
                if let Some(value) = node.named_child(0) {
                    self.add_operator("return");
                    self.add_operand(tree.text(value));
                }
            }
            "template_string" => {
                if has_substitution(node) {
                    self.add_operator("template");
                    self.add_operand(tree.text(node));
                }
            }
            "if_statement" => self.add_operator("if"),
            "ternary_expression" => {
                self.add_operator("?");
                self.add_operator(":");
            }
            "for_statement" => self.add_operator("for"),
            "while_statement" => self.add_operator("while"),
            "switch_statement" => self.add_operator("switch"),
            "switch_case" => self.add_operator("case"),
            "member_expression" => {
                self.add_operator(".");
                if let Some(property) = node.child_by_field_name("property") {
                    self.add_operand(tree.text(property));
                }
            }
            "subscript_expression" => {
                self.add_operator("[]");
                if let Some(index) = node.child_by_field_name("index") {
                    self.add_operand(tree.text(index));
                }
            }
            "spread_element" => {
                self.add_operator("...");
                if let Some(expr) = node.named_child(0) {
                    self.add_operand(tree.text(expr));
                }
            }
            "number" | "string" => self.add_operand(tree.text(node)),
            _ => {}
        }
    }

    pub(super) fn calculate_metrics(&self) -> HalsteadMetrics {
        let n1 = self.operators.len() as f64;
        let n2 = self.operands.len() as f64;
        let n1_total = self.total_operators as f64;
        let n2_total = self.total_operands as f64;

        let vocabulary = n1 + n2;
        let length = n1_total + n2_total;
        // vocabulary == 0 would make log2 blow up to -inf
        let volume = if vocabulary > 0.0 {
            length * vocabulary.log2()
        } else {
            0.0
        };
        // guard the division when no operands exist
        let difficulty = if n2 > 0.0 {
            (n1 / 2.0) * (n2_total / n2)
        } else {
            0.0
        };
        let effort = volume * difficulty;

        HalsteadMetrics {
            h1: self.total_operators,
            h2: self.total_operands,
            n1: self.operators.len(),
            n2: self.operands.len(),
            vocabulary,
            length,
            volume,
            difficulty,
            effort,
        }
    }
}

/// Only interpolated templates count; a template literal without any
/// substitution is just a string.
fn has_substitution(node: Node<'_>) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == "template_substitution")
}
