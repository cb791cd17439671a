//! Source parsing via tree-sitter.
//!
//! The metric engine never touches a `tree_sitter::Parser` directly; this
//! module is the single place where source text becomes a syntax tree.
//! Everything the calculators need from a tree — kind discrimination, node
//! text, line mapping — is exposed through [`SourceTree`].

use std::path::Path;

use anyhow::{Context, Result};
use tree_sitter::{Node, Parser, Tree};

/// Source languages the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Plain JavaScript (`.js`).
    JavaScript,
    /// JavaScript with JSX (`.jsx`).
    Jsx,
    /// TypeScript (`.ts`).
    TypeScript,
    /// TypeScript with JSX (`.tsx`).
    Tsx,
}

impl Language {
    /// Picks the language from a file extension.
    ///
    /// Returns `None` for unsupported files; callers are expected to have
    /// filtered paths already, so `None` means "skip this file".
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "js" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn grammar(self) -> tree_sitter::Language {
        match self {
            // The JS grammar already includes JSX constructs.
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// A parsed source file: the syntax tree plus the text it came from.
pub struct SourceTree {
    tree: Tree,
    source: String,
}

impl SourceTree {
    /// Parses `source` with the grammar for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser
    /// yields no tree. Malformed source does not error here: tree-sitter
    /// produces a tree with error nodes, and the calculators simply see
    /// fewer recognizable constructs.
    pub fn parse(source: impl Into<String>, language: Language) -> Result<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .context("failed to load tree-sitter grammar")?;
        let tree = parser
            .parse(&source, None)
            .context("parser produced no syntax tree")?;
        Ok(Self { tree, source })
    }

    /// Root node of the parsed tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Original text of a node.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// 1-based line of the first byte of `node`.
    #[must_use]
    pub fn start_line(&self, node: Node<'_>) -> usize {
        node.start_position().row + 1
    }

    /// 1-based line of the last byte of `node`.
    #[must_use]
    pub fn end_line(&self, node: Node<'_>) -> usize {
        node.end_position().row + 1
    }
}
