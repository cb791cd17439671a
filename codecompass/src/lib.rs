//! Static complexity analysis for JavaScript and TypeScript source code.
//!
//! `codecompass` parses source files with tree-sitter, extracts every
//! named function, computes McCabe cyclomatic complexity and Halstead
//! metrics per function, and rolls the results up into file-level and
//! directory-level aggregates (total, average, median).
//!
//! Module layout:
//! - [`parsing`]: tree-sitter grammar selection and parse trees
//! - [`extract`]: function discovery in a parse tree
//! - [`mccabe`] / [`halstead`]: per-function metric calculators
//! - [`aggregate`]: total/avg/median statistics over value sequences
//! - [`analyzer`]: file- and directory-level orchestration
//! - [`commands`] / [`cli`] / [`entry_point`]: the command line surface

pub mod aggregate;
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod entry_point;
pub mod extract;
pub mod halstead;
pub mod mccabe;
pub mod parsing;
pub mod utils;
