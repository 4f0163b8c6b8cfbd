//! # holder-lint-core
//!
//! Core framework for linting Android Java sources with Tree-sitter.
//!
//! This crate provides the host side of a lint rule:
//!
//! - [`SourceTree`] and [`JavaNode`] for parsing and walking Java code
//! - [`FileContents`] and [`CommentLookup`] for Javadoc attachment
//! - [`Rule`] trait for per-node rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use holder_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app/src/main/java")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod contents;
mod rule;
mod syntax;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use contents::{CommentLookup, DocComment, FileContents};
pub use rule::{Diagnostic, Rule, RuleBox};
pub use syntax::{JavaNode, SourceTree, SyntaxError, TokenKind};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
