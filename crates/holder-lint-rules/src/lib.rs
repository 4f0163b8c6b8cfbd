//! # holder-lint-rules
//!
//! Built-in lint rules for holder-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | VH001 | `viewholder-layout-doc` | Requires `RecyclerViewHolder` subclasses to link their layout in the class Javadoc |
//!
//! ## Usage
//!
//! ```ignore
//! use holder_lint_core::Analyzer;
//! use holder_lint_rules::ViewHolderLayoutDoc;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app/src/main/java")
//!     .rule(ViewHolderLayoutDoc::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
pub mod viewholder_layout_doc;

pub use registry::{all_rules, rule_by_name};
pub use viewholder_layout_doc::{LayoutDocSettings, ViewHolderLayoutDoc};

/// Re-export core types for convenience.
pub use holder_lint_core::{Rule, Severity, Violation};
