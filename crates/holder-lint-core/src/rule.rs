//! Rule trait for defining lint rules.

use crate::contents::CommentLookup;
use crate::syntax::{JavaNode, TokenKind};
use crate::types::Severity;

/// A finding reported by a rule: a line number and a message.
///
/// The analyzer turns diagnostics into [`crate::Violation`]s by adding the
/// file, rule code and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number (1-indexed).
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A per-node lint rule over the Java syntax tree.
///
/// Rules declare which [`TokenKind`]s they care about; the analyzer calls
/// [`Rule::on_match`] once for every node of those kinds, top-down.
///
/// # Example
///
/// ```ignore
/// use holder_lint_core::{CommentLookup, Diagnostic, JavaNode, Rule, TokenKind};
///
/// pub struct NoEmptyInterfaces;
///
/// impl Rule for NoEmptyInterfaces {
///     fn name(&self) -> &'static str { "no-empty-interfaces" }
///     fn code(&self) -> &'static str { "VH100" }
///     fn interested_kinds(&self) -> &'static [TokenKind] { &[TokenKind::InterfaceDef] }
///
///     fn on_match(&self, node: &JavaNode<'_>, _: &dyn CommentLookup) -> Vec<Diagnostic> {
///         if node.text().ends_with("{}") {
///             vec![Diagnostic::new(node.line(), "empty interface")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "viewholder-layout-doc").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "VH001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Help text attached to every violation from this rule.
    fn suggestion(&self) -> Option<&str> {
        None
    }

    /// Node kinds this rule wants to be invoked for.
    fn interested_kinds(&self) -> &'static [TokenKind];

    /// Checks a single node.
    ///
    /// # Arguments
    ///
    /// * `node` - A node whose kind is listed in [`Rule::interested_kinds`]
    /// * `comments` - Javadoc lookup for the file the node belongs to
    ///
    /// # Returns
    ///
    /// The diagnostics found for this node.
    fn on_match(&self, node: &JavaNode<'_>, comments: &dyn CommentLookup) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::FileContents;
    use crate::syntax::SourceTree;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn interested_kinds(&self) -> &'static [TokenKind] {
            &[TokenKind::InterfaceDef]
        }

        fn on_match(&self, node: &JavaNode<'_>, comments: &dyn CommentLookup) -> Vec<Diagnostic> {
            if comments.javadoc_before(node.line()).is_none() {
                vec![Diagnostic::new(node.line(), "undocumented interface")]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.suggestion().is_none());
    }

    #[test]
    fn on_match_sees_comment_lookup() {
        let src = "/** doc */\ninterface A {}\ninterface B {}\n";
        let tree = SourceTree::parse(src).expect("parse failed");
        let contents = FileContents::new(src, &tree);

        let mut found = Vec::new();
        tree.walk(src, |node| {
            if node.kind() == Some(TokenKind::InterfaceDef) {
                found.extend(TestRule.on_match(&node, &contents));
            }
        });

        assert_eq!(found, vec![Diagnostic::new(3, "undocumented interface")]);
    }
}
