//! Rule to require a layout link in the Javadoc of RecyclerView holders.
//!
//! # Rationale
//!
//! A `ViewHolder` binds one item to one layout resource. Linking that layout
//! from the class comment lets readers (and IDE navigation) jump from the
//! holder to the XML it inflates.
//!
//! # Detected Patterns
//!
//! - A class whose direct superclass is `RecyclerViewHolder` with no Javadoc
//! - Such a class whose Javadoc has no line containing both `@link` and
//!   `R.layout#`
//!
//! The superclass check is syntactic: classes extending an intermediate
//! holder are not inspected.
//!
//! # Good Patterns
//!
//! ```java
//! /**
//!  * Feed item, inflated from {@link R.layout#item_feed}.
//!  */
//! public class FeedHolder extends RecyclerViewHolder { }
//! ```

use holder_lint_core::{CommentLookup, Diagnostic, JavaNode, Rule, Severity, TokenKind};

/// Rule code for viewholder-layout-doc.
pub const CODE: &str = "VH001";

/// Rule name for viewholder-layout-doc.
pub const NAME: &str = "viewholder-layout-doc";

/// Superclass identifier that marks a class as a holder.
pub const HOLDER_CLASS: &str = "RecyclerViewHolder";

/// Cross-reference tag a layout line must carry.
pub const LINK_TAG: &str = "@link";

/// Layout resource reference a layout line must carry.
pub const LAYOUT_REF: &str = "R.layout#";

/// Message reported when the layout link is missing.
pub const MESSAGE: &str = "未在类注释中发现ViewHolder的关联布局";

/// The fixed strings the rule matches and reports with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDocSettings {
    /// Exact direct-superclass identifier that triggers the check.
    pub holder_class: String,
    /// Substring a comment line must contain, together with `layout_ref`.
    pub link_tag: String,
    /// Substring a comment line must contain, together with `link_tag`.
    pub layout_ref: String,
    /// Diagnostic message.
    pub message: String,
}

impl Default for LayoutDocSettings {
    fn default() -> Self {
        Self {
            holder_class: HOLDER_CLASS.to_string(),
            link_tag: LINK_TAG.to_string(),
            layout_ref: LAYOUT_REF.to_string(),
            message: MESSAGE.to_string(),
        }
    }
}

/// Requires holder classes to link their layout resource in the class Javadoc.
#[derive(Debug, Clone, Default)]
pub struct ViewHolderLayoutDoc {
    settings: LayoutDocSettings,
}

impl ViewHolderLayoutDoc {
    /// Creates a new rule with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule with custom settings.
    #[must_use]
    pub fn with_settings(settings: LayoutDocSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn settings(&self) -> &LayoutDocSettings {
        &self.settings
    }

    fn is_holder(&self, node: &JavaNode<'_>) -> bool {
        node.superclass_name() == Some(self.settings.holder_class.as_str())
    }

    fn is_layout_line(&self, line: &str) -> bool {
        line.contains(&self.settings.link_tag) && line.contains(&self.settings.layout_ref)
    }

    fn check_doc(&self, line: usize, comments: &dyn CommentLookup) -> Option<Diagnostic> {
        let documented = comments
            .javadoc_before(line)
            .is_some_and(|doc| doc.lines.iter().any(|l| self.is_layout_line(l)));

        (!documented).then(|| Diagnostic::new(line, self.settings.message.clone()))
    }
}

impl Rule for ViewHolderLayoutDoc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires RecyclerViewHolder subclasses to link their layout in the class Javadoc"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn suggestion(&self) -> Option<&str> {
        Some("Add a line like `{@link R.layout#item_name}` to the class Javadoc")
    }

    fn interested_kinds(&self) -> &'static [TokenKind] {
        &[TokenKind::ClassDef]
    }

    fn on_match(&self, node: &JavaNode<'_>, comments: &dyn CommentLookup) -> Vec<Diagnostic> {
        if !self.is_holder(node) {
            return Vec::new();
        }
        self.check_doc(node.line(), comments).into_iter().collect()
    }
}
