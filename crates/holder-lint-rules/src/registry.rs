//! Registry of the built-in rules.

use crate::ViewHolderLayoutDoc;
use holder_lint_core::RuleBox;

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(ViewHolderLayoutDoc::new())]
}

/// Looks up a rule by name (e.g. `viewholder-layout-doc`) or code (e.g. `VH001`).
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.code().eq_ignore_ascii_case(name))
}
