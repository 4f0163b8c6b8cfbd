//! Java syntax layer built on Tree-sitter.
//!
//! [`SourceTree`] owns a parsed tree, [`JavaNode`] is the read-only view
//! handed to rules, and [`TokenKind`] is the classification rules register
//! interest in.

use tree_sitter::{Language, Node, Parser, Tree};

/// Kinds of syntax nodes a rule can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `class Foo { }`
    ClassDef,
    /// `interface Foo { }`
    InterfaceDef,
    /// `enum Foo { }`
    EnumDef,
    /// `record Foo() { }`
    RecordDef,
    /// `@interface Foo { }`
    AnnotationDef,
}

impl TokenKind {
    /// Maps a Tree-sitter node kind to a token kind.
    #[must_use]
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::ClassDef),
            "interface_declaration" => Some(Self::InterfaceDef),
            "enum_declaration" => Some(Self::EnumDef),
            "record_declaration" => Some(Self::RecordDef),
            "annotation_type_declaration" => Some(Self::AnnotationDef),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ClassDef => "CLASS_DEF",
            Self::InterfaceDef => "INTERFACE_DEF",
            Self::EnumDef => "ENUM_DEF",
            Self::RecordDef => "RECORD_DEF",
            Self::AnnotationDef => "ANNOTATION_DEF",
        };
        f.write_str(s)
    }
}

/// Errors raised while building a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// The Java grammar could not be loaded into the parser.
    #[error("failed to load java grammar: {0}")]
    Language(String),
    /// The parser gave up without producing a tree.
    #[error("parser produced no tree")]
    Aborted,
}

/// A parsed Java source file.
pub struct SourceTree {
    tree: Tree,
}

impl SourceTree {
    /// Parses Java source text.
    ///
    /// Source with syntax errors still yields a tree; check
    /// [`SourceTree::has_errors`] to find out.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the grammar cannot be loaded or parsing
    /// is aborted.
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let language: Language = tree_sitter_java::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| SyntaxError::Language(e.to_string()))?;

        let tree = parser.parse(source, None).ok_or(SyntaxError::Aborted)?;
        Ok(Self { tree })
    }

    /// Whether the tree contains `ERROR` or missing nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Visits every node in pre-order, top-down.
    pub fn walk<'a, F>(&'a self, source: &'a str, mut visit: F)
    where
        F: FnMut(JavaNode<'a>),
    {
        let mut cursor = self.tree.walk();
        loop {
            visit(JavaNode::new(cursor.node(), source));

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}

/// Read-only view of a syntax node together with its source text.
#[derive(Clone, Copy)]
pub struct JavaNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> JavaNode<'a> {
    /// Wraps a Tree-sitter node.
    #[must_use]
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    fn text_of(&self, node: Node<'a>) -> &'a str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// Raw Tree-sitter node kind (e.g. `class_declaration`).
    #[must_use]
    pub fn raw_kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Token classification, if this node is one rules can subscribe to.
    #[must_use]
    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::from_node_kind(self.node.kind())
    }

    /// Line number (1-indexed).
    ///
    /// Declarations start at their first modifier or annotation.
    #[must_use]
    pub fn line(&self) -> usize {
        self.node.start_position().row + 1
    }

    /// Column number (1-indexed).
    #[must_use]
    pub fn column(&self) -> usize {
        self.node.start_position().column + 1
    }

    /// Full source text covered by this node.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text_of(self.node)
    }

    /// Declared identifier, for nodes that carry a `name` field.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .map(|n| self.text_of(n))
    }

    /// Identifier text of the direct superclass.
    ///
    /// Type arguments are dropped (`Base<T>` yields `Base`); qualified
    /// names are returned as written (`pkg.Base`). No resolution happens.
    #[must_use]
    pub fn superclass_name(&self) -> Option<&'a str> {
        let clause = self.node.child_by_field_name("superclass")?;

        let mut cursor = clause.walk();
        let ty = clause.named_children(&mut cursor).next()?;

        let ident = if ty.kind() == "generic_type" {
            ty.named_child(0)?
        } else {
            ty
        };
        Some(self.text_of(ident))
    }
}

impl std::fmt::Debug for JavaNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaNode")
            .field("kind", &self.node.kind())
            .field("line", &self.line())
            .field("name", &self.name())
            .finish()
    }
}
