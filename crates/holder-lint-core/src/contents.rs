//! File contents and Javadoc attachment.
//!
//! [`FileContents`] indexes every `/** ... */` block of a file by the line
//! it ends on and answers "which Javadoc documents the declaration on this
//! line" through the [`CommentLookup`] trait.

use std::collections::BTreeMap;

use crate::syntax::SourceTree;

/// A documentation comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Line the block starts on (1-indexed).
    pub start_line: usize,
    /// Line the block ends on (1-indexed).
    pub end_line: usize,
    /// Raw text lines of the block, delimiters included.
    pub lines: Vec<String>,
}

impl DocComment {
    /// Creates a block from raw comment text starting at `start_line`.
    #[must_use]
    pub fn new(start_line: usize, text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_owned())
            .collect();
        let end_line = start_line + lines.len().saturating_sub(1);
        Self {
            start_line,
            end_line,
            lines,
        }
    }

    /// Whether the block has no text lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Lookup of the documentation attached to a declaration.
pub trait CommentLookup {
    /// Returns the Javadoc block documenting a declaration that starts on
    /// `line` (1-indexed), if there is one.
    fn javadoc_before(&self, line: usize) -> Option<&DocComment>;
}

#[derive(Debug, Clone)]
struct IndexedDoc {
    doc: DocComment,
    /// Only whitespace precedes `/**` on its start line.
    leading: bool,
}

/// Source text of one file plus its Javadoc index.
#[derive(Debug, Clone)]
pub struct FileContents<'a> {
    content: &'a str,
    lines: Vec<&'a str>,
    javadocs: BTreeMap<usize, IndexedDoc>,
}

impl<'a> FileContents<'a> {
    /// Indexes the Javadoc blocks of a parsed file.
    #[must_use]
    pub fn new(content: &'a str, tree: &SourceTree) -> Self {
        let lines: Vec<&'a str> = content.lines().collect();
        let mut javadocs = BTreeMap::new();

        tree.walk(content, |node| {
            if node.raw_kind() != "block_comment" {
                return;
            }
            let text = node.text();
            if !text.starts_with("/**") || text == "/**/" {
                return;
            }

            let leading = lines
                .get(node.line() - 1)
                .and_then(|l| l.get(..node.column() - 1))
                .is_some_and(|prefix| prefix.trim().is_empty());

            let doc = DocComment::new(node.line(), text);
            // Later blocks on the same end line replace earlier ones.
            javadocs.insert(doc.end_line, IndexedDoc { doc, leading });
        });

        Self {
            content,
            lines,
            javadocs,
        }
    }

    /// Text of a line (1-indexed), without the line terminator.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&'a str> {
        line.checked_sub(1).and_then(|i| self.lines.get(i).copied())
    }

    /// Number of indexed Javadoc blocks.
    #[must_use]
    pub fn javadoc_count(&self) -> usize {
        self.javadocs.len()
    }

    fn line_is_blank(&self, line: usize) -> bool {
        self.line(line).map_or(true, |l| l.trim().is_empty())
    }

    fn line_is_comment(&self, line: usize) -> bool {
        self.line(line)
            .is_some_and(|l| l.trim_start().starts_with("//"))
    }

    /// Calculates the byte offset and length of a line (1-indexed).
    ///
    /// Returns `(0, 0)` when the line is out of bounds.
    #[must_use]
    pub fn line_span(&self, line: usize) -> (usize, usize) {
        let Some(target) = self.line(line) else {
            return (0, 0);
        };

        let mut offset = 0;
        for l in self.content.split_inclusive('\n').take(line - 1) {
            offset += l.len();
        }
        (offset, target.len())
    }
}

impl CommentLookup for FileContents<'_> {
    fn javadoc_before(&self, line: usize) -> Option<&DocComment> {
        if let Some(entry) = self.javadocs.get(&line) {
            if entry.leading {
                return Some(&entry.doc);
            }
        }

        let mut candidate = line.checked_sub(1)?;
        while candidate > 0 && (self.line_is_blank(candidate) || self.line_is_comment(candidate))
        {
            candidate -= 1;
        }

        self.javadocs.get(&candidate).map(|entry| &entry.doc)
    }
}
