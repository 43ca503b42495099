//! Scanned tokens.
//! 扫描得到的词法单元。

use crate::rule::Category;
use relex_common::Span;

/// A classified piece of source text.
///
/// For collapsed tokens, `text` and `start` describe the first match of the
/// run and `occurrences` counts every match folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub category: Category,
    pub occurrences: usize,
    /// Byte offset of the (first) match.
    pub start: usize,
    /// Set for tokens produced by a collapsing rule.
    pub(crate) collapsible: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, category: Category, start: usize) -> Self {
        Self {
            text: text.into(),
            category,
            occurrences: 1,
            start,
            collapsible: false,
        }
    }

    pub(crate) fn collapsed(text: impl Into<String>, category: Category, start: usize) -> Self {
        Self {
            collapsible: true,
            ..Self::new(text, category, start)
        }
    }

    /// Span of the (first) matched text.
    pub fn span(&self) -> Span {
        Span::at(self.start, self.text.len())
    }

    /// Returns true if this token was produced by a collapsing rule.
    pub fn is_collapsed(&self) -> bool {
        self.collapsible
    }
}
