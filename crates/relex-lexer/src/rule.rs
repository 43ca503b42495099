//! Rule table entries.

use std::fmt;

/// The grammatical role of a token, chosen by the embedding parser.
/// 词法单元的语法角色，由上层解析器决定。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(pub i32);

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Category {
    fn from(tag: i32) -> Self {
        Category(tag)
    }
}

/// What the scanner does with a match.
/// 扫描器对一次匹配的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emission {
    /// Consume the match and emit nothing.
    Discard,
    /// Emit every match as its own token.
    EmitEach(Category),
    /// Fold consecutive matches into one token carrying an occurrence count.
    EmitCollapsed(Category),
}

impl Emission {
    /// Decode the integer tag convention: `0` discards, a positive tag emits
    /// each match, a negative tag collapses repeats.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            0 => Emission::Discard,
            t if t > 0 => Emission::EmitEach(Category(t)),
            t => Emission::EmitCollapsed(Category(t)),
        }
    }

    /// Encode this policy as an integer tag, the inverse of [`from_tag`].
    /// 将该策略编码为整数标签，与 [`from_tag`] 互逆。
    ///
    /// Returns `None` when the sign of the category contradicts the policy,
    /// e.g. `EmitCollapsed(Category(7))`, since decoding `7` would yield
    /// `EmitEach`.
    ///
    /// [`from_tag`]: Emission::from_tag
    pub fn tag(&self) -> Option<i32> {
        match *self {
            Emission::Discard => Some(0),
            Emission::EmitEach(Category(t)) if t > 0 => Some(t),
            Emission::EmitCollapsed(Category(t)) if t < 0 => Some(t),
            Emission::EmitEach(_) | Emission::EmitCollapsed(_) => None,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Emission::Discard => None,
            Emission::EmitEach(c) | Emission::EmitCollapsed(c) => Some(*c),
        }
    }
}

/// A pattern and what to do when it matches.
///
/// Patterns use `regex` syntax and are matched anchored at the scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub emission: Emission,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, emission: Emission) -> Self {
        Self {
            pattern: pattern.into(),
            emission,
        }
    }

    /// A rule whose matches are consumed silently.
    pub fn discard(pattern: impl Into<String>) -> Self {
        Self::new(pattern, Emission::Discard)
    }

    /// A rule emitting one token per match.
    pub fn emit(pattern: impl Into<String>, category: impl Into<Category>) -> Self {
        Self::new(pattern, Emission::EmitEach(category.into()))
    }

    /// A rule folding runs of consecutive matches into one token.
    pub fn collapse(pattern: impl Into<String>, category: impl Into<Category>) -> Self {
        Self::new(pattern, Emission::EmitCollapsed(category.into()))
    }

    /// Build a rule from the integer tag convention (see [`Emission::from_tag`]).
    pub fn from_tag(pattern: impl Into<String>, tag: i32) -> Self {
        Self::new(pattern, Emission::from_tag(tag))
    }
}
