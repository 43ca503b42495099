//! Error types for scanning, rule compilation and stream access.
//! 扫描、规则编译与流访问的错误类型。

use relex_common::{LineCol, Span};
use relex_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// A failure caused by the scanned input.
/// 由被扫描输入引起的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No rule matches at `offset`.
    #[error("{line}:{column}: Illegal character: {character}")]
    IllegalCharacter {
        line: usize,
        column: usize,
        offset: usize,
        character: char,
    },
}

impl LexError {
    pub fn position(&self) -> LineCol {
        match self {
            LexError::IllegalCharacter { line, column, .. } => LineCol::new(*line, *column),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::IllegalCharacter {
                offset, character, ..
            } => Span::at(*offset, character.len_utf8()),
        }
    }

    /// Convert into a diagnostic that can be rendered against the source.
    /// 转换为可针对源码渲染的诊断信息。
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::IllegalCharacter { character, .. } => {
                let span = self.span();
                Diagnostic::new(
                    DiagnosticKind::Scan,
                    span,
                    format!("illegal character: {character:?}"),
                )
                .with_code(ErrorCode::IllegalCharacter)
                .with_label(Label::new(span, "no rule matches here"))
            }
        }
    }
}

/// A rule table that cannot be compiled.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}` in rule {index}: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RuleError::InvalidPattern {
                index,
                pattern,
                source,
            } => Diagnostic::new(
                DiagnosticKind::Rule,
                Span::DUMMY,
                format!("invalid pattern in rule {index}"),
            )
            .with_code(ErrorCode::InvalidPattern)
            .with_note(format!("pattern: {pattern}"))
            .with_note(source.to_string()),
        }
    }
}

/// Misuse of a [`Tokens`](crate::Tokens) cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("token index {index} is out of bounds for a stream of {len} tokens")]
    OutOfBounds { index: usize, len: usize },
    #[error("no token two positions behind the cursor at {pos}")]
    NoPrevious { pos: usize },
}
