//! Diagnostic types and builders.
//! 诊断类型与构建器。

use crate::ErrorCode;
use relex_common::Span;

/// Where a diagnostic was raised.
/// 诊断产生的阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Raised while scanning source text.
    Scan,
    /// Raised while compiling the rule table.
    Rule,
}

/// A message attached to a span of the rendered source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error report ready to be rendered against a source text.
/// 可针对源码渲染的错误报告。
///
/// Every relex diagnostic is fatal to the operation that produced it, so
/// there is no severity; rendering always reports an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    /// Primary location; `Span::DUMMY` when the error has no source position.
    pub span: Span,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Suggested fix, taken from the error code.
    /// 由错误码给出的修复建议。
    pub fn help(&self) -> Option<&'static str> {
        self.code.and_then(|code| code.suggestion())
    }
}
