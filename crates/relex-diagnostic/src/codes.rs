//! Error codes for relex diagnostics.
//! relex 诊断的错误码。

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Scan errors (E0001 - E0099)
    IllegalCharacter,

    // Rule table errors (E0100 - E0199)
    InvalidPattern,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalCharacter => "E0001",
            ErrorCode::InvalidPattern => "E0100",
        }
    }

    /// Suggested fix rendered as the report's help line.
    /// 作为报告帮助行渲染的修复建议。
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::IllegalCharacter => {
                Some("add a rule that matches this character, or remove it from the input")
            }
            ErrorCode::InvalidPattern => None,
        }
    }
}
