//! Line/column positions derived from byte offsets.
//! 由字节偏移推导出的行列位置。

use std::fmt;

/// A line/column pair as reported in lexing errors.
/// 词法错误中报告的行列位置。
///
/// `line` is the number of newlines before the offset (0-based).
/// `column` is the distance from the last newline before the offset, so the
/// first character after a newline is column 1. With no preceding newline the
/// distance is measured from a virtual newline at index -1, which makes the
/// first character of the source column 1 as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl LineCol {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compute the line/column of `offset` within `source`.
/// 计算 `offset` 在 `source` 中的行列位置。
///
/// `offset` is clamped to the source length and must fall on a char boundary.
pub fn line_and_column(source: &str, offset: usize) -> LineCol {
    let offset = offset.min(source.len());
    let before = &source.as_bytes()[..offset];

    let line = before.iter().filter(|&&b| b == b'\n').count();
    let column = match before.iter().rposition(|&b| b == b'\n') {
        Some(newline) => offset - newline,
        None => offset + 1,
    };

    LineCol { line, column }
}
