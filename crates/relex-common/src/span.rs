//! Byte ranges in scanned source.
//! 被扫描源码中的字节区间。

use std::fmt;
use std::ops::Range;

/// A half-open byte range `start..end` in the scanned source.
/// 被扫描源码中的半开字节区间 `start..end`。
///
/// Offsets are plain `usize` so any `&str` the scanner accepts can be
/// addressed without truncation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    /// Exclusive. / 不包含。
    pub end: usize,
}

impl Span {
    /// Placeholder for diagnostics with no location in the scanned source.
    /// 用于在源码中没有位置的诊断信息。
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Span of `len` bytes starting at `start`.
    /// 从 `start` 开始、长度为 `len` 字节的区间。
    pub fn at(start: usize, len: usize) -> Self {
        Span {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range for slicing the source.
    /// 返回可用于切片源码的字节区间。
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
