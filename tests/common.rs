//! Integration tests for relex-common crate.

use relex_common::{LineCol, Span, line_and_column};

#[test]
fn test_span_at() {
    let span = Span::at(3, 4);
    assert_eq!(span, Span::from(3..7));
    assert_eq!(span.len(), 4);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from(5..5);
    let non_empty = Span::from(5..10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from(5..15);
    assert_eq!(span.range(), 5..15);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_span_offsets_beyond_u32() {
    let start = u32::MAX as usize + 10;
    let span = Span::at(start, 5);
    assert_eq!(span.range(), start..start + 5);
    assert_eq!(format!("{span:?}"), format!("{start}..{}", start + 5));
}

// ============================================================================
// Line / column
// ============================================================================

#[test]
fn test_line_and_column_after_newline() {
    // "ab\ncd?" -> `?` at offset 5, last newline at 2.
    assert_eq!(line_and_column("ab\ncd?", 5), LineCol::new(1, 3));
}

#[test]
fn test_line_and_column_without_newline() {
    assert_eq!(line_and_column("hello", 4), LineCol::new(0, 5));
}

#[test]
fn test_line_and_column_counts_every_newline() {
    let source = "a\n\n\nb";
    assert_eq!(line_and_column(source, 4), LineCol::new(3, 1));
}

#[test]
fn test_line_col_display() {
    assert_eq!(LineCol::new(2, 7).to_string(), "2:7");
}
