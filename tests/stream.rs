//! Integration tests for the relex-lexer token stream.

use pretty_assertions::assert_eq;
use relex_lexer::{Category, StreamError, Token, Tokens};

const A: Category = Category(1);
const B: Category = Category(2);
const C: Category = Category(3);
const D: Category = Category(4);

fn abcd() -> Tokens {
    Tokens::new(vec![
        Token::new("a", A, 0),
        Token::new("b", B, 1),
        Token::new("c", C, 2),
        Token::new("d", D, 3),
    ])
}

fn texts(tokens: &Tokens) -> Vec<&str> {
    tokens.as_slice().iter().map(|t| t.text.as_str()).collect()
}

// ============================================================================
// Cursor movement
// ============================================================================

#[test]
fn test_get_exactly_len_times() {
    let mut tokens = abcd();
    for expected in ["a", "b", "c", "d"] {
        assert_eq!(tokens.get().unwrap().text, expected);
    }
    assert_eq!(
        tokens.get(),
        Err(StreamError::OutOfBounds { index: 4, len: 4 })
    );
}

#[test]
fn test_peek_next_does_not_advance() {
    let mut tokens = abcd();
    assert_eq!(tokens.peek_next().unwrap().text, "a");
    assert_eq!(tokens.peek_next().unwrap().text, "a");
    assert_eq!(tokens.position(), 0);
    tokens.skip(4);
    assert!(tokens.peek_next().is_err());
}

#[test]
fn test_peek_previous_is_two_behind() {
    let mut tokens = abcd();
    assert_eq!(
        tokens.peek_previous(),
        Err(StreamError::NoPrevious { pos: 0 })
    );
    tokens.get().unwrap();
    assert_eq!(
        tokens.peek_previous(),
        Err(StreamError::NoPrevious { pos: 1 })
    );
    tokens.get().unwrap();
    tokens.get().unwrap();
    assert_eq!(tokens.peek_previous().unwrap().text, "b");
}

#[test]
fn test_peek_previous_past_end() {
    let mut tokens = abcd();
    tokens.skip(10);
    assert_eq!(
        tokens.peek_previous(),
        Err(StreamError::OutOfBounds { index: 8, len: 4 })
    );
}

#[test]
fn test_skip_is_unchecked() {
    let mut tokens = abcd();
    tokens.skip(2);
    assert_eq!(tokens.get().unwrap().text, "c");
    tokens.skip(7);
    assert_eq!(tokens.position(), 10);
    assert_eq!(tokens.remaining(), 0);
}

// ============================================================================
// has_more keeps the last token in reserve
// ============================================================================

#[test]
fn test_has_more_never_reports_last_token() {
    let mut tokens = abcd();
    let mut consumed = Vec::new();
    while tokens.has_more() {
        consumed.push(tokens.get().unwrap().text.clone());
    }
    assert_eq!(consumed, vec!["a", "b", "c"]);
    assert_eq!(tokens.peek_next().unwrap().text, "d");
}

#[test]
fn test_has_more_on_short_streams() {
    assert!(!Tokens::default().has_more());
    assert!(!Tokens::new(vec![Token::new("x", A, 0)]).has_more());
}

// ============================================================================
// until
// ============================================================================

#[test]
fn test_until_excludes_cursor_and_delimiter() {
    let tokens = abcd();
    let (inner, found) = tokens.until(&[D]);
    assert_eq!(texts(&inner), vec!["b", "c"]);
    assert_eq!(found, Some(2));
    assert_eq!(inner.position(), 0);
}

#[test]
fn test_until_without_delimiter() {
    let tokens = abcd();
    let (inner, found) = tokens.until(&[Category(99)]);
    assert!(inner.is_empty());
    assert_eq!(found, None);
}

#[test]
fn test_until_any_of_several_categories() {
    let tokens = abcd();
    let (inner, found) = tokens.until(&[D, C]);
    assert_eq!(texts(&inner), vec!["b"]);
    assert_eq!(found, Some(1));
}

#[test]
fn test_until_adjacent_delimiter_gives_empty_stream() {
    let tokens = abcd();
    let (inner, found) = tokens.until(&[B]);
    assert!(inner.is_empty());
    assert_eq!(found, Some(0));
}

#[test]
fn test_until_ignores_token_under_cursor() {
    let tokens = abcd();
    let (_, found) = tokens.until(&[A]);
    assert_eq!(found, None);
}

#[test]
fn test_until_from_later_position() {
    let mut tokens = abcd();
    tokens.get().unwrap();
    let (inner, found) = tokens.until(&[D]);
    assert_eq!(texts(&inner), vec!["c"]);
    assert_eq!(found, Some(1));
}
