//! A cursor over scanned tokens, consumed by a parser.
//! 供语法分析器消费的 token 游标。

use crate::error::StreamError;
use crate::rule::Category;
use crate::token::Token;

/// A finished token sequence plus a read cursor.
///
/// The sequence never changes after construction; only the cursor moves.
/// Reads past the end return [`StreamError`] rather than a placeholder token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
    pos: usize,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Index of the next unread token.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens at or after the cursor.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_inner(self) -> Vec<Token> {
        self.tokens
    }

    /// Returns true while more than one token is left.
    ///
    /// The last token is treated as a terminator and is never reported as
    /// available, so a `while has_more() { get() }` loop stops before it.
    pub fn has_more(&self) -> bool {
        self.pos < self.tokens.len().saturating_sub(1)
    }

    /// The token two positions behind the cursor, i.e. the one before the
    /// token just consumed.
    pub fn peek_previous(&self) -> Result<&Token, StreamError> {
        let index = self
            .pos
            .checked_sub(2)
            .ok_or(StreamError::NoPrevious { pos: self.pos })?;
        self.at(index)
    }

    /// Consume and return the token under the cursor.
    /// 消费并返回游标处的 token。
    ///
    /// The token is cloned so callers can keep it while reading further.
    pub fn get(&mut self) -> Result<Token, StreamError> {
        let token = self.at(self.pos)?.clone();
        self.pos += 1;
        Ok(token)
    }

    /// The token under the cursor, without consuming it.
    pub fn peek_next(&self) -> Result<&Token, StreamError> {
        self.at(self.pos)
    }

    /// Move the cursor forward by `n` without bounds checking. Later reads
    /// fail if this moves past the end.
    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Collect the tokens after the cursor up to the first one whose category
    /// is in `categories`.
    ///
    /// The search starts one past the cursor. If a delimiter is found at
    /// offset `i` from there, returns a fresh stream over the `i` tokens before
    /// it together with `Some(i)`. Otherwise returns an empty stream and
    /// `None`. The cursor of `self` does not move.
    pub fn until(&self, categories: &[Category]) -> (Tokens, Option<usize>) {
        let Some(rest) = self.tokens.get(self.pos.saturating_add(1)..) else {
            return (Tokens::default(), None);
        };

        match rest
            .iter()
            .position(|token| categories.contains(&token.category))
        {
            Some(found) => (Tokens::new(rest[..found].to_vec()), Some(found)),
            None => (Tokens::default(), None),
        }
    }

    fn at(&self, index: usize) -> Result<&Token, StreamError> {
        self.tokens
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn out_of_bounds(&self, index: usize) -> StreamError {
        StreamError::OutOfBounds {
            index,
            len: self.tokens.len(),
        }
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
