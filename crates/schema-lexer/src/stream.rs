//! A cursor over lexed tokens, for the schema parser.
//!
//! # Example
//!
//! ```
//! use schema_lexer::{tokenize, TokenKind, TokenStream};
//!
//! let tokens = tokenize("name: string .").unwrap();
//! let mut it = TokenStream::new(&tokens);
//! assert_eq!(it.next().unwrap().text, "name");
//! assert_eq!(it.peek_one().unwrap().kind, TokenKind::Colon);
//! ```

use crate::token::Token;

/// Not enough tokens left for a [`TokenStream::peek`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot peek {requested} tokens, only {available} remain")]
pub struct PeekError {
    pub requested: usize,
    pub available: usize,
}

/// A saved [`TokenStream`] position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Forward cursor over a token slice with lookahead and backtracking.
#[derive(Debug, Clone)]
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    // Index of the next token `next` returns.
    pos: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token most recently returned by `next`.
    pub fn current(&self) -> Option<&'t Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// The next `n` tokens, without consuming them.
    pub fn peek(&self, n: usize) -> Result<&'t [Token], PeekError> {
        let available = self.remaining();
        if n > available {
            return Err(PeekError {
                requested: n,
                available,
            });
        }
        Ok(&self.tokens[self.pos..self.pos + n])
    }

    pub fn peek_one(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Step back one token. Returns false at the start of the stream.
    pub fn prev(&mut self) -> bool {
        match self.pos.checked_sub(1) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn save(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0.min(self.tokens.len());
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

impl<'t> Iterator for TokenStream<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for TokenStream<'_> {}
