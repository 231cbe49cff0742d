//! The scan engine the schema state machine rides on.
//!
//! [`ScanEngine`] is the narrow capability the states in [`crate::state`]
//! consume: a read cursor with a one-step rewind, two-character lookahead,
//! a pending span that is either emitted or ignored, and readers for the
//! two delimited literals (quoted strings and IRI references).
//!
//! [`Lexer`] is the in-memory implementation. It keeps a `&str` source,
//! byte offsets for the pending span, line/column for every cursor move,
//! and collects emitted tokens into a `Vec`.

use crate::chars::{is_escape_char, is_hex_digit, is_iri_ref_char};
use crate::token::{Span, Token, TokenKind};
use crate::LexError;

/// Failure while reading a quoted string or an IRI reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("unexpected end of input in quoted string")]
    UnterminatedString,
    #[error("{0:?} is not a valid escape character")]
    InvalidEscape(char),
    #[error("unexpected end of IRI")]
    UnterminatedIri,
    #[error("unexpected character {0:?} while parsing IRI")]
    UnexpectedIriChar(char),
}

/// Cursor, rewind and emission primitives used by the scanning states.
pub trait ScanEngine {
    /// Read the next character and advance, or `None` at end of input.
    fn next(&mut self) -> Option<char>;

    /// Undo the most recent [`next`](ScanEngine::next).
    ///
    /// Only one level of rewind exists. Calling this twice without a read
    /// in between, or after the pending span was emitted or ignored, panics.
    fn backup(&mut self);

    /// The next two characters, without consuming them.
    fn peek_two(&self) -> (Option<char>, Option<char>);

    /// Text of the pending span `[start, current)`.
    fn pending(&self) -> &str;

    /// Drop the pending span without emitting it.
    fn ignore(&mut self);

    /// Emit a token of `kind` for the pending span.
    fn emit(&mut self, kind: TokenKind);

    /// Read the rest of a double-quoted literal. The opening quote is
    /// already consumed; on success the pending span covers the whole
    /// literal, closing quote included.
    fn read_quoted_string(&mut self) -> Result<(), LiteralError>;

    /// Read the rest of an IRI reference and emit its contents as `kind`.
    /// The opening `<` is already consumed; both brackets are discarded.
    fn read_iri_ref(&mut self, kind: TokenKind) -> Result<(), LiteralError>;

    /// Record a lexical error for the pending span.
    fn fail(&mut self, message: String) -> LexError;
}

/// Cursor state before the last read, kept for a single rewind.
#[derive(Debug, Clone, Copy)]
struct Step {
    width: usize,
    line: usize,
    column: usize,
}

/// In-memory scan engine over a source string.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    start: usize,
    start_line: usize,
    start_column: usize,
    pos: usize,
    line: usize,
    column: usize,
    last: Option<Step>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            start_line: 1,
            start_column: 1,
            pos: 0,
            line: 1,
            column: 1,
            last: None,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(input);
        lexer.run()?;
        Ok(lexer.tokens)
    }

    /// Run the schema state machine to completion.
    ///
    /// Tokens emitted before an error stay available through
    /// [`tokens`](Lexer::tokens), followed by one `Error` token.
    pub fn run(&mut self) -> Result<(), LexError> {
        crate::state::run(self)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.pos, self.start_line, self.start_column)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
        self.last = None;
    }

    /// Consume `\uXXXX` or `\UXXXXXXXX` after an already-read backslash.
    /// Leaves the cursor and the rewind slot untouched when the escape is
    /// malformed.
    fn accept_uchar(&mut self) -> bool {
        let rest = &self.input[self.pos..];
        let digits = match rest.chars().next() {
            Some('u') => 4,
            Some('U') => 8,
            _ => return false,
        };
        let valid = rest[1..]
            .chars()
            .take(digits)
            .filter(|&c| is_hex_digit(c))
            .count();
        if valid != digits {
            return false;
        }
        // Marker and digits are all ASCII.
        self.pos += 1 + digits;
        self.column += 1 + digits;
        true
    }
}

impl ScanEngine for Lexer<'_> {
    fn next(&mut self) -> Option<char> {
        let c = self.peek();
        self.last = Some(Step {
            width: c.map_or(0, char::len_utf8),
            line: self.line,
            column: self.column,
        });
        if let Some(c) = c {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        c
    }

    fn backup(&mut self) {
        let step = self
            .last
            .take()
            .expect("backup without a preceding read");
        self.pos -= step.width;
        self.line = step.line;
        self.column = step.column;
    }

    fn peek_two(&self) -> (Option<char>, Option<char>) {
        let mut rest = self.input[self.pos..].chars();
        (rest.next(), rest.next())
    }

    fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    fn ignore(&mut self) {
        self.mark_start();
    }

    fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.pending(), self.span());
        self.tokens.push(token);
        self.mark_start();
    }

    fn read_quoted_string(&mut self) -> Result<(), LiteralError> {
        loop {
            match self.next() {
                None => return Err(LiteralError::UnterminatedString),
                Some('\\') => match self.next() {
                    None => return Err(LiteralError::UnterminatedString),
                    Some(c) if !is_escape_char(c) => return Err(LiteralError::InvalidEscape(c)),
                    Some(_) => {}
                },
                Some('"') => return Ok(()),
                Some(_) => {}
            }
        }
    }

    fn read_iri_ref(&mut self, kind: TokenKind) -> Result<(), LiteralError> {
        self.ignore(); // <
        loop {
            let accepted = match self.next() {
                Some('\\') => self.accept_uchar(),
                Some(c) => is_iri_ref_char(c),
                None => false,
            };
            if !accepted {
                self.backup();
                break;
            }
        }
        match self.peek() {
            Some('>') => {
                self.emit(kind);
                self.next();
                self.ignore(); // >
                Ok(())
            }
            Some(c) => {
                // Leave only the offending character pending for `fail`.
                self.ignore();
                self.next();
                Err(LiteralError::UnexpectedIriChar(c))
            }
            None => Err(LiteralError::UnterminatedIri),
        }
    }

    fn fail(&mut self, message: String) -> LexError {
        let span = self.span();
        self.tokens
            .push(Token::new(TokenKind::Error, message.clone(), span));
        LexError { message, span }
    }
}
