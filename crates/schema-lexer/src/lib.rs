//! Schema Lexer
//!
//! Tokenizes graph schema source (predicate and type declarations) into a
//! flat stream of tokens for the schema parser. Handles names, decimal and
//! hexadecimal numbers, punctuation, quoted strings, IRI references,
//! `#` comments and newlines. Scanning stops at the first illegal
//! character.
//!
//! # Example
//!
//! ```
//! use schema_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("name: string @index(exact) .").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Text);
//! assert_eq!(tokens[0].text, "name");
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
//! ```

pub mod chars;
pub mod engine;
pub mod state;
pub mod stream;
pub mod token;

pub use engine::{Lexer, LiteralError, ScanEngine};
pub use state::State;
pub use stream::{Checkpoint, PeekError, TokenStream};
pub use token::{Span, Token, TokenKind};

/// Lexer error with the offending source span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at line {}, column {}: {message}", .span.line, .span.column)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

/// Tokenize schema source, ending in an `EndOfFile` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::tokenize(source)
}
