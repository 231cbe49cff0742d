use std::fmt;

use serde::Serialize;

/// A region of source text, tracking line and column for error reporting.
///
/// `start..end` are byte offsets into the input. `line` and `column` are
/// 1-based and describe `start`; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for schema source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A name, or the contents of an IRI reference.
    Text,
    /// A decimal or `0x`-prefixed hexadecimal numeral.
    Number,

    // Punctuation
    LeftCurl,        // {
    RightCurl,       // }
    Colon,           // :
    LeftRound,       // (
    RightRound,      // )
    At,              // @
    Comma,           // ,
    NewLine,         // \r or \n
    Dot,             // .
    LeftSquare,      // [
    RightSquare,     // ]
    ExclamationMark, // !
    Quote,           // "

    /// A double-quoted literal, delimiters included.
    QuotedText,

    // Sentinels
    EndOfFile,
    Error,
}

impl TokenKind {
    /// The character a single-character punctuation kind stands for.
    pub fn punctuation(self) -> Option<char> {
        match self {
            TokenKind::LeftCurl => Some('{'),
            TokenKind::RightCurl => Some('}'),
            TokenKind::Colon => Some(':'),
            TokenKind::LeftRound => Some('('),
            TokenKind::RightRound => Some(')'),
            TokenKind::At => Some('@'),
            TokenKind::Comma => Some(','),
            TokenKind::Dot => Some('.'),
            TokenKind::LeftSquare => Some('['),
            TokenKind::RightSquare => Some(']'),
            TokenKind::ExclamationMark => Some('!'),
            TokenKind::Quote => Some('"'),
            TokenKind::Text
            | TokenKind::Number
            | TokenKind::NewLine
            | TokenKind::QuotedText
            | TokenKind::EndOfFile
            | TokenKind::Error => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Text => "text",
            TokenKind::Number => "number",
            TokenKind::LeftCurl => "left-curl",
            TokenKind::RightCurl => "right-curl",
            TokenKind::Colon => "colon",
            TokenKind::LeftRound => "left-round",
            TokenKind::RightRound => "right-round",
            TokenKind::At => "at",
            TokenKind::Comma => "comma",
            TokenKind::NewLine => "newline",
            TokenKind::Dot => "dot",
            TokenKind::LeftSquare => "left-square",
            TokenKind::RightSquare => "right-square",
            TokenKind::ExclamationMark => "exclamation-mark",
            TokenKind::Quote => "quote",
            TokenKind::QuotedText => "quoted-text",
            TokenKind::EndOfFile => "eof",
            TokenKind::Error => "error",
        };
        f.write_str(name)
    }
}

/// A token produced by the schema lexer.
///
/// `text` is the exact input covered by `span`, except for `Error` tokens
/// where it holds the error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
