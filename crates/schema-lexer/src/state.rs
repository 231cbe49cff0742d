//! Scanning states for schema source.
//!
//! Each state consumes characters through a [`ScanEngine`], emits at most
//! one token, and names the state to run next. [`run`] drives them from
//! [`State::Text`] until one reports that scanning is finished.

use crate::chars::{
    is_digit, is_end_of_line, is_hex_digit, is_hex_separator, is_name_begin, is_name_suffix,
    is_space,
};
use crate::engine::ScanEngine;
use crate::token::TokenKind;
use crate::LexError;

/// What a state hands back to the driver: the next state, `None` once
/// `EndOfFile` has been emitted, or the error that halted the scan.
pub type Transition = Result<Option<State>, LexError>;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Dispatch: classify the next character and route it.
    Text,
    /// Rest of a name.
    Word,
    /// Decimal digits.
    Number,
    /// `0x` followed by hex digits.
    HexNumber,
    /// `#` up to the end of the line.
    Comment,
}

impl State {
    /// Run this state once.
    pub fn run<E: ScanEngine + ?Sized>(self, l: &mut E) -> Transition {
        match self {
            State::Text => lex_text(l),
            State::Word => lex_word(l),
            State::Number => lex_number(l),
            State::HexNumber => lex_hex_number(l),
            State::Comment => lex_comment(l),
        }
    }
}

/// Run the state machine from [`State::Text`] to completion.
pub fn run<E: ScanEngine + ?Sized>(l: &mut E) -> Result<(), LexError> {
    let mut state = Some(State::Text);
    let mut steps = 0usize;
    while let Some(current) = state {
        tracing::trace!(state = ?current, "entering state");
        steps += 1;
        state = match current.run(l) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(
                    line = err.span.line,
                    column = err.span.column,
                    error = %err.message,
                    "schema lexing failed"
                );
                return Err(err);
            }
        };
    }
    tracing::debug!(steps, "schema lexing finished");
    Ok(())
}

fn lex_text<E: ScanEngine + ?Sized>(l: &mut E) -> Transition {
    while let Some(c) = l.next() {
        match c {
            c if is_name_begin(c) => {
                l.backup();
                return Ok(Some(State::Word));
            }
            c if is_space(c) => l.ignore(),
            c if is_end_of_line(c) => l.emit(TokenKind::NewLine),
            '.' => l.emit(TokenKind::Dot),
            '#' => return Ok(Some(State::Comment)),
            ',' => l.emit(TokenKind::Comma),
            '<' => {
                if let Err(err) = l.read_iri_ref(TokenKind::Text) {
                    return Err(l.fail(format!("Invalid schema: {err}")));
                }
            }
            '{' => l.emit(TokenKind::LeftCurl),
            '}' => l.emit(TokenKind::RightCurl),
            '(' => l.emit(TokenKind::LeftRound),
            ')' => l.emit(TokenKind::RightRound),
            ':' => l.emit(TokenKind::Colon),
            '@' => l.emit(TokenKind::At),
            '[' => l.emit(TokenKind::LeftSquare),
            ']' => l.emit(TokenKind::RightSquare),
            '!' => l.emit(TokenKind::ExclamationMark),
            // Predicates can start with `_`; it stays in the pending span.
            '_' => return Ok(Some(State::Word)),
            c if is_digit(c) => {
                let (sep, digit) = l.peek_two();
                l.backup();
                let hex = c == '0'
                    && sep.is_some_and(is_hex_separator)
                    && digit.is_some_and(is_hex_digit);
                return Ok(Some(if hex { State::HexNumber } else { State::Number }));
            }
            '"' => {
                if let Err(err) = l.read_quoted_string() {
                    return Err(l.fail(format!("Invalid schema: {err}")));
                }
                l.emit(TokenKind::QuotedText);
            }
            _ => {
                let message = format!("Invalid schema. Unexpected {}", l.pending());
                return Err(l.fail(message));
            }
        }
    }
    if !l.pending().is_empty() {
        l.emit(TokenKind::Text);
    }
    l.emit(TokenKind::EndOfFile);
    Ok(None)
}

fn lex_word<E: ScanEngine + ?Sized>(l: &mut E) -> Transition {
    // The caller already checked the name start and left it pending.
    while l.next().is_some_and(is_name_suffix) {}
    l.backup();
    l.emit(TokenKind::Text);
    Ok(Some(State::Text))
}

fn lex_number<E: ScanEngine + ?Sized>(l: &mut E) -> Transition {
    while l.next().is_some_and(is_digit) {}
    l.backup();
    l.emit(TokenKind::Number);
    Ok(Some(State::Text))
}

fn lex_hex_number<E: ScanEngine + ?Sized>(l: &mut E) -> Transition {
    // The caller peeked 0[xX] followed by a hex digit.
    l.next();
    l.next();
    while l.next().is_some_and(is_hex_digit) {}
    l.backup();
    l.emit(TokenKind::Number);
    Ok(Some(State::Text))
}

fn lex_comment<E: ScanEngine + ?Sized>(l: &mut E) -> Transition {
    loop {
        match l.next() {
            None => {
                l.ignore();
                l.emit(TokenKind::EndOfFile);
                return Ok(None);
            }
            Some(c) if is_end_of_line(c) => {
                // Keep the terminator: drop the body, then emit it alone.
                l.backup();
                l.ignore();
                l.next();
                l.emit(TokenKind::NewLine);
                return Ok(Some(State::Text));
            }
            Some(_) => {}
        }
    }
}
