//! Character class predicates for schema source.
//!
//! Every predicate is total over `char` and ASCII-only; nothing here
//! consults Unicode categories.

/// Check if a character can begin a name: `[a-zA-Z]`.
///
/// `_` is also accepted as a name start by the dispatch state, but it is
/// handled there rather than here.
pub fn is_name_begin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue a name.
///
/// ```text
/// NAME_SUFFIX ::= [a-zA-Z] | [0-9] | '_' | '.' | '-'
/// ```
///
/// `.` and `-` show up in legacy identifier schemes (freebase-style ids).
pub fn is_name_suffix(c: char) -> bool {
    is_name_begin(c) || is_digit(c) || matches!(c, '_' | '.' | '-')
}

/// Check if a character is a decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if a character is a hexadecimal digit: `[0-9a-fA-F]`.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Check if a character separates `0` from the digits of a hex numeral.
pub fn is_hex_separator(c: char) -> bool {
    matches!(c, 'x' | 'X')
}

/// Check if a character is insignificant whitespace (space or tab).
pub fn is_space(c: char) -> bool {
    matches!(c, '\u{0020}' | '\u{0009}')
}

/// Check if a character terminates a line.
pub fn is_end_of_line(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

/// Check if a character may follow `\` inside a quoted string.
pub fn is_escape_char(c: char) -> bool {
    matches!(c, 'u' | 'v' | 't' | 'b' | 'n' | 'r' | 'f' | '"' | '\'' | '\\')
}

/// Check if a character can appear unescaped in an IRI reference.
///
/// ```text
/// IRIREF ::= '<' ([^#x00-#x20<>"{}|^`\] | UCHAR)* '>'
/// ```
pub fn is_iri_ref_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}
