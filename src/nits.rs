//! The finding model: code parts and the nits attached to them
//!
//! A [`Nit`] is a single reported Unicode hazard. Nits attach to exactly one
//! [`CodePart`]: a token, a whole source line, or the whole file. Attachment
//! order is preserved and observable.
use derive_more::{From, IsVariant};
use serde::Serialize;

use crate::{
    linemap::TextPos,
    tokenizer::{StringLiteral, TokenKind},
};

/// Escaped representation of a single character
///
/// Characters below `min_passthru` or above ASCII are rendered as `\xNN`,
/// `\uNNNN` or `\UNNNNNNNN` escapes made of printable ASCII.
#[must_use]
pub fn safe_char_repr(c: char, min_passthru: u32) -> String {
    let codepoint = c as u32;
    if (min_passthru..127).contains(&codepoint) {
        c.to_string()
    } else if codepoint <= 0xff {
        format!("\\x{codepoint:02x}")
    } else if codepoint <= 0xffff {
        format!("\\u{codepoint:04x}")
    } else {
        format!("\\U{codepoint:08x}")
    }
}

/// Escaped representations for each character of a string
///
/// Leading/trailing spaces would be invisible in a report, so when the string
/// starts or ends with a space, all spaces are escaped too.
#[must_use]
pub fn safe_char_reprs(string: &str) -> Vec<String> {
    let min_passthru = if string.starts_with(' ') || string.ends_with(' ') {
        33
    } else {
        32
    };
    string
        .chars()
        .map(|c| safe_char_repr(c, min_passthru))
        .collect()
}

/// The whole string escaped to printable ASCII
#[must_use]
pub fn string_safe(string: &str) -> String {
    safe_char_reprs(string).concat()
}

/// A lexical token of the host language
///
/// Tokens tile the source: the end of one is the start of the next, and a
/// trailing empty `space` token is synthesized after the last real token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token type
    pub kind: TokenKind,

    /// The raw substring of the source covered by this token
    pub string: String,

    /// Start of the token (inclusive)
    pub start: TextPos,

    /// End of the token (exclusive)
    pub end: TextPos,

    /// String literal decomposition, for `string` tokens which support it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<StringLiteral>,

    /// The nits attached to this token, in detection order
    pub nits: Vec<Nit>,
}

impl Token {
    /// The token string escaped to printable ASCII
    #[must_use]
    pub fn string_safe(&self) -> String {
        string_safe(&self.string)
    }

    /// A copy of this token without its attached nits
    ///
    /// Used when a token is referenced from another token's nit.
    #[must_use]
    pub fn without_nits(&self) -> Self {
        Self {
            nits: Vec::new(),
            ..self.clone()
        }
    }
}

/// A whole source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// 1-based line number
    pub lineno: usize,

    /// The line's text, including its terminator
    pub string: String,

    /// Start of the line (inclusive)
    pub start: TextPos,

    /// End of the line (exclusive)
    pub end: TextPos,

    /// The nits attached to this line
    pub nits: Vec<Nit>,
}

/// The whole source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    /// The name the source was analyzed under
    pub name: String,

    /// Start of the file
    pub start: TextPos,

    /// End of the file (exclusive)
    pub end: TextPos,

    /// The nits attached to the file
    pub nits: Vec<Nit>,
}

/// Anything nits can attach to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, From, IsVariant)]
#[serde(untagged)]
pub enum CodePart {
    Token(Token),
    Line(Line),
    File(File),
}

impl CodePart {
    /// The variant name, as used in reports
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CodePart::Token(_) => "Token",
            CodePart::Line(_) => "Line",
            CodePart::File(_) => "File",
        }
    }

    /// The nits attached to this part, in detection order
    #[must_use]
    pub fn nits(&self) -> &[Nit] {
        match self {
            CodePart::Token(t) => &t.nits,
            CodePart::Line(l) => &l.nits,
            CodePart::File(f) => &f.nits,
        }
    }

    /// Filter the attached nits by their report name (e.g. `"ReorderedToken"`)
    #[must_use]
    pub fn nits_by_name(&self, name: &str) -> Vec<&Nit> {
        self.nits().iter().filter(|n| n.name() == name).collect()
    }

    /// Start position of the part
    #[must_use]
    pub fn start(&self) -> TextPos {
        match self {
            CodePart::Token(t) => t.start,
            CodePart::Line(l) => l.start,
            CodePart::File(f) => f.start,
        }
    }

    /// End position of the part (exclusive)
    #[must_use]
    pub fn end(&self) -> TextPos {
        match self {
            CodePart::Token(t) => t.end,
            CodePart::Line(l) => l.end,
            CodePart::File(f) => f.end,
        }
    }

    /// The raw text covered by the part (the file name for `File` parts)
    #[must_use]
    pub fn string(&self) -> &str {
        match self {
            CodePart::Token(t) => &t.string,
            CodePart::Line(l) => &l.string,
            CodePart::File(f) => &f.name,
        }
    }
}

/// The visually reordered rendition of a span of source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reordering {
    /// The text in visual order, pulled from the whole visual interval the
    /// span covers (it can spill outside of the span's logical range)
    pub reordered: String,

    /// For each codepoint of `reordered`, whether it belongs to the span
    pub char_in_token: Vec<bool>,
}

impl Reordering {
    /// The reordered text escaped to printable ASCII
    #[must_use]
    pub fn reordered_safe(&self) -> String {
        string_safe(&self.reordered)
    }

    /// An underline row marking the characters that belong to the span
    ///
    /// `None` when every reordered character belongs to the span.
    #[must_use]
    pub fn reordered_safe_underline(&self) -> Option<String> {
        if self.char_in_token.iter().all(|&b| b) {
            return None;
        }
        Some(
            self.char_in_token
                .iter()
                .zip(safe_char_reprs(&self.reordered))
                .map(|(&is_in, repr)| {
                    let mark = if is_in { "^" } else { " " };
                    mark.repeat(repr.chars().count())
                })
                .collect(),
        )
    }
}

/// A single reported Unicode hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IsVariant)]
#[serde(tag = "name")]
pub enum Nit {
    /// A control, format, private-use or unassigned codepoint outside of the
    /// allowed whitespace set
    ControlCharacter {
        /// Codepoint offset of the character inside the owning part
        offset: usize,
        control_char: char,
    },

    /// The part contains codepoints outside of ASCII
    #[serde(rename = "NonASCII")]
    NonAscii,

    /// The part maps to a plain-ASCII lookalike under the confusables data
    #[serde(rename = "ASCIILookalike")]
    AsciiLookalike { lookalike: String },

    /// Another token normalizes to the same form but differs on the wire
    HasLookalike { other: Box<Token> },

    /// The part differs from its NFKC normalization
    #[serde(rename = "NonNFKC")]
    NonNfkc { normalized: String },

    /// The token string violates the policy for its token type
    PolicyFail { reason: String },

    /// The token is displayed in a different order than it is stored
    ReorderedToken(Reordering),

    /// The line is displayed in a different order than it is stored
    ReorderedLine(Reordering),

    /// The file declares a source encoding other than UTF-8
    UnusualEncoding { encoding: String },
}

impl Nit {
    /// The nit name, as used in reports
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Nit::ControlCharacter { .. } => "ControlCharacter",
            Nit::NonAscii => "NonASCII",
            Nit::AsciiLookalike { .. } => "ASCIILookalike",
            Nit::HasLookalike { .. } => "HasLookalike",
            Nit::NonNfkc { .. } => "NonNFKC",
            Nit::PolicyFail { .. } => "PolicyFail",
            Nit::ReorderedToken(_) => "ReorderedToken",
            Nit::ReorderedLine(_) => "ReorderedLine",
            Nit::UnusualEncoding { .. } => "UnusualEncoding",
        }
    }
}

impl std::fmt::Display for Nit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nit::ControlCharacter {
                offset,
                control_char,
            } => write!(
                f,
                "control character `{}` at offset {offset}",
                safe_char_repr(*control_char, 33)
            ),
            Nit::NonAscii => write!(f, "contains non-ASCII characters"),
            Nit::AsciiLookalike { lookalike } => {
                write!(f, "looks like ASCII `{lookalike}`")
            }
            Nit::HasLookalike { other } => write!(
                f,
                "lookalike of `{}` defined at {}",
                other.string_safe(),
                other.start,
            ),
            Nit::NonNfkc { normalized } => write!(
                f,
                "not NFKC-normalized, normalizes to `{}`",
                string_safe(normalized)
            ),
            Nit::PolicyFail { reason } => write!(f, "policy violation: {reason}"),
            Nit::ReorderedToken(r) => {
                write!(f, "token is displayed as `{}`", r.reordered_safe())
            }
            Nit::ReorderedLine(r) => {
                write!(f, "line is displayed as `{}`", r.reordered_safe())
            }
            Nit::UnusualEncoding { encoding } => {
                write!(f, "unusual source encoding `{encoding}`")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_safe_char_repr() {
        assert_eq!(safe_char_repr('a', 32), "a");
        assert_eq!(safe_char_repr(' ', 32), " ");
        assert_eq!(safe_char_repr(' ', 33), "\\x20");
        assert_eq!(safe_char_repr('\n', 32), "\\x0a");
        assert_eq!(safe_char_repr('\u{5d0}', 32), "\\u05d0");
        assert_eq!(safe_char_repr('\u{1ff80}', 32), "\\U0001ff80");
        assert_eq!(safe_char_repr('\u{7f}', 32), "\\x7f");
    }

    #[test]
    fn test_safe_char_reprs_spaces() {
        // inner spaces stay as-is, but not when the string starts or ends
        // with one
        assert_eq!(string_safe("a b"), "a b");
        assert_eq!(string_safe(" ab"), "\\x20ab");
        assert_eq!(string_safe("ab "), "ab\\x20");
    }

    #[test]
    fn test_underline() {
        let reordering = Reordering {
            reordered: "a\u{5d2}b".into(),
            char_in_token: vec![true, true, false],
        };
        // the escaped Hebrew letter is 6 columns wide
        assert_eq!(
            reordering.reordered_safe_underline().unwrap(),
            "^^^^^^^ ",
        );
        let all_in = Reordering {
            reordered: "ab".into(),
            char_in_token: vec![true, true],
        };
        assert_eq!(all_in.reordered_safe_underline(), None);
    }
}
