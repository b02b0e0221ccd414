//! Host-language tokenizer interface
//!
//! The analyzer consumes tokenizers through the [`Tokenize`] trait: a pure
//! function from source text to a sequence of typed tokens. Implementations
//! must uphold the tiling contract: tokens cover the source with no gaps or
//! overlaps, each token's string is exactly the covered substring, and a
//! trailing (possibly empty) `space` token follows the last real token.
use derive_more::Display;
use serde::Serialize;

use crate::{error::Result, linemap::LineMap, nits::Token};

pub mod python;

/// The closed set of token types the analyzer recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[display("name")]
    Name,
    #[display("string")]
    String,
    #[display("op")]
    Op,
    #[display("number")]
    Number,
    #[display("space")]
    Space,
    #[display("comment")]
    Comment,
    #[display("newline")]
    Newline,
}

impl TokenKind {
    /// Number of token kinds, for policy tables indexed by kind
    pub(crate) const COUNT: usize = 7;

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// String literal prefix flags, as exposed by the host language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StringFlags {
    /// Raw string (`r` prefix): escapes are not processed
    pub raw: bool,

    /// Bytes literal (`b` prefix)
    pub bytes: bool,

    /// Formatted string (`f` prefix): the content embeds expressions
    pub format: bool,

    /// Explicit unicode marker (`u` prefix)
    pub unicode: bool,
}

/// Decomposition of a string token into delimiter, content and flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    /// The quote characters (e.g. `'` or `"""`)
    pub delimiter: String,

    /// The logical content, with quote-escape sequences resolved (except in
    /// raw strings)
    pub content: String,

    /// The prefix flags
    pub flags: StringFlags,
}

/// The trait implemented by all tokenizers
pub trait Tokenize {
    /// Split the source into tokens upholding the tiling contract
    ///
    /// Fails with [`Error::SyntaxError`][crate::error::Error::SyntaxError]
    /// when the source cannot be lexed.
    fn tokenize(&self, source: &str, linemap: &LineMap) -> Result<Vec<Token>>;
}
