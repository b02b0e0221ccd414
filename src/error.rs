//! The error and result types for trojanlint
use std::path::PathBuf;

/// The result of a trojanlint operation
pub type Result<T> = std::result::Result<T, Error>;

/// A trojanlint error
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The source bytes are not valid UTF-8 (this includes lone surrogates)
    #[error("source of `{name}` is not valid UTF-8 at byte {offset}")]
    InvalidSource { name: String, offset: usize },

    /// The host-language tokenizer could not lex the source
    #[error("syntax error at {row}:{col}: {message}")]
    SyntaxError {
        message: String,
        row: usize,
        col: usize,
    },

    /// A lookup outside of `0..=len(source)`
    #[error("index {index} is out of bounds for a source of {len} codepoints")]
    IndexOutOfBounds { index: usize, len: usize },

    /// IO error
    #[error("IO error for {path:?}: {err}")]
    IOError { path: PathBuf, err: std::io::Error },

    /// Error while reading the tool configuration
    #[error("error reading the configuration: {0}")]
    ConfigError(#[from] figment::Error),
}
