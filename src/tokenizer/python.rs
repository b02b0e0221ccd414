//! A Python-flavored tokenizer
//!
//! This is a deliberately coarse lexer: it recognizes the closed token set
//! of the analyzer (names, strings with their prefixes, numbers, operators,
//! comments, whitespace) without implementing the full Python grammar.
//! Anything it cannot classify becomes a single-character `op` token, the
//! same bucket CPython's tokenizer uses for error tokens.
use icu_properties::{
    CodePointSetData, CodePointSetDataBorrowed,
    props::{XidContinue, XidStart},
};
use winnow::{
    Parser, Result as PResult,
    combinator::{alt, preceded, repeat},
    token::{any, take_while},
};

use crate::{
    error::{Error, Result},
    linemap::LineMap,
    nits::Token,
    tokenizer::{StringFlags, StringLiteral, TokenKind, Tokenize},
};

/// Multi-character operators, longest first
const OPS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "...", "!=", ">=", "<=", "==", "->", ":=", "+=", "-=", "*=", "/=",
    "%=", "@=", "&=", "|=", "^=", "**", "//", "<<", ">>",
];

/// Tokenizer for Python source code
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTokenizer;

impl Tokenize for PythonTokenizer {
    fn tokenize(&self, source: &str, linemap: &LineMap) -> Result<Vec<Token>> {
        Scanner::new(source, linemap).run()
    }
}

struct Scanner<'s> {
    chars: Vec<char>,
    pos: usize,
    linemap: &'s LineMap,
    tokens: Vec<Token>,
    xid_start: CodePointSetDataBorrowed<'static>,
    xid_continue: CodePointSetDataBorrowed<'static>,
}

impl<'s> Scanner<'s> {
    fn new(source: &str, linemap: &'s LineMap) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            linemap,
            tokens: Vec::new(),
            xid_start: CodePointSetData::new::<XidStart>(),
            xid_continue: CodePointSetData::new::<XidContinue>(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while self.pos < self.chars.len() {
            let start = self.pos;
            let c = self.chars[self.pos];
            let (kind, literal) = if c == '\n' || (c == '\r' && self.peek(1) == Some('\n')) {
                self.pos += if c == '\r' { 2 } else { 1 };
                (TokenKind::Newline, None)
            } else if is_blank(c) {
                self.blank_run();
                (TokenKind::Space, None)
            } else if c == '#' {
                while self.pos < self.chars.len() && self.chars[self.pos] != '\n' {
                    self.pos += 1;
                }
                (TokenKind::Comment, None)
            } else if c == '\'' || c == '"' {
                let literal = self.string(start, StringFlags::default())?;
                (TokenKind::String, Some(literal))
            } else if self.is_name_start(c) {
                self.name_or_prefixed_string(start)?
            } else if c.is_ascii_digit() || (c == '.' && self.peek(1).is_some_and(|n| n.is_ascii_digit())) {
                self.number();
                (TokenKind::Number, None)
            } else {
                self.op();
                (TokenKind::Op, None)
            };
            self.push(kind, start, literal)?;
        }
        // tokens must tile the source, with a synthesized trailing space
        // token after the last real one
        let end = self.chars.len();
        self.pos = end;
        self.push(TokenKind::Space, end, None)?;
        Ok(self.tokens)
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn is_name_start(&self, c: char) -> bool {
        c == '_' || self.xid_start.contains(c)
    }

    fn is_name_continue(&self, c: char) -> bool {
        c == '_' || self.xid_continue.contains(c)
    }

    fn blank_run(&mut self) {
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            // a `\r\n` pair belongs to the following newline token
            if !is_blank(c) || (c == '\r' && self.peek(1) == Some('\n')) {
                break;
            }
            self.pos += 1;
        }
    }

    fn name_or_prefixed_string(&mut self, start: usize) -> Result<(TokenKind, Option<StringLiteral>)> {
        while self.pos < self.chars.len() && self.is_name_continue(self.chars[self.pos]) {
            self.pos += 1;
        }
        if matches!(self.peek(0), Some('\'' | '"')) {
            let prefix: String = self.chars[start..self.pos].iter().collect();
            if let Some(flags) = parse_prefix(&prefix) {
                let literal = self.string(start, flags)?;
                return Ok((TokenKind::String, Some(literal)));
            }
        }
        Ok((TokenKind::Name, None))
    }

    fn string(&mut self, token_start: usize, flags: StringFlags) -> Result<StringLiteral> {
        let quote = self.chars[self.pos];
        let triple = self.peek(1) == Some(quote) && self.peek(2) == Some(quote);
        let delim_len = if triple { 3 } else { 1 };
        self.pos += delim_len;
        let content_start = self.pos;
        loop {
            let Some(c) = self.peek(0) else {
                return Err(self.syntax_error(token_start, "unterminated string literal"));
            };
            if c == '\\' {
                // a backslash always escapes the next character for
                // termination purposes, raw strings included
                self.pos += 2;
                continue;
            }
            if !triple && c == '\n' {
                return Err(self.syntax_error(token_start, "EOL while scanning string literal"));
            }
            if c == quote && (!triple || (self.peek(1) == Some(quote) && self.peek(2) == Some(quote)))
            {
                let content_end = self.pos;
                self.pos += delim_len;
                let raw: String = self.chars[content_start..content_end].iter().collect();
                let content = if flags.raw { raw } else { unescape(&raw) };
                let delimiter: String = self.chars[content_start - delim_len..content_start]
                    .iter()
                    .collect();
                return Ok(StringLiteral {
                    delimiter,
                    content,
                    flags,
                });
            }
            self.pos += 1;
        }
    }

    fn number(&mut self) {
        let radix_prefixed = self.peek(0) == Some('0')
            && matches!(self.peek(1), Some('x' | 'X' | 'b' | 'B' | 'o' | 'O'));
        let mut prev = '\0';
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            let exponent_sign =
                !radix_prefixed && matches!(c, '+' | '-') && matches!(prev, 'e' | 'E');
            if !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign) {
                break;
            }
            prev = c;
            self.pos += 1;
        }
    }

    fn op(&mut self) {
        for op in OPS {
            if op
                .chars()
                .enumerate()
                .all(|(i, oc)| self.peek(i) == Some(oc))
            {
                self.pos += op.len();
                return;
            }
        }
        self.pos += 1;
    }

    fn push(&mut self, kind: TokenKind, start: usize, literal: Option<StringLiteral>) -> Result<()> {
        let string: String = self.chars[start..self.pos].iter().collect();
        self.tokens.push(Token {
            kind,
            string,
            start: self.linemap.pos(start)?,
            end: self.linemap.pos(self.pos)?,
            literal,
            nits: Vec::new(),
        });
        Ok(())
    }

    fn syntax_error(&self, start: usize, message: &str) -> Error {
        let (row, col) = self
            .linemap
            .index_to_row_col(start)
            .expect("token start is inside the source");
        Error::SyntaxError {
            message: message.to_string(),
            row,
            col,
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{b}' | '\u{c}' | '\r')
}

/// Validate a string literal prefix and derive its flags
fn parse_prefix(prefix: &str) -> Option<StringFlags> {
    let mut flags = StringFlags::default();
    match prefix.to_ascii_lowercase().as_str() {
        "r" => flags.raw = true,
        "b" => flags.bytes = true,
        "u" => flags.unicode = true,
        "f" => flags.format = true,
        "rb" | "br" => {
            flags.raw = true;
            flags.bytes = true;
        }
        "rf" | "fr" => {
            flags.raw = true;
            flags.format = true;
        }
        _ => return None,
    }
    Some(flags)
}

/// Resolve backslash escapes in (non-raw) string literal content
///
/// Unknown escapes are kept verbatim, like CPython does (modulo the
/// deprecation warning). `\N{...}` named escapes are kept verbatim too.
fn unescape(content: &str) -> String {
    repeat(0.., literal_piece)
        .fold(String::new, |mut acc, piece: String| {
            acc.push_str(&piece);
            acc
        })
        .parse(content)
        .unwrap_or_else(|_| content.to_owned())
}

fn literal_piece(input: &mut &str) -> PResult<String> {
    alt((
        preceded('\\', escape_code),
        any.map(|c: char| c.to_string()),
    ))
    .parse_next(input)
}

fn escape_code(input: &mut &str) -> PResult<String> {
    let c: char = any.parse_next(input)?;
    Ok(match c {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        'r' => "\r".to_string(),
        'a' => "\u{7}".to_string(),
        'b' => "\u{8}".to_string(),
        'v' => "\u{b}".to_string(),
        'f' => "\u{c}".to_string(),
        '\\' => "\\".to_string(),
        '\'' => "'".to_string(),
        '"' => "\"".to_string(),
        '\n' => String::new(), // line continuation
        '0'..='7' => {
            let more: &str = take_while(0..=2, |d: char| ('0'..='7').contains(&d)).parse_next(input)?;
            let digits = format!("{c}{more}");
            u32::from_str_radix(&digits, 8)
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| format!("\\{digits}"), String::from)
        }
        'x' | 'u' | 'U' => {
            let len = match c {
                'x' => 2,
                'u' => 4,
                _ => 8,
            };
            let digits: &str =
                take_while(len, |d: char| d.is_ascii_hexdigit()).parse_next(input)?;
            u32::from_str_radix(digits, 16)
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| format!("\\{c}{digits}"), String::from)
        }
        other => format!("\\{other}"),
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools as _;
    use similar_asserts::assert_eq;

    use super::*;

    fn tokenize(source: &str) -> Vec<Token> {
        let linemap = LineMap::new(source);
        PythonTokenizer.tokenize(source, &linemap).unwrap()
    }

    fn check_tiling(source: &str) {
        let tokens = tokenize(source);
        let mut index = 0;
        for token in &tokens {
            assert_eq!(token.start.index, index);
            assert_eq!(token.string.chars().count(), token.end.index - token.start.index);
            index = token.end.index;
        }
        assert_eq!(index, source.chars().count());
        assert_eq!(tokens.iter().map(|t| t.string.as_str()).join(""), source);
        // the synthesized trailing space token is always present
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Space);
    }

    #[test]
    fn test_tiling() {
        check_tiling("");
        check_tiling("x = 1\n");
        check_tiling("def foo(a, b=2):\n    return a ** b  # power\n");
        check_tiling("s\u{441}ope = u\"s\u{441}ope\"\r\nprint(s\u{441}ope)\n");
        check_tiling("'\u{5d0} \u{5d2}'");
        check_tiling("x = '''multi\nline''' + rb'\\x00'\n");
        check_tiling("\u{1ff80}\u{3164}");
    }

    #[test]
    fn test_kinds() {
        let tokens = tokenize("x = 1  # note\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Name,
                TokenKind::Space,
                TokenKind::Op,
                TokenKind::Space,
                TokenKind::Number,
                TokenKind::Space,
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Space,
            ]
        );
    }

    #[test]
    fn test_string_decomposition() {
        let tokens = tokenize("u\"s\u{441}ope\"");
        let literal = tokens[0].literal.as_ref().unwrap();
        assert_eq!(literal.delimiter, "\"");
        assert_eq!(literal.content, "s\u{441}ope");
        assert!(literal.flags.unicode);
        assert!(!literal.flags.raw);
        assert_eq!(tokens[0].string, "u\"s\u{441}ope\"");
    }

    #[test]
    fn test_triple_quoted() {
        let tokens = tokenize("'''a\nb'''");
        assert_eq!(tokens[0].kind, TokenKind::String);
        let literal = tokens[0].literal.as_ref().unwrap();
        assert_eq!(literal.delimiter, "'''");
        assert_eq!(literal.content, "a\nb");
    }

    #[test]
    fn test_prefix_flags() {
        let tokens = tokenize("fr'\u{fc}'");
        let literal = tokens[0].literal.as_ref().unwrap();
        assert!(literal.flags.format);
        assert!(literal.flags.raw);
        // raw strings keep their escapes
        let tokens = tokenize(r"r'\n'");
        assert_eq!(tokens[0].literal.as_ref().unwrap().content, "\\n");
    }

    #[test]
    fn test_escapes() {
        let tokens = tokenize(r"'a\n\x41\u05d0\q'");
        assert_eq!(
            tokens[0].literal.as_ref().unwrap().content,
            "a\nA\u{5d0}\\q"
        );
    }

    #[test]
    fn test_prefix_is_part_of_the_token() {
        let tokens = tokenize("rb'x'");
        assert_eq!(tokens[0].string, "rb'x'");
        assert_eq!(tokens[0].start.index, 0);
        assert_eq!(tokens[0].end.index, 5);
    }

    #[test]
    fn test_not_a_prefix() {
        // `rb2` is not a valid string prefix, so it lexes as a name
        let tokens = tokenize("rb2'x'");
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].string, "rb2");
        assert_eq!(tokens[1].kind, TokenKind::String);
    }

    #[test]
    fn test_unterminated_string() {
        let linemap = LineMap::new("x = 'abc");
        let err = PythonTokenizer.tokenize("x = 'abc", &linemap).unwrap_err();
        assert!(matches!(err, Error::SyntaxError { col: 4, .. }));
    }

    #[test]
    fn test_multichar_ops() {
        let tokens = tokenize("a **= b // c\n");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Op)
            .map(|t| t.string.as_str())
            .collect();
        assert_eq!(ops, vec!["**=", "//"]);
    }

    #[test]
    fn test_numbers() {
        for source in ["0x1f", "1_000", "3.14e-10", "2j", ".5"] {
            let tokens = tokenize(source);
            assert_eq!(tokens[0].kind, TokenKind::Number);
            assert_eq!(tokens[0].string, source);
        }
    }
}
