//! Check a source file for Unicode hazards
//!
//! The [`lint_text`] function is the orchestration core: it builds the line
//! map and the bidi reordering maps, runs the tokenizer, applies the
//! per-token-type policies and emits the code parts that carry at least one
//! nit. [`lint_file`] is the thin wrapper used by the CLI.
use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
};

use itertools::Itertools as _;
use serde::Serialize;
use winnow::{
    Parser, Result as PResult,
    ascii::space0,
    token::{one_of, take_until, take_while},
};

use crate::{
    bidi::BidiMap,
    confusables::ascii_lookalike,
    error::{Error, Result},
    linemap::LineMap,
    nits::{CodePart, File, Line, Nit, Reordering, Token},
    precis::{self, general_category},
    profile::Profile,
    tokenizer::{TokenKind, Tokenize},
};

/// The control characters that are legitimate in source code
pub const ALLOWED_CONTROL_CHARS: &[char] = &['\t', '\n', '\u{b}', '\u{c}', '\r'];

/// Whether a codepoint is a control in the wide sense (Unicode category `C`:
/// control, format, private-use or unassigned) outside of the allowed
/// whitespace set
#[must_use]
pub fn is_forbidden_control(c: char) -> bool {
    use icu_properties::props::GeneralCategory;
    if ALLOWED_CONTROL_CHARS.contains(&c) {
        return false;
    }
    matches!(
        general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

/// Analyze a source string and return the code parts carrying nits
///
/// The `name` identifies the source in file-level findings. Parts come out
/// in source order; a `Line` part for a visually reordered line is emitted
/// before the remaining tokens of that line.
pub fn lint_text(
    name: &str,
    source: &str,
    tokenizer: &impl Tokenize,
    profile: &Profile,
) -> Result<Vec<CodePart>> {
    // fast path: clean ASCII can't carry any of the hazards we look for
    if source.is_ascii() && !source.chars().any(is_forbidden_control) {
        return Ok(Vec::new());
    }

    let linemap = LineMap::new(source);
    let chars: Vec<char> = source.chars().collect();
    let bidi = BidiMap::build(source);

    let mut parts = Vec::new();
    if let Some(encoding) = coding_cookie(source)
        && !matches!(
            normalize_codec(&encoding).as_str(),
            "utf-8" | "utf-8-sig" | "ascii" | "us-ascii"
        )
    {
        parts.push(CodePart::File(File {
            name: name.to_string(),
            start: linemap.pos(0)?,
            end: linemap.pos(chars.len())?,
            nits: vec![Nit::UnusualEncoding { encoding }],
        }));
    }

    // per token type: normalized form -> first token that produced it
    let mut seen: HashMap<(TokenKind, String), Token> = HashMap::new();
    let mut last_visual_start: Option<usize> = None;
    let mut reordered_lines: HashSet<usize> = HashSet::new();

    for mut token in tokenizer.tokenize(source, &linemap)? {
        let mut nits = Vec::new();

        // 1. policy enforcement
        let normalized = if token.string.is_empty() {
            None
        } else {
            match profile.enforce(&token) {
                Ok(normalized) => Some(normalized),
                Err(disallowed) => {
                    nits.push(Nit::PolicyFail {
                        reason: disallowed.to_string(),
                    });
                    None
                }
            }
        };

        // 2. shadowing lookalikes: same normalized form, different raw string
        if let Some(normalized) = normalized {
            match seen.entry((token.kind, normalized)) {
                std::collections::hash_map::Entry::Occupied(entry) => {
                    if entry.get().string != token.string {
                        nits.push(Nit::HasLookalike {
                            other: Box::new(entry.get().clone()),
                        });
                    }
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(token.without_nits());
                }
            }
        }

        // 3. first forbidden control character, if any
        if let Some((offset, control_char)) = token
            .string
            .chars()
            .enumerate()
            .find(|(_, c)| is_forbidden_control(*c))
        {
            nits.push(Nit::ControlCharacter {
                offset,
                control_char,
            });
        }

        // 4. non-ASCII content, with its lookalike and NFKC comparisons
        if !token.string.is_ascii() {
            nits.push(Nit::NonAscii);
            if let Some(lookalike) = ascii_lookalike(&token.string)
                && lookalike != token.string
            {
                nits.push(Nit::AsciiLookalike { lookalike });
            }
            let nfkc = precis::nfkc(&token.string);
            if nfkc != token.string {
                nits.push(Nit::NonNfkc { normalized: nfkc });
            }
        }

        if !bidi.is_empty() {
            // 5. visually reordered token
            let char_len = token.string.chars().count();
            if char_len > 1 {
                let reordering = reorder_string(
                    &chars,
                    &bidi,
                    token.start.index,
                    token.start.index + char_len,
                );
                if reordering.reordered != token.string {
                    nits.push(Nit::ReorderedToken(reordering));
                }
            }

            // 6. tokens crossing in visual order reveal a reordered line
            let start_index = token.start.index.min(bidi.len() - 1);
            let visual_start = bidi.logical_to_visual(start_index);
            if last_visual_start.is_some_and(|last| visual_start < last) {
                let mut lineno = token.start.row;
                if token.start.col == 0 {
                    // a token at the line start crossed with the previous
                    // line's tokens
                    lineno -= 1;
                }
                if !reordered_lines.contains(&lineno) {
                    reordered_lines.insert(lineno);
                    let start = linemap.row_col_to_index(lineno, 0)?;
                    let end = linemap.row_col_to_index(lineno + 1, 0)?;
                    let string: String = chars[start..end].iter().collect();
                    let reordering = reorder_string(&chars, &bidi, start, end);
                    parts.push(CodePart::Line(Line {
                        lineno,
                        string,
                        start: linemap.pos(start)?,
                        end: linemap.pos(end)?,
                        nits: vec![Nit::ReorderedLine(reordering)],
                    }));
                }
            }
            last_visual_start = Some(visual_start);
        }

        // 7. emit the token only when something was found
        if !nits.is_empty() {
            token.nits = nits;
            parts.push(CodePart::Token(token));
        }
    }
    Ok(parts)
}

/// Pull the visual rendition of a logical codepoint range
///
/// The visual interval spanned by the range can cover codepoints from the
/// surrounding context; the mask records which reordered characters belong
/// to the range itself.
fn reorder_string(chars: &[char], bidi: &BidiMap, start: usize, end: usize) -> Reordering {
    let visual: Vec<usize> = (start..end).map(|i| bidi.logical_to_visual(i)).collect();
    let (min, max) = visual
        .iter()
        .copied()
        .minmax()
        .into_option()
        .expect("range is not empty");
    let visual_set: HashSet<usize> = visual.into_iter().collect();
    let mut reordered = String::new();
    let mut char_in_token = Vec::with_capacity(max - min + 1);
    for position in min..=max {
        reordered.push(chars[bidi.visual_to_logical(position)]);
        char_in_token.push(visual_set.contains(&position));
    }
    Reordering {
        reordered,
        char_in_token,
    }
}

/// Extract the PEP 263 coding cookie from the first two lines, if present
fn coding_cookie(source: &str) -> Option<String> {
    for line in source.lines().take(2) {
        let trimmed = line.trim_start_matches([' ', '\t', '\u{c}']);
        let Some(mut comment) = trimmed.strip_prefix('#') else {
            continue;
        };
        if let Ok(encoding) = cookie(&mut comment) {
            return Some(encoding);
        }
    }
    None
}

fn cookie(input: &mut &str) -> PResult<String> {
    let _: &str = take_until(0.., "coding").parse_next(input)?;
    let _ = "coding".parse_next(input)?;
    let _ = one_of([':', '=']).parse_next(input)?;
    let _: &str = space0.parse_next(input)?;
    let name: &str = take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
    })
    .parse_next(input)?;
    Ok(name.to_string())
}

fn normalize_codec(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "-")
}

/// All the nit-carrying code parts of a single file
#[derive(Debug, Clone, Serialize, bon::Builder)]
#[non_exhaustive]
#[builder(on(String, into))]
pub struct FileReport {
    /// Path to the file
    pub path: PathBuf,

    /// Contents of the file (absent when pretty output is not requested)
    #[serde(skip_serializing)]
    pub contents: Option<String>,

    /// The code parts with nits, in source order
    pub parts: Vec<CodePart>,
}

impl FileReport {
    /// Print the nits of this file in a compact format, one per line
    ///
    /// The path is shown relative to `root_dir` when possible.
    pub fn print_compact(
        &self,
        f: &mut impl io::Write,
        root_dir: impl AsRef<Path>,
    ) -> std::result::Result<(), io::Error> {
        let source_name = match self.path.strip_prefix(root_dir.as_ref()) {
            Ok(relative_path) => relative_path.to_string_lossy(),
            Err(_) => self.path.to_string_lossy(),
        };
        for part in &self.parts {
            let start = part.start();
            for nit in part.nits() {
                writeln!(
                    f,
                    "{source_name}:{}:{}: warning: {nit}",
                    start.row, start.col
                )?;
            }
        }
        Ok(())
    }
}

/// Lint a file by identifying Unicode hazards in it
///
/// This is the main entrypoint for using this library on files. The file is
/// read and decoded as UTF-8 (any other encoding fails with
/// [`Error::InvalidSource`]), then analyzed with [`lint_text`]. The
/// `keep_contents` parameter controls whether the returned [`FileReport`]
/// carries the source code (needed for pretty output).
pub fn lint_file(
    tokenizer: &impl Tokenize,
    profile: &Profile,
    path: impl AsRef<Path>,
    keep_contents: bool,
) -> Result<Option<FileReport>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| Error::IOError {
        path: path.to_path_buf(),
        err,
    })?;
    let source = String::from_utf8(bytes).map_err(|err| Error::InvalidSource {
        name: path.to_string_lossy().into_owned(),
        offset: err.utf8_error().valid_up_to(),
    })?;
    let parts = lint_text(&path.to_string_lossy(), &source, tokenizer, profile)?;
    if parts.is_empty() {
        return Ok(None);
    }
    Ok(Some(FileReport {
        path: path.to_path_buf(),
        contents: keep_contents.then_some(source),
        parts,
    }))
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::tokenizer::python::PythonTokenizer;

    fn lint(source: &str) -> Vec<CodePart> {
        lint_text("test", source, &PythonTokenizer, &Profile::python()).unwrap()
    }

    #[test]
    fn test_clean_ascii_fast_path() {
        assert_eq!(lint(""), Vec::new());
        assert_eq!(lint("x = 1  # fine\n"), Vec::new());
        assert_eq!(lint("def f():\n\treturn 'ok'\x0c\n"), Vec::new());
    }

    #[test]
    fn test_ascii_control() {
        let parts = lint("x = 1\x08\n");
        assert_eq!(parts.len(), 1);
        let nits = parts[0].nits();
        assert_eq!(nits.len(), 1);
        assert!(matches!(
            nits[0],
            Nit::ControlCharacter {
                offset: 0,
                control_char: '\u{8}'
            }
        ));
    }

    #[test]
    fn test_coding_cookie() {
        assert_eq!(
            coding_cookie("# -*- coding: latin-1 -*-\nx = 1\n"),
            Some("latin-1".to_string())
        );
        assert_eq!(
            coding_cookie("#!/usr/bin/env python\n# coding=utf-8\n"),
            Some("utf-8".to_string())
        );
        assert_eq!(coding_cookie("x = 1\n# coding: latin-1\n"), None);
    }

    #[test]
    fn test_unusual_encoding_part() {
        let parts = lint("# -*- coding: latin-1 -*-\nname = '\u{fc}'\n");
        let CodePart::File(file) = &parts[0] else {
            panic!("expected a File part, got {parts:?}");
        };
        assert_eq!(
            file.nits,
            vec![Nit::UnusualEncoding {
                encoding: "latin-1".to_string()
            }]
        );
    }
}
