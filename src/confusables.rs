//! Static mapping from confusable codepoints to their ASCII skeletons
//!
//! The mapping is derived from the Unicode `confusables.txt` data, restricted
//! to codepoints whose visual skeleton resolves to printable ASCII. ASCII
//! characters are never keys: in the fixed-width fonts used for code, ASCII
//! is not considered confusable with other ASCII.
//!
//! Two dense, regular blocks are resolved arithmetically instead of being
//! carried in the table: the fullwidth forms (`U+FF01..=U+FF5E`, a constant
//! offset from ASCII) and the mathematical alphanumeric symbols
//! (`U+1D400..=U+1D7FF`, whose compatibility decomposition is their ASCII
//! skeleton). Everything irregular lives in [`table`].
use unicode_normalization::{UnicodeNormalization, char::decompose_compatible};

mod table;

use table::ASCII_SKELETONS;

/// The ASCII skeleton of a single (non-ASCII) codepoint, if it has one
#[must_use]
pub fn skeleton(c: char) -> Option<&'static str> {
    ASCII_SKELETONS
        .binary_search_by_key(&(c as u32), |&(cp, _)| cp)
        .ok()
        .map(|idx| ASCII_SKELETONS[idx].1)
}

/// Fold the regular symbol blocks down to their ASCII counterpart
fn folded(c: char) -> Option<char> {
    let codepoint = c as u32;
    match codepoint {
        // fullwidth forms sit at a constant offset from ASCII
        0xFF01..=0xFF5E => char::from_u32(codepoint - 0xFEE0),
        // mathematical alphanumerics decompose to a single ASCII letter or
        // digit (holes in the block are unassigned and don't decompose)
        0x1D400..=0x1D7FF => {
            let mut decomposed = Vec::with_capacity(1);
            decompose_compatible(c, |d| decomposed.push(d));
            match decomposed[..] {
                [single] if single.is_ascii() => Some(single),
                _ => None,
            }
        }
        _ => None,
    }
}

/// The plain-ASCII string the input is visually confusable with, if any
///
/// The input is NFD-decomposed and mapped character by character through the
/// skeleton data; the result is only returned when it is entirely ASCII.
#[must_use]
pub fn ascii_lookalike(string: &str) -> Option<String> {
    let mut out = String::with_capacity(string.len());
    for c in string.nfd() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(skel) = skeleton(c) {
            out.push_str(skel);
        } else if let Some(folded) = folded(c) {
            out.push(folded);
        } else {
            return None;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in ASCII_SKELETONS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "table must be sorted: {pair:x?}");
        }
    }

    #[test]
    fn test_keys_are_not_ascii() {
        for &(codepoint, _) in ASCII_SKELETONS {
            assert!(codepoint > 0x7f, "ASCII key: {codepoint:#x}");
        }
    }

    #[test]
    fn test_values_are_printable_ascii() {
        for &(codepoint, skel) in ASCII_SKELETONS {
            assert!(!skel.is_empty(), "empty skeleton for {codepoint:#x}");
            assert!(
                skel.chars().all(|c| (' '..='\u{7e}').contains(&c)),
                "non-ASCII skeleton for {codepoint:#x}: {skel:?}"
            );
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        // no skeleton character is itself a key
        for &(codepoint, skel) in ASCII_SKELETONS {
            for c in skel.chars() {
                assert!(
                    skeleton(c).is_none(),
                    "skeleton of {codepoint:#x} contains key {c:?}"
                );
            }
        }
    }

    #[test]
    fn test_cyrillic_lookalike() {
        assert_eq!(ascii_lookalike("s\u{441}ope").unwrap(), "scope");
    }

    #[test]
    fn test_digit_lookalikes() {
        assert_eq!(ascii_lookalike("\u{9ea}\u{b68}").unwrap(), "89");
    }

    #[test]
    fn test_canonical_decomposition_applies_first() {
        // the Kelvin sign decomposes canonically to a plain K
        assert_eq!(ascii_lookalike("\u{212a}lock").unwrap(), "Klock");
    }

    #[test]
    fn test_ligature() {
        assert_eq!(ascii_lookalike("\u{fb01}").unwrap(), "fi");
    }

    #[test]
    fn test_modifier_letter() {
        assert_eq!(ascii_lookalike("x\u{2bb}").unwrap(), "x'");
    }

    #[test]
    fn test_fullwidth_and_math() {
        assert_eq!(ascii_lookalike("\u{ff26}\u{ff4f}\u{ff4f}").unwrap(), "Foo");
        assert_eq!(ascii_lookalike("\u{1d431}").unwrap(), "x");
        assert_eq!(ascii_lookalike("\u{1d7d8}").unwrap(), "0");
    }

    #[test]
    fn test_no_lookalike() {
        // Hebrew letters have no ASCII skeleton
        assert_eq!(ascii_lookalike("\u{5d0}"), None);
        // an unassigned codepoint has none either
        assert_eq!(ascii_lookalike("\u{1ff80}"), None);
    }

    #[test]
    fn test_multi_char_skeleton() {
        assert_eq!(ascii_lookalike("a\u{2026}b").unwrap(), "a...b");
    }
}
