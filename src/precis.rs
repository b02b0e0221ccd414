//! Unicode normalization and PRECIS-style string class enforcement
//!
//! The [`enforce`] function applies one of the policies of RFC 8264/8265 to a
//! string and either returns the normalized representation or fails with a
//! [`Disallowed`] carrying the PRECIS taxonomy kind of the offending
//! codepoint (`has_compat`, `unassigned`, ...). The taxonomy kind is
//! surfaced verbatim in reports, prefixed with `DISALLOWED/`.
use icu_properties::{
    CodePointMapData, CodePointSetData,
    props::{DefaultIgnorableCodePoint, GeneralCategory, NoncharacterCodePoint},
};
use serde::Serialize;
use unicode_bidi::{BidiClass, bidi_class};
use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition (NFD)
#[must_use]
pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

/// Canonical composition (NFC)
#[must_use]
pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Compatibility decomposition followed by canonical composition (NFKC)
#[must_use]
pub fn nfkc(s: &str) -> String {
    s.nfkc().collect()
}

/// A string class policy applied to token strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Policy {
    /// PRECIS `FreeformClass` with the `OpaqueString` profile rules:
    /// non-ASCII spaces map to SPACE and the result is NFC-normalized
    OpaqueString,

    /// PRECIS `IdentifierClass` with the `UsernameCasePreserved` profile
    /// rules: width mapping, NFC normalization and the RFC 5893
    /// directionality rule
    UsernameCasePreserved,

    /// Pass only pure-ASCII strings through
    AsciiOnly,

    /// Accept everything unchanged (used by the testing profile)
    Identity,
}

/// The PRECIS taxonomy kind explaining why a codepoint was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisallowedKind {
    #[display("has_compat")]
    HasCompat,
    #[display("precis_ignorable_properties")]
    PrecisIgnorableProperties,
    #[display("unassigned")]
    Unassigned,
    #[display("control")]
    Control,
    #[display("other_letter_digits")]
    OtherLetterDigits,
    #[display("old_hangul_jamo")]
    OldHangulJamo,
    #[display("spaces")]
    Spaces,
    #[display("symbols")]
    Symbols,
    #[display("punctuation")]
    Punctuation,
    #[display("bidi_rule")]
    BidiRule,
    #[display("not_ascii")]
    NotAscii,
    #[display("other")]
    Other,
}

/// A policy violation for a single string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("DISALLOWED/{kind}")]
pub struct Disallowed {
    pub kind: DisallowedKind,
}

impl From<DisallowedKind> for Disallowed {
    fn from(kind: DisallowedKind) -> Self {
        Self { kind }
    }
}

/// Enforce a policy on a string
///
/// On success, the returned string is the normalized representation under
/// the policy (the identity for [`Policy::AsciiOnly`] and
/// [`Policy::Identity`]).
pub fn enforce(policy: Policy, s: &str) -> Result<String, Disallowed> {
    match policy {
        Policy::Identity => Ok(s.to_owned()),
        Policy::AsciiOnly => {
            if s.is_ascii() {
                Ok(s.to_owned())
            } else {
                Err(DisallowedKind::NotAscii.into())
            }
        }
        Policy::OpaqueString => {
            let normalized: String = s
                .chars()
                .map(|c| if is_non_ascii_space(c) { ' ' } else { c })
                .nfc()
                .collect();
            for c in normalized.chars() {
                freeform_class(c)?;
            }
            Ok(normalized)
        }
        Policy::UsernameCasePreserved => {
            let normalized: String = s.chars().flat_map(width_map).nfc().collect();
            for c in normalized.chars() {
                identifier_class(c)?;
            }
            bidi_rule(&normalized)?;
            Ok(normalized)
        }
    }
}

/// Check a codepoint against the PRECIS `FreeformClass`
fn freeform_class(c: char) -> Result<(), Disallowed> {
    // printable ASCII and SPACE are always fine
    if ('\u{20}'..='\u{7e}').contains(&c) {
        return Ok(());
    }
    let gc = general_category(c);
    if gc == GeneralCategory::Unassigned && !is_noncharacter(c) {
        return Err(DisallowedKind::Unassigned.into());
    }
    if is_old_hangul_jamo(c) {
        return Err(DisallowedKind::OldHangulJamo.into());
    }
    if is_default_ignorable(c) || is_noncharacter(c) {
        return Err(DisallowedKind::PrecisIgnorableProperties.into());
    }
    if gc == GeneralCategory::Control {
        return Err(DisallowedKind::Control.into());
    }
    if is_letter_digits(gc) || is_other_letter_digits(gc) {
        return Ok(());
    }
    match gc {
        GeneralCategory::SpaceSeparator
        | GeneralCategory::MathSymbol
        | GeneralCategory::CurrencySymbol
        | GeneralCategory::ModifierSymbol
        | GeneralCategory::OtherSymbol
        | GeneralCategory::DashPunctuation
        | GeneralCategory::OpenPunctuation
        | GeneralCategory::ClosePunctuation
        | GeneralCategory::ConnectorPunctuation
        | GeneralCategory::OtherPunctuation
        | GeneralCategory::InitialPunctuation
        | GeneralCategory::FinalPunctuation => Ok(()),
        _ => Err(DisallowedKind::Other.into()),
    }
}

/// Check a codepoint against the PRECIS `IdentifierClass`
fn identifier_class(c: char) -> Result<(), Disallowed> {
    // non-space printable ASCII
    if ('\u{21}'..='\u{7e}').contains(&c) {
        return Ok(());
    }
    let gc = general_category(c);
    if gc == GeneralCategory::Unassigned && !is_noncharacter(c) {
        return Err(DisallowedKind::Unassigned.into());
    }
    if is_old_hangul_jamo(c) {
        return Err(DisallowedKind::OldHangulJamo.into());
    }
    if is_default_ignorable(c) || is_noncharacter(c) {
        return Err(DisallowedKind::PrecisIgnorableProperties.into());
    }
    if gc == GeneralCategory::Control {
        return Err(DisallowedKind::Control.into());
    }
    if has_compat(c) {
        return Err(DisallowedKind::HasCompat.into());
    }
    if is_letter_digits(gc) {
        return Ok(());
    }
    if is_other_letter_digits(gc) {
        return Err(DisallowedKind::OtherLetterDigits.into());
    }
    match gc {
        GeneralCategory::SpaceSeparator => Err(DisallowedKind::Spaces.into()),
        GeneralCategory::MathSymbol
        | GeneralCategory::CurrencySymbol
        | GeneralCategory::ModifierSymbol
        | GeneralCategory::OtherSymbol => Err(DisallowedKind::Symbols.into()),
        GeneralCategory::DashPunctuation
        | GeneralCategory::OpenPunctuation
        | GeneralCategory::ClosePunctuation
        | GeneralCategory::ConnectorPunctuation
        | GeneralCategory::OtherPunctuation
        | GeneralCategory::InitialPunctuation
        | GeneralCategory::FinalPunctuation => Err(DisallowedKind::Punctuation.into()),
        _ => Err(DisallowedKind::Other.into()),
    }
}

/// The `LetterDigits` category of RFC 8264 (PVALID base)
fn is_letter_digits(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::LowercaseLetter
            | GeneralCategory::UppercaseLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::DecimalNumber
    )
}

/// The `OtherLetterDigits` category of RFC 8264
fn is_other_letter_digits(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::TitlecaseLetter
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
            | GeneralCategory::EnclosingMark
    )
}

/// Whether the codepoint differs from its compatibility normalization
fn has_compat(c: char) -> bool {
    let mut nfkc = std::iter::once(c).nfkc();
    !(nfkc.next() == Some(c) && nfkc.next().is_none())
}

/// Map fullwidth and halfwidth forms to their compatibility equivalents
fn width_map(c: char) -> Vec<char> {
    if ('\u{ff00}'..='\u{ffef}').contains(&c) {
        let mut out = Vec::with_capacity(1);
        unicode_normalization::char::decompose_compatible(c, |d| out.push(d));
        out
    } else {
        vec![c]
    }
}

/// The directionality rule of RFC 5893
///
/// Only applies to strings containing right-to-left codepoints; purely LTR
/// strings pass unchecked.
fn bidi_rule(s: &str) -> Result<(), Disallowed> {
    let classes: Vec<BidiClass> = s.chars().map(bidi_class).collect();
    if !classes
        .iter()
        .any(|c| matches!(c, BidiClass::R | BidiClass::AL | BidiClass::AN))
    {
        return Ok(());
    }
    let err = || {
        Err(Disallowed {
            kind: DisallowedKind::BidiRule,
        })
    };
    let Some(first) = classes.first() else {
        return Ok(());
    };
    let last = classes
        .iter()
        .rev()
        .find(|c| **c != BidiClass::NSM)
        .unwrap_or(first);
    match first {
        BidiClass::R | BidiClass::AL => {
            if !classes.iter().all(|c| {
                matches!(
                    c,
                    BidiClass::R
                        | BidiClass::AL
                        | BidiClass::AN
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                )
            }) {
                return err();
            }
            if classes.contains(&BidiClass::AN) && classes.contains(&BidiClass::EN) {
                return err();
            }
            if !matches!(
                last,
                BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN
            ) {
                return err();
            }
            Ok(())
        }
        BidiClass::L => {
            if !classes.iter().all(|c| {
                matches!(
                    c,
                    BidiClass::L
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                )
            }) {
                return err();
            }
            if !matches!(last, BidiClass::L | BidiClass::EN) {
                return err();
            }
            Ok(())
        }
        _ => err(),
    }
}

pub(crate) fn general_category(c: char) -> GeneralCategory {
    CodePointMapData::<GeneralCategory>::new().get(c)
}

fn is_default_ignorable(c: char) -> bool {
    CodePointSetData::new::<DefaultIgnorableCodePoint>().contains(c)
}

fn is_noncharacter(c: char) -> bool {
    CodePointSetData::new::<NoncharacterCodePoint>().contains(c)
}

fn is_non_ascii_space(c: char) -> bool {
    c != ' ' && general_category(c) == GeneralCategory::SpaceSeparator
}

/// Conjoining Hangul jamo (the `OldHangulJamo` category of RFC 8264)
fn is_old_hangul_jamo(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | 0xA960..=0xA97C | 0xD7B0..=0xD7C6 | 0xD7CB..=0xD7FB
    )
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn reason(result: Result<String, Disallowed>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_normalizations() {
        // u + combining diaeresis composes, the fi ligature only folds
        // under compatibility normalization
        assert_eq!(nfc("u\u{308}"), "\u{fc}");
        assert_eq!(nfd("\u{fc}"), "u\u{308}");
        assert_eq!(nfkc("\u{fb01}"), "fi");
        assert_eq!(nfkc("\u{fc}"), "\u{fc}");
    }

    #[test]
    fn test_ascii_only() {
        assert_eq!(enforce(Policy::AsciiOnly, "x == 1").unwrap(), "x == 1");
        assert_eq!(
            reason(enforce(Policy::AsciiOnly, "\u{2044}")),
            "DISALLOWED/not_ascii"
        );
    }

    #[test]
    fn test_identifier_has_compat() {
        assert_eq!(
            reason(enforce(Policy::UsernameCasePreserved, "\u{fb01}")),
            "DISALLOWED/has_compat"
        );
    }

    #[test]
    fn test_identifier_canonical_equivalence_wins() {
        // the Kelvin sign is canonically equivalent to K, so NFC removes it
        // before the class check
        assert_eq!(
            enforce(Policy::UsernameCasePreserved, "\u{212a}lock").unwrap(),
            "Klock"
        );
    }

    #[test]
    fn test_identifier_ignorable() {
        assert_eq!(
            reason(enforce(Policy::UsernameCasePreserved, "\u{3164}")),
            "DISALLOWED/precis_ignorable_properties"
        );
    }

    #[test]
    fn test_identifier_plain() {
        assert_eq!(
            enforce(Policy::UsernameCasePreserved, "scope_1").unwrap(),
            "scope_1"
        );
        assert_eq!(
            enforce(Policy::UsernameCasePreserved, "s\u{441}ope").unwrap(),
            "s\u{441}ope"
        );
    }

    #[test]
    fn test_opaque_unassigned() {
        assert_eq!(
            reason(enforce(Policy::OpaqueString, "'\u{1ff80}'")),
            "DISALLOWED/unassigned"
        );
    }

    #[test]
    fn test_opaque_control() {
        assert_eq!(
            reason(enforce(Policy::OpaqueString, "a\u{7}b")),
            "DISALLOWED/control"
        );
    }

    #[test]
    fn test_opaque_maps_spaces() {
        assert_eq!(enforce(Policy::OpaqueString, "a\u{a0}b").unwrap(), "a b");
    }

    #[test]
    fn test_opaque_allows_symbols() {
        assert_eq!(
            enforce(Policy::OpaqueString, "price \u{20ac}9").unwrap(),
            "price \u{20ac}9"
        );
    }

    #[test]
    fn test_bidi_rule() {
        // all-RTL identifiers are fine, mixed-direction ones are not
        assert!(enforce(Policy::UsernameCasePreserved, "\u{5d0}\u{5d2}").is_ok());
        assert_eq!(
            reason(enforce(Policy::UsernameCasePreserved, "\u{5d0}a")),
            "DISALLOWED/bidi_rule"
        );
    }
}
