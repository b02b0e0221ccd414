//! Per-token-type policy selection
//!
//! A [`Profile`] binds each token type to the string class enforced on it.
//! It is an immutable strategy table: profiles can be shared freely between
//! parallel lint invocations.
use serde::{Deserialize, Serialize};

use crate::{
    nits::Token,
    precis::{self, Disallowed, Policy},
    tokenizer::TokenKind,
};

/// Selector for the built-in profiles, as used in the config and CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// The full policy set for Python sources
    #[default]
    Python,

    /// Identity policies on every token type
    Testing,
}

impl From<ProfileKind> for Profile {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Python => Profile::python(),
            ProfileKind::Testing => Profile::testing(),
        }
    }
}

/// How the strings of one token type are enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenPolicy {
    /// Enforce a fixed policy on the raw token string
    Plain(Policy),

    /// Python string literals: `OpaqueString` over the raw token, except
    /// f-strings whose content embeds identifiers and gets
    /// `UsernameCasePreserved`
    PythonString,
}

/// A per-token-type enforcement table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Profile name, for reports
    pub name: &'static str,
    table: [TokenPolicy; TokenKind::COUNT],
}

impl Profile {
    /// The profile for linting Python source code
    ///
    /// Identifiers must be stable under PRECIS username rules, operators,
    /// numbers and whitespace must be bit-exact ASCII, and string/comment
    /// content follows the free-form rules.
    #[must_use]
    pub fn python() -> Self {
        let mut table = [TokenPolicy::Plain(Policy::AsciiOnly); TokenKind::COUNT];
        table[TokenKind::Name.index()] = TokenPolicy::Plain(Policy::UsernameCasePreserved);
        table[TokenKind::String.index()] = TokenPolicy::PythonString;
        table[TokenKind::Comment.index()] = TokenPolicy::Plain(Policy::OpaqueString);
        Self {
            name: "python",
            table,
        }
    }

    /// A profile that never fails enforcement, for exercising the rest of
    /// the pipeline in isolation
    #[must_use]
    pub fn testing() -> Self {
        Self {
            name: "testing",
            table: [TokenPolicy::Plain(Policy::Identity); TokenKind::COUNT],
        }
    }

    /// Enforce the policy for this token's type on its string
    ///
    /// Returns the normalized representation, or the PRECIS-style reason for
    /// rejection.
    pub fn enforce(&self, token: &Token) -> Result<String, Disallowed> {
        match self.table[token.kind.index()] {
            TokenPolicy::Plain(policy) => precis::enforce(policy, &token.string),
            TokenPolicy::PythonString => match &token.literal {
                Some(literal) if literal.flags.format => {
                    precis::enforce(Policy::UsernameCasePreserved, &literal.content)
                }
                _ => precis::enforce(Policy::OpaqueString, &token.string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::{linemap::LineMap, tokenizer::Tokenize as _, tokenizer::python::PythonTokenizer};

    fn first_token(source: &str) -> Token {
        let linemap = LineMap::new(source);
        PythonTokenizer
            .tokenize(source, &linemap)
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_python_name_policy() {
        let profile = Profile::python();
        let token = first_token("\u{fb01} = 1");
        assert_eq!(
            profile.enforce(&token).unwrap_err().to_string(),
            "DISALLOWED/has_compat"
        );
    }

    #[test]
    fn test_python_op_policy() {
        let profile = Profile::python();
        // U+2044 FRACTION SLASH posing as a division operator
        let token = first_token("\u{2044}");
        assert_eq!(
            profile.enforce(&token).unwrap_err().to_string(),
            "DISALLOWED/not_ascii"
        );
    }

    #[test]
    fn test_python_string_policy() {
        let profile = Profile::python();
        let token = first_token("'a\u{a0}b'");
        // opaque strings survive, with spaces mapped
        assert_eq!(profile.enforce(&token).unwrap(), "'a b'");
        // f-string content is held to identifier rules
        let token = first_token("f'\u{3164}'");
        assert_eq!(
            profile.enforce(&token).unwrap_err().to_string(),
            "DISALLOWED/precis_ignorable_properties"
        );
    }

    #[test]
    fn test_testing_profile_is_identity() {
        let profile = Profile::testing();
        let token = first_token("'\u{1ff80}'");
        assert_eq!(profile.enforce(&token).unwrap(), "'\u{1ff80}'");
    }
}
