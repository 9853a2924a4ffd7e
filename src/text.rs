//! Label formatting for backend field names and enum values
//!
//! Backend values such as `PATIENT_NAME` or `length_of_stay` are rendered as
//! "Patient Name" and "Length Of Stay". Underscores become spaces, the text is
//! split on single spaces and every token is rewritten as an uppercase first
//! character followed by the lowercased remainder.

use crate::error::{Error, Result};

/// What to do with the empty tokens left by repeated, leading or trailing
/// separators (`"a__b"`, `"_a"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTokens {
    /// Keep each empty token, so separators survive as spaces: `"a__b"` -> `"A  B"`
    #[default]
    Preserve,
    /// Drop empty tokens: `"a__b"` -> `"A B"`, `"_a_"` -> `"A"`
    Collapse,
}

/// Title-case formatter with a fixed empty-token policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCase {
    policy: EmptyTokens,
}

impl TitleCase {
    pub fn with_policy(policy: EmptyTokens) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EmptyTokens {
        self.policy
    }

    /// Format `input`, returning a new string.
    pub fn apply(&self, input: &str) -> String {
        let spaced = input.replace('_', " ");
        let mut out = String::with_capacity(spaced.len());
        let mut first = true;

        for token in spaced.split(' ') {
            if token.is_empty() && self.policy == EmptyTokens::Collapse {
                continue;
            }
            if !first {
                out.push(' ');
            }
            first = false;
            push_capitalized(&mut out, token);
        }

        out
    }
}

fn push_capitalized(out: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(head) = chars.next() {
        out.extend(head.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

/// Convert `input` to title case, keeping empty tokens.
pub fn to_title_case(input: &str) -> String {
    TitleCase::default().apply(input)
}

/// Nullable entry point: an absent value is rejected rather than treated as `""`.
pub fn try_to_title_case(input: Option<&str>) -> Result<String> {
    input
        .map(to_title_case)
        .ok_or_else(|| Error::InvalidArgument("expected a string, got nothing".to_string()))
}
