use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

use super::scanner::DangerWordScanner;

pub const MIN_ENTRY_CHARS: usize = 20;
pub const MAX_ENTRY_CHARS: usize = 2000;

pub const EMPTY_ENTRY_MESSAGE: &str = "Brevity is the soul of wit, but we need something to save!";
pub const LENGTH_MESSAGE: &str =
    "Journal entry cannot be less than 20 characters or exceed 2000 characters.";
pub const DANGER_NOTICE: &str = "We have noticed some difficult words in your entry. \
If you're going through a tough time, please reach out for help.";

/// Entry-length rule applied at submission time.
///
/// The released client guarded with `len <= 20 && len >= 2000`, which no
/// length satisfies, so it never blocked. `AsShipped` keeps that behavior;
/// `Bounded` is the opt-in reading `len < min || len > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum LengthPolicy {
    #[default]
    AsShipped,
    Bounded { min: usize, max: usize },
}

impl LengthPolicy {
    pub fn bounded() -> Self {
        LengthPolicy::Bounded {
            min: MIN_ENTRY_CHARS,
            max: MAX_ENTRY_CHARS,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "as-shipped" | "as_shipped" | "permissive" => Some(LengthPolicy::AsShipped),
            "bounded" | "enforced" => Some(LengthPolicy::bounded()),
            _ => None,
        }
    }

    pub fn blocks(&self, char_count: usize) -> bool {
        match self {
            LengthPolicy::AsShipped => false,
            LengthPolicy::Bounded { min, max } => char_count < *min || char_count > *max,
        }
    }
}

/// Outcome of a passing validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCheck {
    pub char_count: usize,
    /// Difficult wording found; show [`DANGER_NOTICE`] but still submit
    pub flagged: bool,
    pub matched_phrases: Vec<&'static str>,
}

pub struct EntryValidator;

impl EntryValidator {
    pub fn validate(text: &str, policy: LengthPolicy) -> Result<EntryCheck, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation(EMPTY_ENTRY_MESSAGE.to_string()));
        }

        let char_count = text.chars().count();
        if policy.blocks(char_count) {
            return Err(DomainError::Validation(LENGTH_MESSAGE.to_string()));
        }

        let matched_phrases = DangerWordScanner::matches(text);
        Ok(EntryCheck {
            char_count,
            flagged: !matched_phrases.is_empty(),
            matched_phrases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entries_are_rejected() {
        for text in ["", "   ", "\n\t"] {
            let err = EntryValidator::validate(text, LengthPolicy::AsShipped).unwrap_err();
            assert_eq!(err, DomainError::Validation(EMPTY_ENTRY_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_as_shipped_never_blocks_on_length() {
        let short = EntryValidator::validate("ok", LengthPolicy::AsShipped).unwrap();
        assert_eq!(short.char_count, 2);

        let long = "a".repeat(5000);
        assert!(EntryValidator::validate(&long, LengthPolicy::AsShipped).is_ok());
    }

    #[test]
    fn test_bounded_policy_blocks_out_of_range() {
        let policy = LengthPolicy::bounded();

        assert!(EntryValidator::validate("too short", policy).is_err());
        assert!(EntryValidator::validate(&"a".repeat(2001), policy).is_err());
        assert!(EntryValidator::validate(&"a".repeat(20), policy).is_ok());
        assert!(EntryValidator::validate(&"a".repeat(2000), policy).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let policy = LengthPolicy::bounded();
        // 20 characters, 40 bytes
        let text = "é".repeat(20);
        assert_eq!(EntryValidator::validate(&text, policy).unwrap().char_count, 20);
    }

    #[test]
    fn test_flagged_entries_still_pass() {
        let check =
            EntryValidator::validate("Some days I feel worthless", LengthPolicy::AsShipped)
                .unwrap();
        assert!(check.flagged);
        assert_eq!(check.matched_phrases, vec!["worthless"]);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(LengthPolicy::parse("bounded"), Some(LengthPolicy::bounded()));
        assert_eq!(LengthPolicy::parse("AS-SHIPPED"), Some(LengthPolicy::AsShipped));
        assert_eq!(LengthPolicy::parse("strict-ish"), None);
        assert_eq!(LengthPolicy::default(), LengthPolicy::AsShipped);
    }
}
