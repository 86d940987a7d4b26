//! Locale codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A normalized locale code such as `en`, `es` or `pt-br`.
///
/// Codes are lowercased and `_` separators become `-`, matching the
/// path segments the site is published under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and normalize a locale code.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(LocaleError::Empty);
        }

        let normalized = code.to_ascii_lowercase().replace('_', "-");
        let mut subtags = normalized.split('-');

        let language = subtags.next().unwrap_or("");
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(LocaleError::Invalid(code.to_string()));
        }

        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(LocaleError::Invalid(code.to_string()));
            }
        }

        Ok(Self(normalized))
    }

    /// The full normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`pt` for `pt-br`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Errors that can occur when parsing a locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Locale code is empty")]
    Empty,

    #[error("Invalid locale code: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_codes() {
        assert_eq!(Locale::parse("en").unwrap().as_str(), "en");
        assert_eq!(Locale::parse("pt_BR").unwrap().as_str(), "pt-br");
        assert_eq!(Locale::parse(" ZH-tw ").unwrap().as_str(), "zh-tw");
    }

    #[test]
    fn extracts_language() {
        assert_eq!(Locale::parse("pt-br").unwrap().language(), "pt");
        assert_eq!(Locale::parse("fil").unwrap().language(), "fil");
    }

    #[test]
    fn rejects_invalid_codes() {
        assert_eq!(Locale::parse(""), Err(LocaleError::Empty));
        assert!(matches!(Locale::parse("e"), Err(LocaleError::Invalid(_))));
        assert!(matches!(Locale::parse("en-"), Err(LocaleError::Invalid(_))));
        assert!(matches!(Locale::parse("12"), Err(LocaleError::Invalid(_))));
        assert!(matches!(Locale::parse("en/us"), Err(LocaleError::Invalid(_))));
    }

    #[test]
    fn deserializes_from_string() {
        let locale: Locale = serde_json::from_str("\"ES\"").unwrap();
        assert_eq!(locale.as_str(), "es");

        let bad: Result<Locale, _> = serde_json::from_str("\"not a locale\"");
        assert!(bad.is_err());
    }
}
