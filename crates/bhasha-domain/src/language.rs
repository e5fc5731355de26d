//! Language module - the closed set of languages the engines understand

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the correction pipeline can target
///
/// `Other` is a terminal classification produced by language detection when
/// the text is too short, mixed, or outside the supported set. It is never a
/// valid target for language-specific correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English
    English,
    /// Malayalam
    Malayalam,
    /// Tamil
    Tamil,
    /// Kannada
    Kannada,
    /// Hindi
    Hindi,
    /// Unrecognized or uncertain
    Other,
}

impl LanguageCode {
    /// Get the language name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "english",
            LanguageCode::Malayalam => "malayalam",
            LanguageCode::Tamil => "tamil",
            LanguageCode::Kannada => "kannada",
            LanguageCode::Hindi => "hindi",
            LanguageCode::Other => "other",
        }
    }

    /// Get the language name with an uppercase first letter, for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Malayalam => "Malayalam",
            LanguageCode::Tamil => "Tamil",
            LanguageCode::Kannada => "Kannada",
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Other => "Other",
        }
    }

    /// Whether this language is a valid target for language-specific
    /// correction (everything except `Other`)
    pub fn is_correctable(&self) -> bool {
        !matches!(self, LanguageCode::Other)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(LanguageCode::English),
            "malayalam" | "ml" => Ok(LanguageCode::Malayalam),
            "tamil" | "ta" => Ok(LanguageCode::Tamil),
            "kannada" | "kn" => Ok(LanguageCode::Kannada),
            "hindi" | "hi" => Ok(LanguageCode::Hindi),
            "other" => Ok(LanguageCode::Other),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_trip_via_str() {
        for lang in [
            LanguageCode::English,
            LanguageCode::Malayalam,
            LanguageCode::Tamil,
            LanguageCode::Kannada,
            LanguageCode::Hindi,
            LanguageCode::Other,
        ] {
            let parsed = LanguageCode::from_str(lang.as_str()).unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&LanguageCode::Malayalam).unwrap();
        assert_eq!(json, "\"malayalam\"");
        let parsed: LanguageCode = serde_json::from_str("\"tamil\"").unwrap();
        assert_eq!(parsed, LanguageCode::Tamil);
    }

    #[test]
    fn test_other_is_not_correctable() {
        assert!(!LanguageCode::Other.is_correctable());
        assert!(LanguageCode::Hindi.is_correctable());
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(LanguageCode::from_str("klingon").is_err());
    }
}
