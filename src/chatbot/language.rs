//! Languages offered by the assistant

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported language codes.
///
/// The regional languages are selectable but may have no reply table of their
/// own, in which case lookups fall back to the table's default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Sat,
    Ho,
    Mun,
    Bn,
    Or,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::En,
        Language::Hi,
        Language::Sat,
        Language::Ho,
        Language::Mun,
        Language::Bn,
        Language::Or,
        Language::Es,
        Language::Fr,
    ];

    /// Parse a code such as `en`, `EN` or `en-US`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "sat" => Some(Language::Sat),
            "ho" => Some(Language::Ho),
            "mun" => Some(Language::Mun),
            "bn" => Some(Language::Bn),
            "or" => Some(Language::Or),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Sat => "sat",
            Language::Ho => "ho",
            Language::Mun => "mun",
            Language::Bn => "bn",
            Language::Or => "or",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Sat => "ᱥᱟᱱᱛᱟᱲᱤ (Santhali)",
            Language::Ho => "ᱦᱳ (Ho)",
            Language::Mun => "ᱢᱩᱱᱰᱟᱨᱤ (Mundari)",
            Language::Bn => "বাংলা (Bengali)",
            Language::Or => "ଓଡ଼ିଆ (Odia)",
            Language::Es => "Español",
            Language::Fr => "Français",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("hi"), Some(Language::Hi));
        assert_eq!(Language::from_code("FR"), Some(Language::Fr));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }
}
