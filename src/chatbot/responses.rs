//! Per-language reply table

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{builtin, ChatbotError, IntentCategory, Language};

/// Reply lines keyed by language, then by category.
///
/// Greeting and fallback lines are alternatives; the other categories are read
/// as one multi-line block. `echo_templates` hold optional fallback openers
/// containing `{utterance}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTable {
    default_language: Language,
    entries: IndexMap<Language, IndexMap<IntentCategory, Vec<String>>>,
    #[serde(default)]
    echo_templates: IndexMap<Language, Vec<String>>,
}

impl ResponseTable {
    pub fn new(default_language: Language) -> Self {
        Self {
            default_language,
            entries: IndexMap::new(),
            echo_templates: IndexMap::new(),
        }
    }

    /// Table shipped with the server (English, Hindi, Spanish, French).
    pub fn builtin() -> Self {
        let mut table = Self::new(Language::En);
        for (language, categories) in builtin::LINES {
            for (category, lines) in *categories {
                table.insert(*language, *category, lines.iter().map(|l| l.to_string()).collect());
            }
        }
        for (language, templates) in builtin::ECHO_TEMPLATES {
            table
                .echo_templates
                .insert(*language, templates.iter().map(|t| t.to_string()).collect());
        }
        table
    }

    /// Parse a JSON table and check it for completeness.
    pub fn from_json(json: &str) -> crate::error::AppResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn insert(&mut self, language: Language, category: IntentCategory, lines: Vec<String>) {
        self.entries
            .entry(language)
            .or_default()
            .insert(category, lines);
    }

    pub fn set_echo_templates(&mut self, language: Language, templates: Vec<String>) {
        self.echo_templates.insert(language, templates);
    }

    /// Change the language unknown codes fall back to; re-run [`Self::validate`] after.
    pub fn set_default_language(&mut self, language: Language) {
        self.default_language = language;
    }

    /// Every language present, and the default language, must carry a
    /// non-empty entry for every category.
    pub fn validate(&self) -> Result<(), ChatbotError> {
        if !self.entries.contains_key(&self.default_language) {
            return Err(missing(self.default_language, IntentCategory::Greeting));
        }

        for (language, categories) in &self.entries {
            for category in IntentCategory::ALL {
                match categories.get(&category) {
                    Some(lines) if !lines.is_empty() => {}
                    _ => return Err(missing(*language, category)),
                }
            }
        }
        Ok(())
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Languages that have their own entries, in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.keys().copied()
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.entries.contains_key(&language)
    }

    /// Language whose entries serve `code`; the default when the code is
    /// unknown or has no entries.
    pub fn resolve(&self, code: &str) -> Language {
        Language::from_code(code)
            .filter(|lang| self.entries.contains_key(lang))
            .unwrap_or(self.default_language)
    }

    pub fn lines(
        &self,
        language: Language,
        category: IntentCategory,
    ) -> Result<&[String], ChatbotError> {
        self.entries
            .get(&language)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
            .ok_or_else(|| missing(language, category))
    }

    pub fn echo_templates(&self, language: Language) -> &[String] {
        self.echo_templates
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn missing(language: Language, category: IntentCategory) -> ChatbotError {
    ChatbotError::MissingTranslation {
        language: language.code().to_string(),
        category: category.to_string(),
    }
}
