//! Keyword intent classification

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChatbotError, ResponseTable};

/// What the user is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    Help,
    Attractions,
    Itinerary,
    Restaurants,
    Booking,
    Fallback,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 7] = [
        IntentCategory::Greeting,
        IntentCategory::Help,
        IntentCategory::Attractions,
        IntentCategory::Itinerary,
        IntentCategory::Restaurants,
        IntentCategory::Booking,
        IntentCategory::Fallback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::Help => "help",
            IntentCategory::Attractions => "attractions",
            IntentCategory::Itinerary => "itinerary",
            IntentCategory::Restaurants => "restaurants",
            IntentCategory::Booking => "booking",
            IntentCategory::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword sets in priority order. The first set with a keyword contained in
/// the lower-cased utterance decides the category.
pub const INTENT_KEYWORDS: &[(IntentCategory, &[&str])] = &[
    (IntentCategory::Greeting, &["hello", "hi", "hey", "greetings"]),
    (IntentCategory::Help, &["help", "assist", "support", "what can you do"]),
    (
        IntentCategory::Attractions,
        &["attraction", "place", "visit", "see", "sightseeing"],
    ),
    (
        IntentCategory::Itinerary,
        &["itinerary", "plan", "schedule", "trip plan"],
    ),
    (
        IntentCategory::Restaurants,
        &["restaurant", "food", "eat", "dining", "meal"],
    ),
    (
        IntentCategory::Booking,
        &["book", "reserve", "booking", "reservation"],
    ),
];

/// Placeholder replaced by the user's text in fallback echo templates
pub const UTTERANCE_PLACEHOLDER: &str = "{utterance}";

/// Category of an utterance, independent of any conversation history.
pub fn detect_category(utterance: &str) -> IntentCategory {
    let normalized = utterance.to_lowercase();

    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(IntentCategory::Fallback)
}

/// Classified utterance and the reply text to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reply {
    pub category: IntentCategory,
    pub text: String,
}

/// Classify `utterance` and build the reply in `language`.
///
/// Greeting and fallback replies pick one candidate at random; the other
/// categories join all of their lines. A fallback reply quotes the utterance
/// verbatim as plain text. Unknown or untranslated languages use the table's
/// default language.
pub fn classify_intent<R: Rng + ?Sized>(
    utterance: &str,
    language: &str,
    table: &ResponseTable,
    rng: &mut R,
) -> Result<Reply, ChatbotError> {
    let category = detect_category(utterance);
    let language = table.resolve(language);
    let lines = table.lines(language, category)?;

    let missing = || ChatbotError::MissingTranslation {
        language: language.code().to_string(),
        category: category.to_string(),
    };

    let text = match category {
        IntentCategory::Greeting => lines.choose(rng).ok_or_else(missing)?.clone(),
        IntentCategory::Fallback => {
            let follow_up = lines.choose(rng).ok_or_else(missing)?;
            match table.echo_templates(language).choose(rng) {
                Some(template) => format!(
                    "{}\n\n{}",
                    template.replace(UTTERANCE_PLACEHOLDER, utterance.trim()),
                    follow_up
                ),
                None => follow_up.clone(),
            }
        }
        _ => lines.join("\n"),
    };

    Ok(Reply { category, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::Language;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_greeting() {
        assert_eq!(detect_category("Hello there"), IntentCategory::Greeting);
        assert_eq!(detect_category("HEY!"), IntentCategory::Greeting);
    }

    #[test]
    fn test_help_beats_itinerary() {
        assert_eq!(
            detect_category("Can you help me plan a trip?"),
            IntentCategory::Help
        );
    }

    #[test]
    fn test_each_category() {
        assert_eq!(detect_category("what can you do"), IntentCategory::Help);
        assert_eq!(detect_category("Top sightseeing spots"), IntentCategory::Attractions);
        assert_eq!(detect_category("my itinerary"), IntentCategory::Itinerary);
        assert_eq!(detect_category("Good dining nearby"), IntentCategory::Restaurants);
        assert_eq!(detect_category("reserve a room"), IntentCategory::Booking);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            detect_category("xyz completely unrelated text"),
            IntentCategory::Fallback
        );
        assert_eq!(detect_category(""), IntentCategory::Fallback);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "this" contains "hi", so greeting outranks the restaurant keyword.
        assert_eq!(detect_category("is this food good"), IntentCategory::Greeting);
        // "booking" would match booking, but "see" in "seen" comes first.
        assert_eq!(detect_category("never seen a booking"), IntentCategory::Attractions);
    }

    #[test]
    fn test_priority_order_for_every_pair() {
        // One representative keyword per category, chosen so none contains
        // another category's keyword.
        let samples = [
            (IntentCategory::Greeting, "greetings"),
            (IntentCategory::Help, "support"),
            (IntentCategory::Attractions, "attraction"),
            (IntentCategory::Itinerary, "schedule"),
            (IntentCategory::Restaurants, "dining"),
            (IntentCategory::Booking, "reservation"),
        ];
        for (i, (first, a)) in samples.iter().enumerate() {
            for (second, b) in samples.iter().skip(i + 1) {
                assert_eq!(detect_category(&format!("{} {}", b, a)), *first);
                assert_eq!(detect_category(&format!("{} {}", a, b)), *first);
                assert_eq!(detect_category(b), *second);
            }
        }
    }

    #[test]
    fn test_list_categories_join_all_lines() {
        let table = ResponseTable::builtin();
        let reply = classify_intent("I need help", "en", &table, &mut rng()).unwrap();
        assert_eq!(reply.category, IntentCategory::Help);
        let expected = table
            .lines(Language::En, IntentCategory::Help)
            .unwrap()
            .join("\n");
        assert_eq!(reply.text, expected);
        assert!(reply.text.starts_with("I can help you with:"));
    }

    #[test]
    fn test_greeting_is_one_candidate() {
        let table = ResponseTable::builtin();
        let reply = classify_intent("hello", "en", &table, &mut rng()).unwrap();
        let candidates = table
            .lines(Language::En, IntentCategory::Greeting)
            .unwrap();
        assert!(candidates.contains(&reply.text));
    }

    #[test]
    fn test_category_is_stable_across_calls() {
        let table = ResponseTable::builtin();
        let mut rng = rng();
        for utterance in ["hello", "xyz completely unrelated text", "book a tour"] {
            let first = classify_intent(utterance, "en", &table, &mut rng).unwrap();
            let second = classify_intent(utterance, "en", &table, &mut rng).unwrap();
            assert_eq!(first.category, second.category);
        }
    }

    #[test]
    fn test_fallback_echoes_utterance() {
        let table = ResponseTable::builtin();
        let reply = classify_intent("  <b>quantum</b> xyz  ", "en", &table, &mut rng()).unwrap();
        assert_eq!(reply.category, IntentCategory::Fallback);
        assert!(reply.text.contains("\"<b>quantum</b> xyz\""));
        assert!(reply.text.contains("\n\n"));
    }

    #[test]
    fn test_unknown_language_uses_default() {
        let table = ResponseTable::builtin();
        let en = classify_intent("booking", "en", &table, &mut rng()).unwrap();
        let de = classify_intent("booking", "de", &table, &mut rng()).unwrap();
        let santhali = classify_intent("booking", "sat", &table, &mut rng()).unwrap();
        assert_eq!(en, de);
        assert_eq!(en, santhali);
    }

    #[test]
    fn test_unvalidated_table_reports_missing_entry() {
        let mut table = ResponseTable::new(Language::En);
        table.insert(Language::En, IntentCategory::Greeting, vec!["Hello!".to_string()]);

        assert_eq!(
            classify_intent("book a tour", "en", &table, &mut rng()),
            Err(ChatbotError::MissingTranslation {
                language: "en".to_string(),
                category: "booking".to_string(),
            })
        );
        assert!(classify_intent("hello", "en", &table, &mut rng()).is_ok());
    }

    #[test]
    fn test_localized_reply() {
        let table = ResponseTable::builtin();
        let reply = classify_intent("restaurant", "fr", &table, &mut rng()).unwrap();
        assert_eq!(reply.category, IntentCategory::Restaurants);
        assert!(reply.text.starts_with("Je peux vous aider à trouver"));
    }
}
