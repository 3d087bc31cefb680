//! Rule-based multilingual assistant.
//!
//! Classification is a first-match scan over ordered keyword sets; replies
//! come from a per-language [`ResponseTable`] checked for completeness when
//! it is loaded.

mod builtin;
pub mod intent;
pub mod language;
pub mod responses;

use thiserror::Error;

pub use intent::{classify_intent, detect_category, IntentCategory, Reply, INTENT_KEYWORDS};
pub use language::Language;
pub use responses::ResponseTable;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatbotError {
    /// The table has no usable lines for a language/category pair
    #[error("missing translation for {category} in language '{language}'")]
    MissingTranslation { language: String, category: String },

    #[error("message is empty")]
    EmptyMessage,
}
