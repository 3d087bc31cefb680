//! Chat assistant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::chatbot::{IntentCategory, Language};

/// One exchange of the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub id: Uuid,
    /// Message as typed by the user
    pub user: String,
    /// Reply shown to the user
    pub bot: String,
    pub category: IntentCategory,
    /// Language the reply was written in
    pub language: Language,
    pub timestamp: DateTime<Utc>,
}

/// Send message request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessage {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1 to 2000 characters"))]
    pub message: String,
    /// Language code (en, hi, sat, ho, mun, bn, or, es, fr); defaults to the configured language
    pub language: Option<String>,
}

/// Language offered by the assistant
#[derive(Debug, Serialize, ToSchema)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    /// Whether replies exist in this language or fall back to the default
    pub translated: bool,
}
