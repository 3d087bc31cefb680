//! Chat assistant service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    chatbot::{classify_intent, ChatbotError, Language, ResponseTable},
    error::AppResult,
    models::chat::{ChatTurn, LanguageInfo, SendMessage},
    repository::Repository,
};

#[derive(Clone)]
pub struct ChatbotService {
    repository: Repository,
    responses: Arc<ResponseTable>,
    default_language: String,
}

impl ChatbotService {
    pub fn new(repository: Repository, responses: Arc<ResponseTable>, default_language: String) -> Self {
        Self {
            repository,
            responses,
            default_language,
        }
    }

    /// Classify a message, record the exchange and return it
    pub async fn send_message(&self, request: SendMessage) -> AppResult<ChatTurn> {
        request.validate()?;

        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatbotError::EmptyMessage.into());
        }

        let code = request.language.as_deref().unwrap_or(&self.default_language);
        let language = self.responses.resolve(code);

        let reply = {
            let mut rng = rand::thread_rng();
            classify_intent(message, code, &self.responses, &mut rng)?
        };

        tracing::debug!(
            category = %reply.category,
            language = language.code(),
            "Classified chat message"
        );

        let turn = ChatTurn {
            id: Uuid::new_v4(),
            user: request.message,
            bot: reply.text,
            category: reply.category,
            language,
            timestamp: Utc::now(),
        };

        self.repository.conversations.append(turn.clone()).await?;

        Ok(turn)
    }

    pub async fn history(&self) -> Vec<ChatTurn> {
        self.repository.conversations.list().await
    }

    pub async fn clear_history(&self) -> AppResult<()> {
        self.repository.conversations.clear().await?;
        tracing::info!("Chat history cleared");
        Ok(())
    }

    /// Every language the assistant accepts, flagged with whether it has its own replies
    pub fn languages(&self) -> Vec<LanguageInfo> {
        Language::ALL
            .iter()
            .map(|language| LanguageInfo {
                code: language.code().to_string(),
                name: language.to_string(),
                translated: self.responses.has_language(*language),
            })
            .collect()
    }
}
