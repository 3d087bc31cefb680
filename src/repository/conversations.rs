//! Conversation history store
//!
//! A single global list of chat turns, optionally mirrored to a JSON file so
//! the history survives restarts.

use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::{error::AppResult, models::chat::ChatTurn};

pub struct ConversationStore {
    turns: RwLock<Vec<ChatTurn>>,
    path: Option<PathBuf>,
    max_turns: usize,
}

impl ConversationStore {
    /// History kept in memory only
    pub fn in_memory(max_turns: usize) -> Self {
        Self {
            turns: RwLock::new(Vec::new()),
            path: None,
            max_turns,
        }
    }

    /// History backed by `path`. A missing file starts an empty history; an
    /// unreadable one is logged and replaced on the next write.
    pub async fn open(path: impl Into<PathBuf>, max_turns: usize) -> AppResult<Self> {
        let path = path.into();

        let mut turns = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<ChatTurn>>(&bytes).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable chat history {}: {}", path.display(), e);
                Vec::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let overflow = turns.len().saturating_sub(max_turns);
        turns.drain(..overflow);

        tracing::info!("Loaded {} chat turns from {}", turns.len(), path.display());

        Ok(Self {
            turns: RwLock::new(turns),
            path: Some(path),
            max_turns,
        })
    }

    /// Append a turn, dropping the oldest ones beyond the limit.
    ///
    /// Memory only changes once the file write succeeded.
    pub async fn append(&self, turn: ChatTurn) -> AppResult<()> {
        let mut turns = self.turns.write().await;

        let mut next = Vec::with_capacity(turns.len() + 1);
        next.extend(turns.iter().cloned());
        next.push(turn);
        let overflow = next.len().saturating_sub(self.max_turns);
        next.drain(..overflow);

        self.persist(&next).await?;
        *turns = next;
        Ok(())
    }

    /// All turns, oldest first
    pub async fn list(&self) -> Vec<ChatTurn> {
        self.turns.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.turns.read().await.len()
    }

    pub async fn clear(&self) -> AppResult<()> {
        let mut turns = self.turns.write().await;
        self.persist(&[]).await?;
        turns.clear();
        Ok(())
    }

    async fn persist(&self, turns: &[ChatTurn]) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(turns)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::{IntentCategory, Language};
    use chrono::Utc;
    use uuid::Uuid;

    fn turn(user: &str) -> ChatTurn {
        ChatTurn {
            id: Uuid::new_v4(),
            user: user.to_string(),
            bot: "reply".to_string(),
            category: IntentCategory::Fallback,
            language: Language::En,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_bounded_history_drops_oldest() {
        let store = ConversationStore::in_memory(2);
        for text in ["one", "two", "three"] {
            store.append(turn(text)).await.unwrap();
        }

        let users: Vec<String> = store.list().await.into_iter().map(|t| t.user).collect();
        assert_eq!(users, vec!["two", "three"]);
    }

    #[tokio::test]
    async fn test_file_history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat").join("history.json");

        let store = ConversationStore::open(&path, 10).await.unwrap();
        store.append(turn("hello")).await.unwrap();
        store.append(turn("book a tour")).await.unwrap();
        drop(store);

        let reopened = ConversationStore::open(&path, 10).await.unwrap();
        let turns = reopened.list().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].user, "book a tour");

        reopened.clear().await.unwrap();
        let again = ConversationStore::open(&path, 10).await.unwrap();
        assert_eq!(again.len().await, 0);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_history_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let store = ConversationStore::open(&path, 10).await.unwrap();
        store.append(turn("kept")).await.unwrap();

        // A directory where the file should be makes every write fail.
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir(&path).await.unwrap();

        assert!(store.append(turn("lost")).await.is_err());
        let users: Vec<String> = store.list().await.into_iter().map(|t| t.user).collect();
        assert_eq!(users, vec!["kept"]);

        assert!(store.clear().await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let store = ConversationStore::open(&path, 10).await.unwrap();
        assert_eq!(store.len().await, 0);
    }
}
