use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// A message posted to a chat board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub user_id: String,
    pub text: String,
    /// Epoch milliseconds, assigned by the server.
    pub ts: i64,
}

/// Summary of a chat board, without its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub title: String,
}

/// A chat board and its embedded message list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBoard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatBoard {
    #[must_use]
    pub fn summary(&self) -> Chat {
        Chat {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

// Fixed fixture time so reseeding an empty store always yields identical records.
const SEED_MESSAGE_TS: i64 = 1_704_067_200_000;

impl Entity for ChatBoard {
    const KIND: &'static str = "chat";
    const INDEX: &'static str = "chats";
    const ID_PREFIX: &'static str = "chat_";
    const LABEL: &'static str = "Chat";

    fn id(&self) -> &str {
        &self.id
    }

    fn initial_state() -> Self {
        Self::default()
    }

    fn seed_data() -> Vec<Self> {
        vec![ChatBoard {
            id: "c1".to_string(),
            title: "General".to_string(),
            messages: vec![ChatMessage {
                id: "m1".to_string(),
                chat_id: "c1".to_string(),
                user_id: "u1".to_string(),
                text: "Hello".to_string(),
                ts: SEED_MESSAGE_TS,
            }],
        }]
    }
}
