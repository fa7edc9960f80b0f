//! Chat-board specific operations, expressed through `mutate`.

use super::{ChatBoard, ChatMessage, EntityError, IndexedEntity};
use crate::utils::now_millis;

impl IndexedEntity<ChatBoard> {
    /// Messages of `chat_id` in posting order.
    pub async fn list_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, EntityError> {
        Ok(self.get_state(chat_id).await?.messages)
    }

    /// Append a message to `chat_id` with a fresh id and the current server time.
    /// `NotFound` when the board does not exist; nothing is written then.
    pub async fn send_message(
        &self,
        chat_id: &str,
        user_id: &str,
        text: &str,
    ) -> Result<ChatMessage, EntityError> {
        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.to_string(),
            user_id: user_id.to_string(),
            text: text.to_string(),
            ts: now_millis(),
        };
        let appended = message.clone();
        self.update(chat_id, move |mut board| {
            board.messages.push(appended);
            board
        })
        .await?;
        Ok(message)
    }
}
