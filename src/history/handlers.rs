/**
 * Chat History Handlers
 *
 * HTTP handlers for /api/chat-history. Both handlers require the caller's
 * identity from the X-User-Id header (absence is a 401, extracted before
 * the body is read).
 *
 * # Surface
 *
 * - `POST {action:"save_message", chat_id, message, is_user}` →
 *   `{"success":true}`; creates the conversation lazily on first message
 * - `POST {action:"update_chat_title", chat_id, title}` →
 *   `{"success":true}` always, even when nothing matched
 * - `GET ?chat_id=X` → `{"messages":[{text, isUser, timestamp}]}`
 * - `GET` (no query) → `{"chats":[{chat_id, title, created_at}]}`
 *
 * An unknown POST action answers 405, the endpoint's historical behavior.
 */

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::history::db::{Conversation, StoredMessage};
use crate::history::service;
use crate::middleware::UserId;

/// POST body for the chat-history endpoint
///
/// One shape for both actions; fields default to empty so validation can
/// decide what each action requires.
#[derive(Deserialize, Debug)]
pub struct HistoryRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub chat_id: String,
    /// Message text (save_message)
    #[serde(default)]
    pub message: String,
    /// Origin flag; defaults to the end user when omitted
    #[serde(default = "default_is_user")]
    pub is_user: bool,
    /// New title (update_chat_title)
    #[serde(default)]
    pub title: String,
}

fn default_is_user() -> bool {
    true
}

/// Query parameters for GET: presence of `chat_id` selects the
/// message-detail view, absence the conversation listing.
#[derive(Deserialize, Debug)]
pub struct HistoryQuery {
    pub chat_id: Option<String>,
}

/// Acknowledgment returned by both write actions
#[derive(Serialize, Debug)]
pub struct SaveResponse {
    pub success: bool,
}

/// Conversation summary in the listing view
#[derive(Serialize, Debug)]
pub struct ChatSummary {
    pub chat_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Conversation> for ChatSummary {
    fn from(conversation: Conversation) -> Self {
        Self {
            chat_id: conversation.chat_id,
            title: conversation.title,
            created_at: conversation.created_at,
        }
    }
}

/// Message in the detail view
#[derive(Serialize, Debug)]
pub struct MessageView {
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<StoredMessage> for MessageView {
    fn from(message: StoredMessage) -> Self {
        Self {
            text: message.message_text,
            is_user: message.is_user,
            timestamp: message.created_at,
        }
    }
}

#[derive(Serialize, Debug)]
struct ChatsResponse {
    chats: Vec<ChatSummary>,
}

#[derive(Serialize, Debug)]
struct MessagesResponse {
    messages: Vec<MessageView>,
}

/// Write handler: save a message or rename a conversation
pub async fn post_history(
    UserId(account_id): UserId,
    State(pool): State<Option<PgPool>>,
    Json(request): Json<HistoryRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;

    match request.action.as_str() {
        "save_message" => {
            service::record_message(
                &pool,
                account_id,
                &request.chat_id,
                &request.message,
                request.is_user,
            )
            .await?;
            Ok(Json(SaveResponse { success: true }))
        }
        "update_chat_title" => {
            service::rename(&pool, account_id, &request.chat_id, &request.title).await?;
            Ok(Json(SaveResponse { success: true }))
        }
        other => {
            // Unrecognized actions hit the method guard, not the
            // validation branch; clients see the historical 405.
            tracing::warn!("Unknown chat-history action: {:?}", other);
            Err(ApiError::MethodNotAllowed)
        }
    }
}

/// Read handler: list conversations, or list one conversation's messages
pub async fn get_history(
    UserId(account_id): UserId,
    State(pool): State<Option<PgPool>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;

    match query.chat_id {
        Some(chat_id) => {
            let messages = service::list_messages(&pool, account_id, &chat_id).await?;
            let messages: Vec<MessageView> = messages.into_iter().map(Into::into).collect();
            Ok(Json(MessagesResponse { messages }).into_response())
        }
        None => {
            let chats = service::list_conversations(&pool, account_id).await?;
            let chats: Vec<ChatSummary> = chats.into_iter().map(Into::into).collect();
            Ok(Json(ChatsResponse { chats }).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_is_user_defaults_to_true() {
        let request: HistoryRequest =
            serde_json::from_str(r#"{"action":"save_message","chat_id":"c1","message":"hi"}"#)
                .unwrap();
        assert!(request.is_user);
    }

    #[test]
    fn test_is_user_explicit_false() {
        let request: HistoryRequest = serde_json::from_str(
            r#"{"action":"save_message","chat_id":"c1","message":"hi","is_user":false}"#,
        )
        .unwrap();
        assert!(!request.is_user);
    }

    #[test]
    fn test_message_view_wire_shape() {
        let view = MessageView::from(StoredMessage {
            id: 7,
            chat_id: Uuid::new_v4(),
            message_text: "hello".to_string(),
            is_user: false,
            created_at: Utc::now(),
        });

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["text"], "hello");
        assert_eq!(value["isUser"], false);
        assert!(value.get("is_user").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_chat_summary_wire_shape() {
        let now = Utc::now();
        let summary = ChatSummary::from(Conversation {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            chat_id: "chat1".to_string(),
            title: "Budget Q&A".to_string(),
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["chat_id"], "chat1");
        assert_eq!(value["title"], "Budget Q&A");
        // Internal ids never leak into the listing.
        assert!(value.get("id").is_none());
        assert!(value.get("user_id").is_none());
    }

    #[tokio::test]
    async fn test_post_history_no_database() {
        let request = HistoryRequest {
            action: "save_message".to_string(),
            chat_id: "c1".to_string(),
            message: "hi".to_string(),
            is_user: true,
            title: String::new(),
        };

        let result = post_history(UserId(Uuid::new_v4()), State(None), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unavailable));
    }
}
