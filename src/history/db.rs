//! Database operations for chat history
//!
//! This module contains the conversation store: queries over the `chats`
//! and `messages` tables. All conversation lookups are scoped to the
//! owning account; a conversation belonging to another account with the
//! same external `chat_id` never matches.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Conversation record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Conversation {
    /// Internal id (server-assigned)
    pub id: Uuid,
    /// Owning account
    pub user_id: Uuid,
    /// External, client-chosen identifier (unique per owning account)
    pub chat_id: String,
    /// Display title, mutable via rename
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Message record
///
/// Immutable once created. The BIGSERIAL id breaks ordering ties between
/// messages with identical creation timestamps.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StoredMessage {
    pub id: i64,
    /// Owning conversation (internal id)
    pub chat_id: Uuid,
    pub message_text: String,
    /// True when authored by the end user, false for the assistant
    pub is_user: bool,
    pub created_at: DateTime<Utc>,
}

/// Find a conversation by its external identifier, scoped to the account
pub async fn find_by_external_id(
    pool: &PgPool,
    user_id: Uuid,
    external_id: &str,
) -> Result<Option<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, chat_id, title, created_at, updated_at
        FROM chats
        WHERE user_id = $1 AND chat_id = $2
        "#,
    )
    .bind(user_id)
    .bind(external_id)
    .fetch_optional(pool)
    .await
}

/// Create a conversation
///
/// The `(user_id, chat_id)` pair is covered by a unique constraint; a
/// violation surfaces as `sqlx::Error` and callers inspect it with
/// `error::is_unique_violation` to detect a lost create race.
pub async fn create_conversation(
    pool: &PgPool,
    user_id: Uuid,
    external_id: &str,
    title: &str,
) -> Result<Conversation, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Conversation>(
        r#"
        INSERT INTO chats (id, user_id, chat_id, title, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, chat_id, title, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(external_id)
    .bind(title)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Rename a conversation
///
/// Updating zero rows is not an error: renaming a conversation that does
/// not exist silently succeeds.
pub async fn rename_conversation(
    pool: &PgPool,
    user_id: Uuid,
    external_id: &str,
    title: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE chats
        SET title = $1
        WHERE user_id = $2 AND chat_id = $3
        "#,
    )
    .bind(title)
    .bind(user_id)
    .bind(external_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// List an account's conversations, most recently active first
pub async fn list_for_account(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, chat_id, title, created_at, updated_at
        FROM chats
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Append a message to a conversation
///
/// Also advances the conversation's `updated_at` so the listing order
/// reflects recent activity.
pub async fn append_message(
    pool: &PgPool,
    conversation_id: Uuid,
    text: &str,
    is_user: bool,
) -> Result<StoredMessage, sqlx::Error> {
    let message = sqlx::query_as::<_, StoredMessage>(
        r#"
        INSERT INTO messages (chat_id, message_text, is_user, created_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING id, chat_id, message_text, is_user, created_at
        "#,
    )
    .bind(conversation_id)
    .bind(text)
    .bind(is_user)
    .fetch_one(pool)
    .await?;

    sqlx::query(
        r#"
        UPDATE chats SET updated_at = $1 WHERE id = $2
        "#,
    )
    .bind(message.created_at)
    .bind(conversation_id)
    .execute(pool)
    .await?;

    Ok(message)
}

/// List a conversation's messages in creation order
///
/// Joins through `chats` so the external identifier resolves within the
/// account's scope only. A missing conversation yields an empty vec, not
/// an error.
pub async fn list_messages(
    pool: &PgPool,
    user_id: Uuid,
    external_id: &str,
) -> Result<Vec<StoredMessage>, sqlx::Error> {
    sqlx::query_as::<_, StoredMessage>(
        r#"
        SELECT m.id, m.chat_id, m.message_text, m.is_user, m.created_at
        FROM messages m
        JOIN chats c ON m.chat_id = c.id
        WHERE c.chat_id = $1 AND c.user_id = $2
        ORDER BY m.created_at ASC, m.id ASC
        "#,
    )
    .bind(external_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}
