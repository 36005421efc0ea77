/**
 * History Service
 *
 * Orchestration over the conversation store: recording a message against
 * an external chat identifier (creating the conversation lazily on first
 * reference), renaming, and the listing/detail views.
 *
 * # Resolve-or-Create
 *
 * `record_message` is an idempotent get-or-insert keyed by the
 * caller-chosen chat identifier. Two concurrent first messages for the
 * same (account, chat_id) can both observe "absent" and both attempt
 * creation; the unique constraint on (user_id, chat_id) makes one of the
 * inserts fail, and the loser re-fetches the winner's row instead of
 * propagating the conflict. A replayed first message therefore never
 * produces a second conversation.
 */

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{is_unique_violation, ApiError};
use crate::history::db::{self, Conversation, StoredMessage};

/// Placeholder title given to lazily created conversations.
pub const DEFAULT_CHAT_TITLE: &str = "New chat";

/// Record a message against an external chat identifier
///
/// Creates the conversation on first reference, then appends the message.
///
/// # Errors
///
/// * `400` - empty `external_id` or `text`
/// * `500` - database failure
pub async fn record_message(
    pool: &PgPool,
    account_id: Uuid,
    external_id: &str,
    text: &str,
    is_user: bool,
) -> Result<(), ApiError> {
    if external_id.is_empty() || text.is_empty() {
        return Err(ApiError::validation("chat_id and message required"));
    }

    let conversation = resolve_or_create(pool, account_id, external_id).await?;
    db::append_message(pool, conversation.id, text, is_user).await?;

    Ok(())
}

/// Look up a conversation, creating it if this is the first reference
async fn resolve_or_create(
    pool: &PgPool,
    account_id: Uuid,
    external_id: &str,
) -> Result<Conversation, ApiError> {
    if let Some(existing) = db::find_by_external_id(pool, account_id, external_id).await? {
        return Ok(existing);
    }

    match db::create_conversation(pool, account_id, external_id, DEFAULT_CHAT_TITLE).await {
        Ok(created) => Ok(created),
        // Lost the create race; fetch the row the winner inserted.
        Err(e) if is_unique_violation(&e) => {
            tracing::debug!("Conversation create conflict for chat_id {}", external_id);
            db::find_by_external_id(pool, account_id, external_id)
                .await?
                .ok_or_else(|| ApiError::internal("conversation missing after create conflict"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Rename a conversation
///
/// Silently succeeds when no conversation matches (zero rows updated).
/// Arguably a miss should be reported; clients rely on the silent
/// answer, so it stays.
pub async fn rename(
    pool: &PgPool,
    account_id: Uuid,
    external_id: &str,
    title: &str,
) -> Result<(), ApiError> {
    db::rename_conversation(pool, account_id, external_id, title).await?;
    Ok(())
}

/// List an account's conversations, most recently active first
pub async fn list_conversations(
    pool: &PgPool,
    account_id: Uuid,
) -> Result<Vec<Conversation>, ApiError> {
    Ok(db::list_for_account(pool, account_id).await?)
}

/// List a conversation's messages in creation order
///
/// Returns an empty vec when the conversation does not exist.
pub async fn list_messages(
    pool: &PgPool,
    account_id: Uuid,
    external_id: &str,
) -> Result<Vec<StoredMessage>, ApiError> {
    Ok(db::list_messages(pool, account_id, external_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://postgres@localhost/finbro_unreachable")
            .expect("lazy pool")
    }

    #[tokio::test]
    async fn test_record_message_empty_chat_id() {
        let result =
            record_message(&lazy_pool(), Uuid::new_v4(), "", "hello", true).await;
        match result.unwrap_err() {
            ApiError::Validation(msg) => assert_eq!(msg, "chat_id and message required"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_message_empty_text() {
        let result =
            record_message(&lazy_pool(), Uuid::new_v4(), "chat1", "", true).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation(_)));
    }
}
