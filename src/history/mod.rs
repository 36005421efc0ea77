//! Chat History Module
//!
//! Persistence and retrieval of per-user conversations and messages.
//!
//! # Module Structure
//!
//! ```text
//! history/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Conversation store (queries)
//! ├── service.rs  - Resolve-or-create, rename, listing views
//! └── handlers.rs - HTTP handlers for /api/chat-history
//! ```
//!
//! # Data Model
//!
//! A conversation is keyed externally by a client-chosen `chat_id` string
//! that is unique only within one account. The first message that targets
//! an unseen `chat_id` creates the conversation lazily with a placeholder
//! title. Messages are immutable and ordered by creation time (insertion
//! order breaks ties); appending one advances the conversation's
//! last-update timestamp so the listing reflects recent activity.

/// Conversation store queries
pub mod db;

/// History service (resolve-or-create, views)
pub mod service;

/// HTTP handlers for the chat-history endpoint
pub mod handlers;

pub use db::{Conversation, StoredMessage};
pub use handlers::{get_history, post_history};
