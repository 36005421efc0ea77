//! Proxy Module
//!
//! Forwards chat messages to the FinBro AI API and relays its responses.
//! This module persists nothing; saving the resulting exchange is the
//! client's responsibility via the chat-history endpoint.

/// HTTP handler for the proxy endpoint
pub mod handlers;

pub use handlers::post_chat;
