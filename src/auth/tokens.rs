/**
 * Session Token Minting
 *
 * Tokens are opaque random strings handed back on register and login.
 * Nothing on the server ever verifies them; identity for the chat
 * endpoints comes from the X-User-Id header.
 */

use uuid::Uuid;

/// Mint an opaque session token
///
/// Two v4 UUIDs concatenated, 64 hex characters of randomness.
pub fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}
