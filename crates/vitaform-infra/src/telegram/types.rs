//! Telegram Bot API wire types.
//!
//! Request/response structures for the `sendMessage` method. These are
//! Telegram-specific shapes used only for HTTP communication -- the
//! domain-facing result is the normalized `SubmitError` classification.

use serde::{Deserialize, Serialize};

/// Request body for `POST /bot<token>/sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

/// Response envelope of the Bot API.
///
/// On failure Telegram sets `ok: false` and explains itself in
/// `description`; the HTTP status alone is not authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
