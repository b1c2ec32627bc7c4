use serde::Deserialize;

/// Raw payload captured from a prior HTTP exchange.
///
/// Only the body text is inspected here; the exchange itself is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerResponse {
    pub body: String,
}

/// Expected shape of an error payload returned by the team endpoints.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    user_message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode the `user_message` field out of a raw response body.
///
/// Returns `Ok(None)` for valid JSON objects that lack the field or carry
/// a `null`; an explicit empty string counts as present. Anything that is
/// not a JSON object is an error.
pub fn decode_user_message(body: &str) -> Result<Option<String>, DecodeError> {
    let payload: ErrorPayload = serde_json::from_str(body)?;
    Ok(payload.user_message)
}
