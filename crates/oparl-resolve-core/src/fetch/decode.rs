//! Decode a response body as UTF-8 text.

use crate::error::ResolveError;

/// Decode `body` strictly as UTF-8. Invalid bytes are a [`ResolveError::Decode`]
/// carrying the response status; nothing is replaced or dropped.
pub fn decode_body(status: u32, body: Vec<u8>) -> Result<String, ResolveError> {
    String::from_utf8(body).map_err(|source| ResolveError::Decode { status, source })
}
