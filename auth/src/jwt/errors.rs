use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures form a closed set so the request gate can match them
/// exhaustively; the gate collapses them into one uniform response so a
/// caller can never learn which check rejected a token.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}
