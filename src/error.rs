/// Errors from token issuance, verification, and key loading.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("subject must not be empty")]
    EmptySubject,

    #[error("secret must not be empty")]
    EmptySecret,

    #[error("token must not be empty")]
    EmptyToken,

    #[error("key configuration missing: {0} is not set")]
    MissingKeyConfig(&'static str),

    #[error("key material rejected: {0}")]
    KeyRejected(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("token has expired")]
    TokenExpired,

    #[error("token is not yet valid")]
    TokenNotYetValid,
}
