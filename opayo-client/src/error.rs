//! Error types for the message layer.

/// Errors raised while configuring or assembling messages.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A caller configuration error, not a data error: messages cannot be
    /// authenticated without both halves of the credential pair.
    #[error("Integration key and password must both be configured")]
    MissingCredentials,
}
