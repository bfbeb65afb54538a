use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignatureError>;

/// Syntax error raised when input does not match the signature grammar at the
/// expected position.
///
/// All operations in this crate are deterministic: the same malformed input
/// always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid signature `{signature}` at offset {offset}: {reason}")]
pub struct SignatureError {
    signature: String,
    offset: usize,
    reason: &'static str,
}

impl SignatureError {
    pub fn new(signature: impl Into<String>, offset: usize, reason: &'static str) -> Self {
        SignatureError {
            signature: signature.into(),
            offset,
            reason,
        }
    }

    /// The input the error was raised for.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Byte offset into [`Self::signature`] where scanning failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reason(&self) -> &str {
        self.reason
    }
}
