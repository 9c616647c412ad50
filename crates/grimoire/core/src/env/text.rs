//! Rich text decoding oracle.
use crate::error::{DexError, ErrorSeverity};

/// Markup framing error in a rich text cell.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("payload starting at byte {offset} is truncated")]
    TruncatedPayload { offset: usize },

    #[error("payload starting at byte {offset} has no end marker")]
    MissingPayloadEnd { offset: usize },

    #[error("text starting at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
}

impl DexError for TextError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            TextError::TruncatedPayload { .. } => "TEXT_TRUNCATED_PAYLOAD",
            TextError::MissingPayloadEnd { .. } => "TEXT_MISSING_PAYLOAD_END",
            TextError::InvalidUtf8 { .. } => "TEXT_INVALID_UTF8",
        }
    }
}

/// Strips markup payloads from raw rich text.
pub trait RichTextDecoder {
    /// Splits raw text into its plain text segments, dropping every
    /// non-text payload.
    fn decode(&self, raw: &[u8]) -> Result<Vec<String>, TextError>;

    /// Concatenated plain text.
    fn plain_text(&self, raw: &[u8]) -> Result<String, TextError> {
        Ok(self.decode(raw)?.concat())
    }
}
