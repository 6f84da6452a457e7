use crate::error::CoreError;

/// Require the inbound user message to be present.
///
/// An empty string is a valid message; only absence is rejected.
pub fn require_message(message: Option<String>) -> Result<String, CoreError> {
    message.ok_or(CoreError::MissingMessage)
}
