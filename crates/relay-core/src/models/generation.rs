use crate::error::CoreError;

/// Non-empty text returned by the generation service.
///
/// The only way to obtain one is [`Generation::new`], which refuses empty
/// text. `ConversationHistory::append` takes a `Generation`, so an empty
/// assistant turn can never be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation(String);

impl Generation {
    pub fn new(text: String) -> Result<Self, CoreError> {
        if text.is_empty() {
            return Err(CoreError::EmptyGeneration);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Generation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
