use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Speaker of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label used for this role in a compiled prompt.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One validated utterance in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// A history entry exactly as it arrived on the wire, before validation.
///
/// Both fields are optional so that a missing field becomes a
/// `MalformedTurn` error instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnInput {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Validate a wire entry found at position `index` of the history.
    ///
    /// Roles are matched case-sensitively against `user` and `assistant`.
    /// Any other role, or a missing field, rejects the entry.
    pub fn try_from_input(index: usize, input: TurnInput) -> Result<Self, CoreError> {
        let malformed = |reason: String| CoreError::MalformedTurn { index, reason };

        let tag = input.role.ok_or_else(|| malformed("missing role".to_string()))?;
        let role = Role::parse(&tag).ok_or_else(|| malformed(format!("unknown role \"{tag}\"")))?;
        let content = input
            .content
            .ok_or_else(|| malformed("missing content".to_string()))?;

        Ok(Self { role, content })
    }

    /// Render as a single prompt line, e.g. `User: Hi`.
    pub fn prompt_line(&self) -> String {
        format!("{}: {}", self.role.label(), self.content)
    }
}
