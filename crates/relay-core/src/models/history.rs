use serde::Serialize;

use crate::error::CoreError;
use crate::models::generation::Generation;
use crate::models::turn::{Turn, TurnInput};

/// Cue that ends every compiled prompt; the generation service continues from here.
const GENERATION_CUE: &str = "Assistant:";

/// Chronological transcript of a conversation, owned by the caller.
///
/// Nothing here persists or truncates the transcript. Each request brings
/// the full history, and the extended history goes back in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// Validate every wire entry. The first malformed entry rejects the whole history.
    pub fn from_inputs(inputs: Vec<TurnInput>) -> Result<Self, CoreError> {
        let turns = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| Turn::try_from_input(index, input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { turns })
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }

    /// Linearize the history plus the new user message into one prompt.
    ///
    /// History turns become `Label: content` lines joined by `\n`, followed by
    /// `\nUser: <message>\nAssistant:`. With an empty history the prompt
    /// therefore starts with a newline.
    pub fn compile(&self, message: &str) -> String {
        let mut prompt = self
            .turns
            .iter()
            .map(Turn::prompt_line)
            .collect::<Vec<_>>()
            .join("\n");

        prompt.push_str("\nUser: ");
        prompt.push_str(message);
        prompt.push('\n');
        prompt.push_str(GENERATION_CUE);
        prompt
    }

    /// Record a completed exchange: the user message, then the generated reply.
    pub fn append(mut self, message: String, reply: Generation) -> Self {
        self.turns.reserve(2);
        self.turns.push(Turn::user(message));
        self.turns.push(Turn::assistant(reply.into_inner()));
        self
    }
}

impl From<Vec<Turn>> for ConversationHistory {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}
