use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use relay_core::validate::require_message;
use relay_core::{ConversationHistory, Generation, TurnInput};

use crate::error::ApiError;
use crate::middleware::identity::Caller;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Absent and `null` both mean a new conversation.
    #[serde(default)]
    pub conversation_history: Option<Vec<TurnInput>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub conversation_history: ConversationHistory,
}

/// Relay one chat turn to the generation service.
///
/// The body is decoded by hand rather than with the `Json` extractor so that a
/// missing `Content-Type` is tolerated and every failure uses the error envelope.
/// An empty body is treated as `{}`.
pub async fn chat(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req: ChatRequest = if body.is_empty() {
        ChatRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let message = require_message(req.message)?;
    let history = ConversationHistory::from_inputs(req.conversation_history.unwrap_or_default())?;

    let exchange_id = Uuid::new_v4();
    tracing::info!(
        exchange_id = %exchange_id,
        caller = caller.name.as_deref().unwrap_or("anonymous"),
        history_len = history.len(),
        "starting chat exchange"
    );

    let prompt = history.compile(&message);
    tracing::debug!(exchange_id = %exchange_id, prompt = %prompt, "compiled prompt");

    let text = state.generator.generate(&prompt).await?;
    let reply = Generation::new(text)?;
    let response = reply.as_str().to_string();

    let conversation_history = history.append(message, reply);

    tracing::info!(
        exchange_id = %exchange_id,
        history_len = conversation_history.len(),
        "chat exchange complete"
    );

    Ok(Json(ChatResponse {
        success: true,
        response,
        conversation_history,
    }))
}
