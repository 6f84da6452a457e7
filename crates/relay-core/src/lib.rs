//! relay-core
//!
//! Pure conversation types and the prompt compiler.
//! No I/O and no async: every operation here is a plain function of its inputs.

pub mod error;
pub mod models;
pub mod validate;

pub use error::CoreError;
pub use models::generation::Generation;
pub use models::history::ConversationHistory;
pub use models::turn::{Role, Turn, TurnInput};
