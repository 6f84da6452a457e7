use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Invocation(String),

    #[error("generation service response error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("HTTP client config error: {0}")]
    Config(String),
}
