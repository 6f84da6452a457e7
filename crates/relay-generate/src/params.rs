use serde::{Deserialize, Serialize};

/// Sampling settings sent alongside every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 512,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Body of a generation request.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub params: SamplingParams,
}

/// Body of a successful generation response.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub generated_text: Option<String>,
}
