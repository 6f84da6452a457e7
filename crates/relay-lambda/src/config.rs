use std::env;
use std::str::FromStr;
use std::time::Duration;

use eyre::WrapErr;
use relay_generate::SamplingParams;

const DEFAULT_GENERATION_URL: &str = "http://127.0.0.1:8000/generate";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub generation_url: String,
    pub timeout: Duration,
    pub sampling: SamplingParams,
}

impl RelayConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    /// Unset variables take their defaults; set but unparseable ones are errors,
    /// as is a zero timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = SamplingParams::default();

        let generation_url = lookup("GENERATION_URL")
            .map(|raw| raw.trim().to_string())
            .unwrap_or_else(|| DEFAULT_GENERATION_URL.to_string());
        if generation_url.is_empty() {
            eyre::bail!("GENERATION_URL must not be empty");
        }

        let timeout_secs = parse_var(&lookup, "GENERATION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            eyre::bail!("GENERATION_TIMEOUT_SECS must be at least 1");
        }

        let sampling = SamplingParams {
            max_new_tokens: parse_var(&lookup, "GENERATION_MAX_NEW_TOKENS", defaults.max_new_tokens)?,
            do_sample: parse_var(&lookup, "GENERATION_DO_SAMPLE", defaults.do_sample)?,
            temperature: parse_var(&lookup, "GENERATION_TEMPERATURE", defaults.temperature)?,
            top_p: parse_var(&lookup, "GENERATION_TOP_P", defaults.top_p)?,
        };

        Ok(Self {
            generation_url,
            timeout: Duration::from_secs(timeout_secs),
            sampling,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
