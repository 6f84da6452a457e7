//! relay-generate
//!
//! Client for the remote text-generation service that continues a compiled prompt.

pub mod client;
pub mod error;
pub mod params;

pub use client::{GenerationClient, TextGenerator};
pub use error::GenerateError;
pub use params::SamplingParams;
