//! Cohere `/v1/generate` request and response schema.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "command-xlarge";
pub const DEFAULT_MAX_TOKENS: u32 = 250;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.75;

/// Body sent to the generation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    /// Caller prompt, forwarded verbatim.
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Top-k sampling; 0 disables it.
    pub k: u32,
    /// Nucleus sampling.
    pub p: f64,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            k: 0,
            p: DEFAULT_TOP_P,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Generation {
    pub id: Option<String>,
    pub text: Option<String>,
}

/// One element of the `generations` list. Elements that are not a
/// generation object (`null`, scalars, mistyped text) are kept as-is
/// instead of failing the whole response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GenerationEntry {
    Generation(Generation),
    Unrecognized(serde_json::Value),
}

impl GenerationEntry {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generation(generation) => generation.text.as_deref(),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Response of the generation endpoint.
///
/// `generations` is optional so a body without it still decodes and can be
/// classified as an upstream failure instead of a decode error.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub id: Option<String>,
    pub generations: Option<Vec<GenerationEntry>>,
}

impl GenerateResponse {
    /// Head of the `generations` list; `None` when the list is absent or empty.
    pub fn first_generation(&self) -> Option<&GenerationEntry> {
        self.generations.as_ref().and_then(|g| g.first())
    }
}
