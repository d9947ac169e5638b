//! Data models for embedding requests and responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body sent to the prediction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Input text to embed
    pub text: String,
}

impl EmbeddingRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Parameters of a single embedding call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateEmbeddingParams {
    pub text: String,
}

/// Validated response from the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Embedding vector
    pub embedding: Vec<f64>,
}

impl EmbeddingResponse {
    /// Extract the embedding from a raw response body.
    ///
    /// Returns `None` unless `embedding` is present and is an array of numbers.
    /// Length is not checked.
    pub fn from_value(body: &Value) -> Option<Self> {
        let values = body.get("embedding")?.as_array()?;
        let embedding = values.iter().map(Value::as_f64).collect::<Option<Vec<f64>>>()?;

        Some(Self { embedding })
    }
}
