//! Embedding service for the remote prediction API

pub mod adapter;
pub mod models;
pub mod transport;

pub use adapter::CustomEmbeddings;
pub use models::{EmbeddingRequest, EmbeddingResponse, GenerateEmbeddingParams};
pub use transport::EmbeddingTransport;

use crate::error::Result;
use async_trait::async_trait;

/// Embeddings interface consumed by vector stores and retrievers
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// Generate the embedding for a single query text
    async fn embed_query(&self, text: &str) -> Result<Vec<f64>>;

    /// Generate embeddings for several documents, in input order
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f64>>>;
}
