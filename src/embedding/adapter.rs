//! Query/document embeddings backed by the prediction endpoint

use super::{Embeddings, EmbeddingTransport, GenerateEmbeddingParams};
use crate::error::Result;
use crate::host::HostContext;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;

/// [`Embeddings`] implementation handed to root nodes.
///
/// Every text becomes one request; errors always carry the owning node's
/// identity.
pub struct CustomEmbeddings {
    transport: Arc<EmbeddingTransport>,
    ctx: Arc<dyn HostContext>,
}

impl CustomEmbeddings {
    pub fn new(transport: Arc<EmbeddingTransport>, ctx: Arc<dyn HostContext>) -> Self {
        Self { transport, ctx }
    }
}

#[async_trait]
impl Embeddings for CustomEmbeddings {
    async fn embed_query(&self, text: &str) -> Result<Vec<f64>> {
        let params = GenerateEmbeddingParams { text: text.to_string() };

        self.transport
            .generate_embedding(self.ctx.as_ref(), params)
            .await
            .map_err(|e| e.into_operation(self.ctx.node()).into())
    }

    /// All requests run concurrently; the first failure fails the whole batch.
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        debug!("Embedding {} documents", texts.len());
        try_join_all(texts.iter().map(|text| self.embed_query(text))).await
    }
}
