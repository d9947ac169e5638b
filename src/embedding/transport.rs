//! HTTP transport for the prediction endpoint

use super::models::{EmbeddingRequest, EmbeddingResponse, GenerateEmbeddingParams};
use crate::config::EmbedderConfig;
use crate::error::{NodeError, NodeOperationError, Result};
use crate::host::{HostContext, HttpRequestOptions};
use secrecy::ExposeSecret;
use tracing::{debug, error, warn};

/// Issues one embedding request per call through the host HTTP helper
#[derive(Debug, Clone)]
pub struct EmbeddingTransport {
    config: EmbedderConfig,
}

impl EmbeddingTransport {
    pub fn new(config: EmbedderConfig) -> Self {
        Self { config }
    }

    /// Generate an embedding for `params.text`.
    ///
    /// Blank text and a missing API key fail before any request is sent.
    /// Host failures are returned without node context so callers can
    /// attach their own.
    pub async fn generate_embedding(
        &self,
        ctx: &dyn HostContext,
        params: GenerateEmbeddingParams,
    ) -> Result<Vec<f64>> {
        let GenerateEmbeddingParams { text } = params;

        if text.trim().is_empty() {
            warn!("Embedding request rejected: empty text");
            return Err(NodeOperationError::missing_input(ctx.node(), "Text is required to generate an embedding.").into());
        }

        let credentials = ctx.credentials(&self.config.credential_name).await?;
        let api_key = match credentials.as_ref().and_then(|data| data.non_empty("apiKey")) {
            Some(key) => key.expose_secret().clone(),
            None => {
                warn!("Embedding request rejected: API key not configured");
                return Err(NodeOperationError::missing_credential(ctx.node()).into());
            }
        };

        let body = serde_json::to_value(EmbeddingRequest::new(text))
            .map_err(|e| NodeError::Internal(format!("Failed to encode request: {}", e)))?;
        // The generic credential authentication sets X-API-KEY as well; the
        // explicit header is kept so the request also works without it.
        let options = HttpRequestOptions::post_json(&self.config.api_url, body)
            .header("X-API-KEY", api_key)
            .authenticate_with(&self.config.credential_name);

        debug!("Requesting embedding from {}", self.config.api_url);
        let body = ctx.http_request(options).await?;

        match EmbeddingResponse::from_value(&body) {
            Some(response) => {
                debug!("Received embedding with {} dimensions", response.embedding.len());
                Ok(response.embedding)
            }
            None => {
                error!("Embedding response did not contain an embedding array");
                Err(NodeOperationError::invalid_response(ctx.node()).into())
            }
        }
    }
}
