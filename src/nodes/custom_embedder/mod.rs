//! Custom Embedder node: supplies embeddings from the remote prediction API

pub mod generate;

use crate::config::EmbedderConfig;
use crate::embedding::{CustomEmbeddings, EmbeddingTransport};
use crate::error::Result;
use crate::host::{
    ConnectionType, CredentialRequirement, ExecutableNode, HostContext, NodeDescription, NodeType,
    SupplyData, SupplyDataNode, WorkItem,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub struct CustomEmbedderNode {
    description: NodeDescription,
    transport: Arc<EmbeddingTransport>,
}

impl CustomEmbedderNode {
    pub fn new(config: EmbedderConfig) -> Self {
        let description = NodeDescription {
            display_name: "Custom Embedder".to_string(),
            name: "customEmbedder".to_string(),
            version: 1,
            description: "Custom Embedder".to_string(),
            inputs: Vec::new(),
            outputs: vec![ConnectionType::AiEmbedding],
            credentials: vec![CredentialRequirement {
                name: config.credential_name.clone(),
                required: true,
            }],
        };

        Self {
            description,
            transport: Arc::new(EmbeddingTransport::new(config)),
        }
    }
}

impl Default for CustomEmbedderNode {
    fn default() -> Self {
        Self::new(EmbedderConfig::default())
    }
}

impl NodeType for CustomEmbedderNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }
}

#[async_trait]
impl SupplyDataNode for CustomEmbedderNode {
    async fn supply_data(&self, ctx: Arc<dyn HostContext>, item_index: usize) -> Result<SupplyData> {
        debug!("Supplying embeddings for item {}", item_index);

        Ok(SupplyData {
            response: Arc::new(CustomEmbeddings::new(self.transport.clone(), ctx)),
        })
    }
}

#[async_trait]
impl ExecutableNode for CustomEmbedderNode {
    async fn execute(&self, ctx: &dyn HostContext) -> Result<Vec<Vec<WorkItem>>> {
        generate::execute(ctx, &self.transport).await
    }
}
