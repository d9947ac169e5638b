//! Node contract between the host and node implementations

use super::{HostContext, WorkItem};
use crate::embedding::Embeddings;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Identity used to attribute errors to a node instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeIdentity {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: u32,
}

impl NodeIdentity {
    pub fn new(name: impl Into<String>, node_type: impl Into<String>, type_version: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            node_type: node_type.into(),
            type_version,
        }
    }

    /// Identity for an instance of the described node type
    pub fn for_description(description: &NodeDescription) -> Self {
        Self::new(&description.display_name, &description.name, description.version)
    }
}

/// Kind of connection a node exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "ai_embedding")]
    AiEmbedding,
}

/// Credential a node needs the host to provide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

/// Static description of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub version: u32,
    pub description: String,
    pub inputs: Vec<ConnectionType>,
    pub outputs: Vec<ConnectionType>,
    pub credentials: Vec<CredentialRequirement>,
}

/// Object a sub-node hands to its root node
pub struct SupplyData {
    pub response: Arc<dyn Embeddings>,
}

impl std::fmt::Debug for SupplyData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupplyData").finish_non_exhaustive()
    }
}

/// Any node known to the host
pub trait NodeType: Send + Sync {
    fn description(&self) -> &NodeDescription;
}

/// Node driven through the main input/output connections
#[async_trait]
pub trait ExecutableNode: NodeType {
    /// Process the input batch, returning one item list per output
    async fn execute(&self, ctx: &dyn HostContext) -> Result<Vec<Vec<WorkItem>>>;
}

/// Sub-node that supplies a capability object to a root node
#[async_trait]
pub trait SupplyDataNode: NodeType {
    async fn supply_data(&self, ctx: Arc<dyn HostContext>, item_index: usize) -> Result<SupplyData>;
}
