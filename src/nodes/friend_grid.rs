//! FriendGrid node.
//!
//! Declares a create-contact operation but makes no API call yet: the
//! input batch is returned unchanged.

use crate::error::Result;
use crate::host::{
    ConnectionType, CredentialRequirement, ExecutableNode, HostContext, NodeDescription, NodeType, WorkItem,
};
use async_trait::async_trait;

pub struct FriendGridNode {
    description: NodeDescription,
}

impl FriendGridNode {
    pub fn new() -> Self {
        Self {
            description: NodeDescription {
                display_name: "FriendGrid".to_string(),
                name: "friendGrid".to_string(),
                version: 1,
                description: "Consume SendGrid API".to_string(),
                inputs: vec![ConnectionType::Main],
                outputs: vec![ConnectionType::Main],
                credentials: vec![CredentialRequirement {
                    name: "friendGridApi".to_string(),
                    required: true,
                }],
            },
        }
    }
}

impl Default for FriendGridNode {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeType for FriendGridNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }
}

#[async_trait]
impl ExecutableNode for FriendGridNode {
    async fn execute(&self, ctx: &dyn HostContext) -> Result<Vec<Vec<WorkItem>>> {
        Ok(vec![ctx.input_data().to_vec()])
    }
}
