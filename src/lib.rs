//! Custom Embedder Nodes - workflow nodes for a remote text-embedding API
//!
//! The crate provides two nodes for a workflow host:
//!
//! - **Custom Embedder**: sends text to a remote prediction endpoint and
//!   exposes the result through an [`Embeddings`](embedding::Embeddings)
//!   interface (`embed_query` / `embed_documents`), or embeds the first
//!   item of a batch directly.
//! - **FriendGrid**: a contact node that currently passes its input through.
//!
//! The host is modelled by the [`HostContext`](host::HostContext) trait.
//! [`StandaloneContext`](host::StandaloneContext) implements it with
//! `reqwest` and an in-memory credential store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use custom_embedder_nodes::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::default_config();
//!     let store = CredentialStore::new().with_credential(
//!         custom_embedder_api(),
//!         CredentialData::new().with_field("apiKey", "my-key"),
//!     );
//!
//!     let node = CustomEmbedderNode::new(config.embedder.clone());
//!     let identity = NodeIdentity::for_description(node.description());
//!     let ctx = StandaloneContext::new(identity, Arc::new(store), &config.host)?;
//!
//!     let supplied = node.supply_data(Arc::new(ctx), 0).await?;
//!     let vector = supplied.response.embed_query("red dress").await?;
//!     println!("{} dimensions", vector.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod embedding;
pub mod error;
pub mod host;
pub mod nodes;
pub mod observability;

pub use config::Config;
pub use error::{NodeError, NodeOperationError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::credentials::custom_embedder_api;
    pub use crate::embedding::{CustomEmbeddings, Embeddings, EmbeddingTransport};
    pub use crate::error::{NodeError, NodeOperationError, OperationErrorKind, Result};
    pub use crate::host::{
        CredentialData, CredentialStore, ExecutableNode, HostContext, NodeIdentity, NodeType,
        StandaloneContext, SupplyDataNode, WorkItem,
    };
    pub use crate::nodes::{CustomEmbedderNode, FriendGridNode};
}
