//! Error types for the embedder nodes

use crate::host::NodeIdentity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for node operations
pub type Result<T> = std::result::Result<T, NodeError>;

/// Main error type for the embedder nodes
#[derive(Error, Debug)]
pub enum NodeError {
    #[error(transparent)]
    Operation(#[from] NodeOperationError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by the host capability surface (credential lookup, HTTP helper)
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Credential error: {0}")]
    Credential(String),
}

/// Category of a structured operational error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationErrorKind {
    MissingCredential,
    MissingInput,
    InvalidResponseShape,
    TransportFailure,
    Internal,
}

/// Operational error attributed to the node that raised it
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct NodeOperationError {
    pub node: NodeIdentity,
    pub kind: OperationErrorKind,
    pub message: String,
}

impl NodeOperationError {
    pub fn new(node: &NodeIdentity, kind: OperationErrorKind, message: impl Into<String>) -> Self {
        Self {
            node: node.clone(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing_credential(node: &NodeIdentity) -> Self {
        Self::new(
            node,
            OperationErrorKind::MissingCredential,
            "API Key is required. Please configure Custom Embedder API credentials.",
        )
    }

    pub fn missing_input(node: &NodeIdentity, message: impl Into<String>) -> Self {
        Self::new(node, OperationErrorKind::MissingInput, message)
    }

    pub fn invalid_response(node: &NodeIdentity) -> Self {
        Self::new(
            node,
            OperationErrorKind::InvalidResponseShape,
            "Invalid response format: embedding array not found",
        )
    }
}

impl NodeError {
    /// Attach node context to this error.
    ///
    /// An error that already carries node context is returned as-is so it
    /// is never wrapped twice.
    pub fn into_operation(self, node: &NodeIdentity) -> NodeOperationError {
        match self {
            NodeError::Operation(err) => err,
            NodeError::Host(err) => {
                NodeOperationError::new(node, OperationErrorKind::TransportFailure, err.to_string())
            }
            other => NodeOperationError::new(node, OperationErrorKind::Internal, other.to_string()),
        }
    }

    /// Kind of the operational error, if this error already carries node context
    pub fn operation_kind(&self) -> Option<OperationErrorKind> {
        match self {
            NodeError::Operation(err) => Some(err.kind),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for NodeError {
    fn from(err: config::ConfigError) -> Self {
        NodeError::Config(err.to_string())
    }
}
