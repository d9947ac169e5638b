//! Capability surface the workflow host injects into node calls

pub mod credentials;
pub mod item;
pub mod node;
pub mod standalone;

#[cfg(test)]
pub(crate) mod testing;

pub use credentials::{
    test_credential, CredentialData, CredentialProperty, CredentialStore, CredentialTestRequest,
    CredentialType, GenericAuth,
};
pub use item::{PairedItem, WorkItem};
pub use node::{
    ConnectionType, CredentialRequirement, ExecutableNode, NodeDescription, NodeIdentity, NodeType,
    SupplyData, SupplyDataNode,
};
pub use standalone::StandaloneContext;

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Outbound request handed to the host HTTP helper
#[derive(Debug, Clone)]
pub struct HttpRequestOptions {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,

    /// Credential type whose generic authentication the host applies
    pub authenticate_with: Option<String>,
}

impl HttpRequestOptions {
    /// JSON POST to `url`
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
            authenticate_with: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn authenticate_with(mut self, credential_type: impl Into<String>) -> Self {
        self.authenticate_with = Some(credential_type.into());
        self
    }
}

/// Per-call context supplied by the host.
///
/// Nodes only reach the outside world through this trait: input items,
/// stored credentials, the HTTP helper, their own identity and the
/// continue-on-fail flag.
#[async_trait]
pub trait HostContext: Send + Sync {
    /// Items flowing into the node
    fn input_data(&self) -> &[WorkItem];

    /// Look up a stored credential by type name
    async fn credentials(&self, name: &str) -> Result<Option<CredentialData>>;

    /// Perform an HTTP request, returning the decoded response body
    async fn http_request(&self, options: HttpRequestOptions) -> Result<Value>;

    /// Identity of the node being executed
    fn node(&self) -> &NodeIdentity;

    /// Whether failures should be captured into output items
    fn continue_on_fail(&self) -> bool;
}
