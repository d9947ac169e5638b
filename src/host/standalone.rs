//! Self-contained host context backed by reqwest and an in-memory credential store

use super::{CredentialData, CredentialStore, HostContext, HttpRequestOptions, NodeIdentity, WorkItem};
use crate::config::HostConfig;
use crate::error::{HostError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Host context for running nodes outside a workflow engine
pub struct StandaloneContext {
    node: NodeIdentity,
    items: Vec<WorkItem>,
    credentials: Arc<CredentialStore>,
    http_client: Client,
    continue_on_fail: bool,
}

impl StandaloneContext {
    /// Create a context with its own HTTP client
    pub fn new(node: NodeIdentity, credentials: Arc<CredentialStore>, config: &HostConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(HostError::Network)?;

        info!("Initialized standalone host for node '{}'", node.name);

        Ok(Self::with_http_client(node, credentials, http_client)
            .with_continue_on_fail(config.continue_on_fail))
    }

    /// Create a context around an existing HTTP client
    pub fn with_http_client(node: NodeIdentity, credentials: Arc<CredentialStore>, http_client: Client) -> Self {
        Self {
            node,
            items: Vec::new(),
            credentials,
            http_client,
            continue_on_fail: false,
        }
    }

    pub fn with_items(mut self, items: Vec<WorkItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }

    fn build_headers(&self, options: &HttpRequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth_headers = match &options.authenticate_with {
            Some(name) => self.credentials.auth_headers(name)?,
            None => Vec::new(),
        };

        // Authentication headers are applied last and replace explicit headers of the same name
        for (name, value) in options.headers.iter().chain(auth_headers.iter()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HostError::InvalidRequest(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HostError::InvalidRequest(format!("Invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl HostContext for StandaloneContext {
    fn input_data(&self) -> &[WorkItem] {
        &self.items
    }

    async fn credentials(&self, name: &str) -> Result<Option<CredentialData>> {
        Ok(self.credentials.data(name).cloned())
    }

    async fn http_request(&self, options: HttpRequestOptions) -> Result<Value> {
        let headers = self.build_headers(&options)?;

        debug!("Sending {} request to {}", options.method, options.url);

        let mut request = self
            .http_client
            .request(options.method.clone(), &options.url)
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", options.url, e);
            HostError::Network(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(HostError::Network)?;

        if !status.is_success() {
            error!("Request to {} failed with status {}", options.url, status);
            return Err(HostError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        debug!("Request to {} succeeded with status {}", options.url, status);

        // Bodies that are not JSON are handed back as a plain string
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    fn node(&self) -> &NodeIdentity {
        &self.node
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}
