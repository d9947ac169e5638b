//! Recording host context for unit tests

use super::{CredentialData, HostContext, HttpRequestOptions, NodeIdentity, WorkItem};
use crate::error::{HostError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Responder = Box<dyn Fn(&HttpRequestOptions) -> (Duration, std::result::Result<Value, u16>) + Send + Sync>;

/// Host context that answers HTTP calls from a closure and counts them
pub(crate) struct MockContext {
    pub node: NodeIdentity,
    pub items: Vec<WorkItem>,
    pub credentials: Option<CredentialData>,
    pub continue_on_fail: bool,
    responder: Responder,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequestOptions>>,
}

impl MockContext {
    /// Context whose HTTP helper always returns `response`
    pub fn responding(response: Value) -> Self {
        Self::with_responder(move |_| (Duration::ZERO, Ok(response.clone())))
    }

    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequestOptions) -> (Duration, std::result::Result<Value, u16>) + Send + Sync + 'static,
    {
        Self {
            node: NodeIdentity::new("Custom Embedder", "customEmbedder", 1),
            items: Vec::new(),
            credentials: Some(CredentialData::new().with_field("apiKey", "abc")),
            continue_on_fail: false,
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_items(mut self, items: Vec<WorkItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_credentials(mut self, credentials: Option<CredentialData>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_continue_on_fail(mut self) -> Self {
        self.continue_on_fail = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequestOptions> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostContext for MockContext {
    fn input_data(&self) -> &[WorkItem] {
        &self.items
    }

    async fn credentials(&self, _name: &str) -> Result<Option<CredentialData>> {
        Ok(self.credentials.clone())
    }

    async fn http_request(&self, options: HttpRequestOptions) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, outcome) = (self.responder)(&options);
        self.requests.lock().unwrap().push(options);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        outcome.map_err(|status| {
            HostError::Status {
                status,
                body: "mock failure".to_string(),
            }
            .into()
        })
    }

    fn node(&self) -> &NodeIdentity {
        &self.node
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}
