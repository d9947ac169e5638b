//! Credential types declared by the nodes in this crate

use crate::config::DEFAULT_CREDENTIAL_NAME;
use crate::host::{CredentialProperty, CredentialTestRequest, CredentialType, GenericAuth};
use reqwest::Method;
use serde_json::json;

/// Base URL of the embeddings API
pub const EMBEDDINGS_API_BASE_URL: &str = "https://embeddings-api-452977999990.us-west1.run.app";

/// Credential holding the embeddings API key
pub fn custom_embedder_api() -> CredentialType {
    custom_embedder_api_with_base_url(EMBEDDINGS_API_BASE_URL)
}

/// Same credential type, with its test request aimed at another server
pub fn custom_embedder_api_with_base_url(base_url: impl Into<String>) -> CredentialType {
    CredentialType {
        name: DEFAULT_CREDENTIAL_NAME.to_string(),
        display_name: "Custom Embedder API".to_string(),
        properties: vec![CredentialProperty {
            display_name: "API Key".to_string(),
            name: "apiKey".to_string(),
            password: true,
        }],
        authenticate: GenericAuth::default().header("X-API-KEY", "={{$credentials.apiKey}}"),
        test: Some(CredentialTestRequest {
            base_url: base_url.into(),
            url: "/models/fashionclip/predict".to_string(),
            method: Method::POST,
            body: json!({"text": "test"}),
        }),
    }
}
