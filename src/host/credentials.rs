//! Credential types, stored credential data and generic header authentication

use super::{HostContext, HttpRequestOptions};
use crate::error::{HostError, NodeError, Result};
use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Secret field values of one stored credential
#[derive(Debug, Clone, Default)]
pub struct CredentialData {
    fields: HashMap<String, Secret<String>>,
}

impl CredentialData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Secret::new(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Secret<String>> {
        self.fields.get(name)
    }

    /// Field value, treating a missing or empty field as absent
    pub fn non_empty(&self, name: &str) -> Option<&Secret<String>> {
        self.get(name).filter(|value| !value.expose_secret().is_empty())
    }
}

/// Field declared by a credential type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialProperty {
    pub display_name: String,
    pub name: String,
    pub password: bool,
}

/// Header authentication rendered from credential fields.
///
/// Header values are either literals or templates of the form
/// `={{$credentials.<field>}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericAuth {
    pub headers: Vec<(String, String)>,
}

impl GenericAuth {
    pub fn header(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.headers.push((name.into(), template.into()));
        self
    }

    /// Render every header against the given credential data
    pub fn render(&self, data: &CredentialData) -> Result<Vec<(String, String)>> {
        self.headers
            .iter()
            .map(|(name, template)| -> Result<(String, String)> {
                Ok((name.clone(), render_template(template, data)?))
            })
            .collect()
    }
}

fn render_template(template: &str, data: &CredentialData) -> Result<String> {
    let Some(expression) = template
        .strip_prefix("={{")
        .and_then(|rest| rest.strip_suffix("}}"))
    else {
        return Ok(template.to_string());
    };

    let field = expression
        .trim()
        .strip_prefix("$credentials.")
        .ok_or_else(|| HostError::Credential(format!("Unsupported expression: {}", template)))?;

    data.get(field)
        .map(|value| value.expose_secret().clone())
        .ok_or_else(|| HostError::Credential(format!("Credential field '{}' is not set", field)).into())
}

/// Request the host issues to check that a credential works
#[derive(Debug, Clone)]
pub struct CredentialTestRequest {
    pub base_url: String,
    pub url: String,
    pub method: Method,
    pub body: Value,
}

/// A named credential type known to the host
#[derive(Debug, Clone)]
pub struct CredentialType {
    pub name: String,
    pub display_name: String,
    pub properties: Vec<CredentialProperty>,
    pub authenticate: GenericAuth,
    pub test: Option<CredentialTestRequest>,
}

#[derive(Debug, Clone)]
struct StoredCredential {
    credential_type: CredentialType,
    data: CredentialData,
}

/// In-memory credential store keyed by credential type name
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, StoredCredential>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, credential_type: CredentialType, data: CredentialData) {
        debug!("Storing credential '{}'", credential_type.name);
        self.entries.insert(
            credential_type.name.clone(),
            StoredCredential { credential_type, data },
        );
    }

    pub fn with_credential(mut self, credential_type: CredentialType, data: CredentialData) -> Self {
        self.insert(credential_type, data);
        self
    }

    pub fn data(&self, name: &str) -> Option<&CredentialData> {
        self.entries.get(name).map(|entry| &entry.data)
    }

    pub fn credential_type(&self, name: &str) -> Option<&CredentialType> {
        self.entries.get(name).map(|entry| &entry.credential_type)
    }

    /// Headers produced by the generic authentication of a stored credential
    pub fn auth_headers(&self, name: &str) -> Result<Vec<(String, String)>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| HostError::Credential(format!("No credential stored for '{}'", name)))?;

        entry.credential_type.authenticate.render(&entry.data)
    }
}

/// Issue the test request declared by a credential type
pub async fn test_credential(ctx: &dyn HostContext, credential_type: &CredentialType) -> Result<()> {
    let test = credential_type.test.as_ref().ok_or_else(|| {
        NodeError::Internal(format!(
            "Credential type '{}' does not declare a test request",
            credential_type.name
        ))
    })?;

    let url = format!("{}/{}", test.base_url.trim_end_matches('/'), test.url.trim_start_matches('/'));
    let options = HttpRequestOptions {
        method: test.method.clone(),
        url,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: Some(test.body.clone()),
        authenticate_with: Some(credential_type.name.clone()),
    };

    match ctx.http_request(options).await {
        Ok(_) => {
            info!("Credential '{}' test succeeded", credential_type.name);
            Ok(())
        }
        Err(e) => {
            warn!("Credential '{}' test failed: {}", credential_type.name, e);
            Err(e)
        }
    }
}
