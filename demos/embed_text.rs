//! Embed one text with the Custom Embedder node outside a workflow engine.
//!
//! Configuration comes from the file named by `CONFIG_PATH` (with
//! `CUSTOM_EMBEDDER__*` overrides) or from defaults. The API key is read
//! from `credentials.api_key` or the `CUSTOM_EMBEDDER_API_KEY` variable.
//!
//! ```sh
//! CUSTOM_EMBEDDER_API_KEY=... cargo run --example embed_text -- "red dress"
//! ```

use anyhow::Context;
use custom_embedder_nodes::{
    config::Config,
    credentials::custom_embedder_api,
    host::{test_credential, CredentialData, CredentialStore, ExecutableNode, NodeIdentity, NodeType, StandaloneContext, WorkItem},
    nodes::CustomEmbedderNode,
    observability::init_observability,
};
use secrecy::ExposeSecret;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => Config::from_file_with_env(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        Err(_) => Config::default_config(),
    };

    init_observability(&config.logging.level, &config.logging.format);

    let api_key = config
        .credentials
        .api_key
        .as_ref()
        .map(|key| key.expose_secret().clone())
        .or_else(|| std::env::var("CUSTOM_EMBEDDER_API_KEY").ok())
        .unwrap_or_default();

    let text = std::env::args().nth(1).unwrap_or_else(|| "red dress".to_string());

    let store = CredentialStore::new()
        .with_credential(custom_embedder_api(), CredentialData::new().with_field("apiKey", api_key));

    let node = CustomEmbedderNode::new(config.embedder.clone());
    let identity = NodeIdentity::for_description(node.description());
    let ctx = StandaloneContext::new(identity, Arc::new(store), &config.host)?
        .with_items(vec![WorkItem::from_value(json!({ "text": text }))]);

    if std::env::var("CHECK_CREDENTIAL").is_ok() {
        test_credential(&ctx, &custom_embedder_api()).await?;
        info!("Credential check passed");
    }

    let output = node.execute(&ctx).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
