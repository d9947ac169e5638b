//! Generate operation: embed the text of the first input item

use crate::embedding::{EmbeddingTransport, GenerateEmbeddingParams};
use crate::error::{NodeOperationError, Result};
use crate::host::{HostContext, WorkItem};
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

/// Fields searched for input text, in priority order
pub const TEXT_FIELDS: [&str; 3] = ["text", "content", "data"];

const NO_INPUT_MESSAGE: &str =
    "No input data found. This node must be connected to a root node that provides text data.";
const NO_TEXT_MESSAGE: &str =
    "Text is required. Please ensure the root node provides text data in \"text\", \"content\", or \"data\" field.";

/// Run the generate operation.
///
/// Only the first input item is embedded: the node is driven by a root
/// node that supplies one text per invocation. The output holds that item
/// with an added `embedding` field and its pairing preserved.
pub async fn execute(ctx: &dyn HostContext, transport: &EmbeddingTransport) -> Result<Vec<Vec<WorkItem>>> {
    let item = match generate(ctx, transport).await {
        Ok(item) => item,
        Err(e) => {
            let err = e.into_operation(ctx.node());
            if !ctx.continue_on_fail() {
                error!("Generate operation failed: {}", err);
                return Err(err.into());
            }
            warn!("Generate operation failed, continuing: {}", err);
            WorkItem::from_error(err)
        }
    };

    Ok(vec![vec![item]])
}

async fn generate(ctx: &dyn HostContext, transport: &EmbeddingTransport) -> Result<WorkItem> {
    let items = ctx.input_data();
    let item = items
        .first()
        .ok_or_else(|| NodeOperationError::missing_input(ctx.node(), NO_INPUT_MESSAGE))?;

    if items.len() > 1 {
        debug!("Ignoring {} input items after the first", items.len() - 1);
    }

    let text = extract_text(&item.json)
        .ok_or_else(|| NodeOperationError::missing_input(ctx.node(), NO_TEXT_MESSAGE))?;

    let embedding = transport
        .generate_embedding(ctx, GenerateEmbeddingParams { text })
        .await?;

    let mut json = item.json.clone();
    json.insert("embedding".to_string(), Value::from(embedding));

    Ok(WorkItem {
        json,
        paired_item: item.paired_item,
        error: None,
    })
}

/// Pick the input text from an item payload.
///
/// The first field in [`TEXT_FIELDS`] holding a non-empty value wins, so an
/// empty `text` falls through to `content`. A selected value that is blank
/// after trimming yields `None`. Non-string values are rendered as JSON.
pub fn extract_text(json: &Map<String, Value>) -> Option<String> {
    let value = TEXT_FIELDS
        .iter()
        .filter_map(|field| json.get(*field))
        .find(|value| has_content(value))?;

    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
