//! Work items exchanged with the host

use crate::error::NodeOperationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference back to the input item an output item was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<usize>,
}

/// A single record in a host batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub json: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<PairedItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<NodeOperationError>,
}

impl WorkItem {
    pub fn new(json: Map<String, Value>) -> Self {
        Self {
            json,
            paired_item: None,
            error: None,
        }
    }

    /// Build an item from a JSON object; non-object values yield an empty payload
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(json) => Self::new(json),
            _ => Self::default(),
        }
    }

    pub fn with_paired_item(mut self, paired_item: PairedItem) -> Self {
        self.paired_item = Some(paired_item);
        self
    }

    /// Item carrying only an error, emitted when continue-on-fail is set
    pub fn from_error(error: NodeOperationError) -> Self {
        Self {
            json: Map::new(),
            paired_item: None,
            error: Some(error),
        }
    }
}
