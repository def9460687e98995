use super::client::{BufNr, ItemContext};
use super::symbol::Symbol;
use lsp_types::{Location, Range};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where selecting a record should jump to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Target {
    /// Position inside the buffer the request was made from.
    Buffer { bufnr: BufNr, range: Range },
    /// Position inside a file on disk.
    File { path: PathBuf, range: Range },
}

impl Target {
    pub fn range(&self) -> &Range {
        match self {
            Target::Buffer { range, .. } | Target::File { range, .. } => range,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(flatten)]
    pub target: Target,
    pub context: ItemContext,
}

/// Raw protocol value a record was built from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RecordData {
    Symbol(Symbol),
    Location(Location),
}

/// Flat, display ready output unit handed to the consumer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub word: String,
    /// Number of ancestors above this record.
    pub level: usize,
    /// Names of the ancestors, outermost first. Always `level` long.
    pub tree_path: Vec<String>,
    pub is_tree: bool,
    pub is_expanded: bool,
    pub action: ActionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_text: Option<String>,
    pub data: RecordData,
}

impl Record {
    pub fn range(&self) -> &Range {
        self.action.target.range()
    }

    pub fn context(&self) -> &ItemContext {
        &self.action.context
    }
}
