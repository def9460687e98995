use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor buffer number.
pub type BufNr = u32;

/// Editor window id, used to locate the cursor.
pub type WinId = u32;

/// Unit in which a server counts the `character` field of a position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[default]
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "utf-32")]
    Utf32,
}

/// Handle to one live language server connection.
///
/// The core never looks inside beyond the encoding; `id` and `name` are
/// whatever the session layer uses to route follow-up requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub offset_encoding: OffsetEncoding,
}

impl Client {
    pub fn new(id: i64, name: impl Into<String>, offset_encoding: OffsetEncoding) -> Self {
        Self {
            id,
            name: name.into(),
            offset_encoding,
        }
    }
}

/// Request kinds this crate knows how to aggregate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    #[serde(rename = "textDocument/documentSymbol")]
    DocumentSymbol,
    #[serde(rename = "textDocument/references")]
    References,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::DocumentSymbol => "textDocument/documentSymbol",
            Method::References => "textDocument/references",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a query was triggered from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BufferContext {
    pub bufnr: BufNr,
    pub winid: WinId,
    /// Working directory used to shorten displayed paths.
    pub cwd: std::path::PathBuf,
}

/// Request context attached verbatim to every record of a response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemContext {
    pub client: Client,
    pub bufnr: BufNr,
    pub method: Method,
}
