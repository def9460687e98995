use crate::error::ApiResult;
use crate::models::{BufNr, OffsetEncoding, WinId};
use async_trait::async_trait;
use lsp_types::{TextDocumentIdentifier, TextDocumentPositionParams};
use std::path::Path;

/// Builds protocol parameters from editor state.
#[async_trait]
pub trait ParamsBuilder: Send + Sync {
    async fn text_document_identifier(&self, bufnr: BufNr) -> ApiResult<TextDocumentIdentifier>;

    /// Cursor position of `winid` in `bufnr`, with the character offset
    /// counted in `encoding` units.
    async fn position_params(
        &self,
        bufnr: BufNr,
        winid: WinId,
        encoding: OffsetEncoding,
    ) -> ApiResult<TextDocumentPositionParams>;
}

/// Read access to buffers and files.
#[async_trait]
pub trait FileAccess: Send + Sync {
    async fn is_buffer_loaded(&self, path: &Path) -> ApiResult<bool>;

    async fn read_buffer_lines(&self, path: &Path) -> ApiResult<Vec<String>>;

    async fn read_file(&self, path: &Path) -> ApiResult<Vec<String>>;
}
