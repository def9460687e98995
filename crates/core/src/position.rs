//! Cursor to protocol position conversion.

use async_trait::async_trait;
use lsp_types::{Position, TextDocumentIdentifier, TextDocumentPositionParams, Uri};
use std::path::{Path, PathBuf};
use symgather_api::{ApiError, ApiResult, BufNr, OffsetEncoding, ParamsBuilder, WinId};

/// Converts a byte column within `line` to `encoding` units.
///
/// Columns past the end clamp to the line length; columns inside a
/// multi-byte character count up to that character's start.
pub fn encode_character(line: &str, byte_col: usize, encoding: OffsetEncoding) -> u32 {
    let mut units = 0usize;
    for (offset, c) in line.char_indices() {
        if offset + c.len_utf8() > byte_col {
            break;
        }
        units += match encoding {
            OffsetEncoding::Utf8 => c.len_utf8(),
            OffsetEncoding::Utf16 => c.len_utf16(),
            OffsetEncoding::Utf32 => 1,
        };
    }
    units as u32
}

/// Editor state needed to build request parameters.
#[async_trait]
pub trait EditorView: Send + Sync {
    async fn buffer_path(&self, bufnr: BufNr) -> ApiResult<PathBuf>;

    /// Zero based line and byte column of the cursor in `winid`.
    async fn cursor(&self, winid: WinId) -> ApiResult<(u32, usize)>;

    async fn line(&self, bufnr: BufNr, line: u32) -> ApiResult<String>;
}

pub fn path_to_uri(path: &Path) -> ApiResult<Uri> {
    let url = url::Url::from_file_path(path).map_err(|()| {
        ApiError::InvalidArgument(format!("not an absolute path: {}", path.display()))
    })?;
    url.as_str()
        .parse::<Uri>()
        .map_err(|_| ApiError::InvalidArgument(format!("invalid uri {url}")))
}

/// `ParamsBuilder` backed by an [`EditorView`].
pub struct EditorParamsBuilder<V> {
    view: V,
}

impl<V: EditorView> EditorParamsBuilder<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }
}

#[async_trait]
impl<V: EditorView> ParamsBuilder for EditorParamsBuilder<V> {
    async fn text_document_identifier(&self, bufnr: BufNr) -> ApiResult<TextDocumentIdentifier> {
        let path = self.view.buffer_path(bufnr).await?;
        Ok(TextDocumentIdentifier::new(path_to_uri(&path)?))
    }

    async fn position_params(
        &self,
        bufnr: BufNr,
        winid: WinId,
        encoding: OffsetEncoding,
    ) -> ApiResult<TextDocumentPositionParams> {
        let text_document = self.text_document_identifier(bufnr).await?;
        let (line, byte_col) = self.view.cursor(winid).await?;
        let text = self.view.line(bufnr, line).await?;
        let character = encode_character(&text, byte_col, encoding);
        Ok(TextDocumentPositionParams::new(
            text_document,
            Position::new(line, character),
        ))
    }
}
