use crate::config::{DocumentSymbolConfig, GatherSettings};
use crate::dispatch::{Batch, Collaborators, Source};
use crate::error::Result;
use crate::flatten::{Ancestry, FlattenOptions, flatten_symbols};
use crate::normalize::normalize_symbols;
use crate::ordering::sort_records;
use async_trait::async_trait;
use lsp_types::DocumentSymbolParams;
use serde_json::Value;
use symgather_api::{BufferContext, Client, ItemContext, Method};

/// Outline of the current buffer.
pub struct DocumentSymbolSource {
    options: FlattenOptions,
    client_filter: Option<String>,
}

impl DocumentSymbolSource {
    pub fn new(config: DocumentSymbolConfig, settings: &GatherSettings) -> Self {
        Self {
            options: FlattenOptions {
                display_container_name: config.display_container_name,
                symbol_name_width: config.symbol_name_width,
            },
            client_filter: settings.client_filter(&config.client_name),
        }
    }
}

#[async_trait]
impl Source for DocumentSymbolSource {
    fn method(&self) -> Method {
        Method::DocumentSymbol
    }

    fn tag(&self) -> &'static str {
        "source-lsp_documentSymbol"
    }

    fn client_filter(&self) -> Option<&str> {
        self.client_filter.as_deref()
    }

    async fn params(
        &self,
        env: &Collaborators,
        _client: &Client,
        buffer: &BufferContext,
    ) -> Result<Value> {
        let params = DocumentSymbolParams {
            text_document: env.params.text_document_identifier(buffer.bufnr).await?,
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
        };
        Ok(serde_json::to_value(params)?)
    }

    async fn process(
        &self,
        env: &Collaborators,
        context: &ItemContext,
        _buffer: &BufferContext,
        response: Value,
    ) -> Result<Batch> {
        let symbols = normalize_symbols(response);
        let mut records = flatten_symbols(
            &symbols,
            &Ancestry::root(),
            context,
            &self.options,
            env.validity.as_ref(),
        );
        sort_records(&mut records);
        Ok(records)
    }
}
