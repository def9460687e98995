use crate::config::{GatherSettings, ReferencesConfig};
use crate::dispatch::{Batch, Collaborators, Source};
use crate::enrich::{EnrichOptions, enrich_locations};
use crate::error::Result;
use crate::normalize::normalize_locations;
use crate::ordering::sort_records;
use async_trait::async_trait;
use lsp_types::{ReferenceContext, ReferenceParams};
use serde_json::Value;
use symgather_api::{BufferContext, Client, ItemContext, Method};

/// References to the symbol under the cursor.
pub struct ReferencesSource {
    config: ReferencesConfig,
    client_filter: Option<String>,
}

impl ReferencesSource {
    pub fn new(config: ReferencesConfig, settings: &GatherSettings) -> Self {
        let client_filter = settings.client_filter(&config.client_name);
        Self {
            config,
            client_filter,
        }
    }
}

#[async_trait]
impl Source for ReferencesSource {
    fn method(&self) -> Method {
        Method::References
    }

    fn tag(&self) -> &'static str {
        "source-lsp_references"
    }

    fn client_filter(&self) -> Option<&str> {
        self.client_filter.as_deref()
    }

    async fn params(
        &self,
        env: &Collaborators,
        client: &Client,
        buffer: &BufferContext,
    ) -> Result<Value> {
        // Positions are encoded per client.
        let text_document_position = env
            .params
            .position_params(buffer.bufnr, buffer.winid, client.offset_encoding)
            .await?;
        let params = ReferenceParams {
            text_document_position,
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
            context: ReferenceContext {
                include_declaration: self.config.include_declaration,
            },
        };
        Ok(serde_json::to_value(params)?)
    }

    async fn process(
        &self,
        env: &Collaborators,
        context: &ItemContext,
        buffer: &BufferContext,
        response: Value,
    ) -> Result<Batch> {
        let locations = normalize_locations(response);
        let options = EnrichOptions {
            show_line: self.config.show_line,
            padding_width: self.config.location_padding_width,
            cwd: buffer.cwd.clone(),
        };
        let mut records = enrich_locations(locations, context, &options, env.files.as_ref()).await?;
        sort_records(&mut records);
        records.retain(|record| env.validity.is_valid(record));
        Ok(records)
    }
}
