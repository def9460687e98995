use async_trait::async_trait;
use std::path::Path;
use symgather_api::{ApiResult, FileAccess};

/// File access without an editor: nothing is ever loaded as a buffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileAccess;

#[async_trait]
impl FileAccess for DiskFileAccess {
    async fn is_buffer_loaded(&self, _path: &Path) -> ApiResult<bool> {
        Ok(false)
    }

    async fn read_buffer_lines(&self, path: &Path) -> ApiResult<Vec<String>> {
        self.read_file(path).await
    }

    async fn read_file(&self, path: &Path) -> ApiResult<Vec<String>> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(split_lines(&content))
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::to_string)
        .collect()
}
