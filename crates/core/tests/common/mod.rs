#![allow(dead_code)]

use async_trait::async_trait;
use lsp_types::{Position, TextDocumentIdentifier, TextDocumentPositionParams};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use symgather_api::{
    AcceptAll, ApiError, ApiResult, BufNr, BufferContext, Client, ConnectionResolver,
    ErrorReporter, FileAccess, Method, OffsetEncoding, ParamsBuilder, RequestTransport,
    ValidityPredicate, WinId,
};
use symgather_core::Collaborators;

pub const BUFNR: BufNr = 3;
pub const WINID: WinId = 1001;

pub fn buffer() -> BufferContext {
    BufferContext {
        bufnr: BUFNR,
        winid: WINID,
        cwd: PathBuf::from("/work"),
    }
}

pub fn client(id: i64, name: &str) -> Client {
    Client::new(id, name, OffsetEncoding::Utf16)
}

pub fn range(line: u32, character: u32) -> Value {
    json!({
        "start": { "line": line, "character": character },
        "end": { "line": line, "character": character + 3 }
    })
}

pub fn location(path: &str, line: u32, character: u32) -> Value {
    json!({ "uri": format!("file://{path}"), "range": range(line, character) })
}

pub fn doc_symbol(name: &str, kind: u32, line: u32, children: Option<Value>) -> Value {
    let mut value = json!({
        "name": name,
        "kind": kind,
        "range": range(line, 0),
        "selectionRange": range(line, 4),
    });
    if let Some(children) = children {
        value["children"] = children;
    }
    value
}

pub struct StaticResolver {
    pub clients: Vec<Client>,
    pub filters: Mutex<Vec<Option<String>>>,
}

impl StaticResolver {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            filters: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConnectionResolver for StaticResolver {
    async fn resolve(&self, _bufnr: BufNr, name_filter: Option<&str>) -> ApiResult<Vec<Client>> {
        self.filters
            .lock()
            .unwrap()
            .push(name_filter.map(str::to_string));
        Ok(self
            .clients
            .iter()
            .filter(|c| name_filter.is_none_or(|name| c.name == name))
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
pub struct Reply {
    pub delay: Duration,
    pub result: Result<Value, String>,
}

impl Reply {
    pub fn ok(value: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(value),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(message.to_string()),
        }
    }

    pub fn after(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

/// Answers per client name and remembers what was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    pub replies: HashMap<String, Reply>,
    pub sent: Mutex<Vec<(String, Method, Value)>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = (&'static str, Reply)>) -> Self {
        Self {
            replies: replies
                .into_iter()
                .map(|(name, reply)| (name.to_string(), reply))
                .collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_params(&self, client: &str) -> Option<Value> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _, _)| name == client)
            .map(|(_, _, params)| params.clone())
    }
}

#[async_trait]
impl RequestTransport for ScriptedTransport {
    async fn request(
        &self,
        client: &Client,
        method: Method,
        params: Value,
        _bufnr: BufNr,
    ) -> ApiResult<Value> {
        self.sent
            .lock()
            .unwrap()
            .push((client.name.clone(), method, params));
        let reply = self
            .replies
            .get(&client.name)
            .cloned()
            .unwrap_or_else(|| Reply::ok(Value::Null));
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result.map_err(|message| ApiError::Protocol {
            code: -32603,
            message,
        })
    }
}

/// Cursor at line 5; column 6 in UTF-8, 4 in UTF-16, 3 in UTF-32.
pub struct FixedParams;

#[async_trait]
impl ParamsBuilder for FixedParams {
    async fn text_document_identifier(&self, _bufnr: BufNr) -> ApiResult<TextDocumentIdentifier> {
        Ok(serde_json::from_value(json!({ "uri": "file:///work/src/main.rs" }))
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?)
    }

    async fn position_params(
        &self,
        bufnr: BufNr,
        _winid: WinId,
        encoding: OffsetEncoding,
    ) -> ApiResult<TextDocumentPositionParams> {
        let character = match encoding {
            OffsetEncoding::Utf8 => 6,
            OffsetEncoding::Utf16 => 4,
            OffsetEncoding::Utf32 => 3,
        };
        Ok(TextDocumentPositionParams::new(
            self.text_document_identifier(bufnr).await?,
            Position::new(5, character),
        ))
    }
}

/// In-memory buffers and disk that count every read.
#[derive(Default)]
pub struct CountingFiles {
    pub buffers: HashMap<PathBuf, Vec<String>>,
    pub disk: HashMap<PathBuf, Vec<String>>,
    pub reads: Mutex<HashMap<PathBuf, usize>>,
    pub fail_buffer_check: bool,
}

impl CountingFiles {
    pub fn with_disk(mut self, path: &str, lines: &[&str]) -> Self {
        self.disk.insert(PathBuf::from(path), to_lines(lines));
        self
    }

    pub fn with_buffer(mut self, path: &str, lines: &[&str]) -> Self {
        self.buffers.insert(PathBuf::from(path), to_lines(lines));
        self
    }

    pub fn reads_of(&self, path: &str) -> usize {
        self.reads
            .lock()
            .unwrap()
            .get(Path::new(path))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().values().sum()
    }

    fn count(&self, path: &Path) {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default() += 1;
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[async_trait]
impl FileAccess for CountingFiles {
    async fn is_buffer_loaded(&self, path: &Path) -> ApiResult<bool> {
        if self.fail_buffer_check {
            return Err(ApiError::Editor("bufloaded failed".to_string()));
        }
        Ok(self.buffers.contains_key(path))
    }

    async fn read_buffer_lines(&self, path: &Path) -> ApiResult<Vec<String>> {
        self.count(path);
        self.buffers
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(path.display().to_string()))
    }

    async fn read_file(&self, path: &Path) -> ApiResult<Vec<String>> {
        self.count(path);
        self.disk.get(path).cloned().ok_or_else(|| {
            ApiError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                path.display().to_string(),
            ))
        })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &dyn std::error::Error, source: &str) {
        self.reports
            .lock()
            .unwrap()
            .push((error.to_string(), source.to_string()));
    }
}

pub struct Harness {
    pub resolver: Arc<StaticResolver>,
    pub transport: Arc<ScriptedTransport>,
    pub files: Arc<CountingFiles>,
    pub reporter: Arc<RecordingReporter>,
    pub validity: Arc<dyn ValidityPredicate>,
}

impl Harness {
    pub fn new(clients: Vec<Client>, transport: ScriptedTransport) -> Self {
        Self {
            resolver: Arc::new(StaticResolver::new(clients)),
            transport: Arc::new(transport),
            files: Arc::new(CountingFiles::default()),
            reporter: Arc::new(RecordingReporter::default()),
            validity: Arc::new(AcceptAll),
        }
    }

    pub fn with_files(mut self, files: CountingFiles) -> Self {
        self.files = Arc::new(files);
        self
    }

    pub fn with_validity(mut self, validity: impl ValidityPredicate + 'static) -> Self {
        self.validity = Arc::new(validity);
        self
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            resolver: self.resolver.clone(),
            transport: self.transport.clone(),
            params: Arc::new(FixedParams),
            files: self.files.clone(),
            validity: self.validity.clone(),
            reporter: self.reporter.clone(),
        }
    }
}
