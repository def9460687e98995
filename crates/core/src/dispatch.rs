//! Fan-out of one request to every matching client.
//!
//! Each client runs as its own task. Finished batches are forwarded to the
//! consumer in completion order; the first failing client aborts the rest
//! and the error is reported once. Batches already sent stay delivered.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use symgather_api::{
    BufferContext, Client, ConnectionResolver, ErrorReporter, FileAccess, ItemContext, Method,
    ParamsBuilder, Record, RequestTransport, ValidityPredicate,
};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::debug;

/// Records produced from one client's response, already ordered.
pub type Batch = Vec<Record>;

/// Everything outside this crate a dispatch talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub resolver: Arc<dyn ConnectionResolver>,
    pub transport: Arc<dyn RequestTransport>,
    pub params: Arc<dyn ParamsBuilder>,
    pub files: Arc<dyn FileAccess>,
    pub validity: Arc<dyn ValidityPredicate>,
    pub reporter: Arc<dyn ErrorReporter>,
}

/// One kind of listing: how to ask a client and how to read its answer.
#[async_trait]
pub trait Source: Send + Sync + 'static {
    fn method(&self) -> Method;

    /// Tag used when reporting a failed dispatch.
    fn tag(&self) -> &'static str;

    fn client_filter(&self) -> Option<&str>;

    async fn params(
        &self,
        env: &Collaborators,
        client: &Client,
        buffer: &BufferContext,
    ) -> Result<Value>;

    /// Turns one raw response into an ordered, filtered batch.
    async fn process(
        &self,
        env: &Collaborators,
        context: &ItemContext,
        buffer: &BufferContext,
        response: Value,
    ) -> Result<Batch>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    pub clients: usize,
    pub batches: usize,
    pub records: usize,
}

/// Receiving side of a spawned dispatch.
pub struct BatchStream {
    pub batches: mpsc::Receiver<Batch>,
    pub handle: JoinHandle<Result<DispatchStats>>,
}

impl BatchStream {
    /// Drains every batch, then waits for the dispatch outcome.
    pub async fn collect(mut self) -> (Vec<Batch>, Result<DispatchStats>) {
        let mut batches = Vec::new();
        while let Some(batch) = self.batches.recv().await {
            batches.push(batch);
        }
        let outcome = match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(e.into()),
        };
        (batches, outcome)
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    env: Arc<Collaborators>,
    channel_capacity: usize,
}

impl Dispatcher {
    pub fn new(env: Collaborators) -> Self {
        Self {
            env: Arc::new(env),
            channel_capacity: 16,
        }
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Spawns a dispatch and hands back its batch channel.
    pub fn gather<S: Source>(&self, source: S, buffer: BufferContext) -> BatchStream {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let dispatcher = self.clone();
        let handle =
            tokio::spawn(async move { dispatcher.run(Arc::new(source), buffer, tx).await });
        BatchStream {
            batches: rx,
            handle,
        }
    }

    /// Runs one dispatch to completion, sending batches on `tx`.
    pub async fn run<S: Source>(
        &self,
        source: Arc<S>,
        buffer: BufferContext,
        tx: mpsc::Sender<Batch>,
    ) -> Result<DispatchStats> {
        let result = self.dispatch(Arc::clone(&source), buffer, tx).await;
        if let Err(e) = &result {
            self.env.reporter.report(e, source.tag());
        }
        result
    }

    async fn dispatch<S: Source>(
        &self,
        source: Arc<S>,
        buffer: BufferContext,
        tx: mpsc::Sender<Batch>,
    ) -> Result<DispatchStats> {
        let clients = self
            .env
            .resolver
            .resolve(buffer.bufnr, source.client_filter())
            .await?;
        let mut stats = DispatchStats {
            clients: clients.len(),
            ..DispatchStats::default()
        };
        if clients.is_empty() {
            debug!("{}: no client attached to buffer {}", source.method(), buffer.bufnr);
            return Ok(stats);
        }

        let buffer = Arc::new(buffer);
        let mut tasks = JoinSet::new();
        for client in clients {
            let env = Arc::clone(&self.env);
            let source = Arc::clone(&source);
            let buffer = Arc::clone(&buffer);
            tasks.spawn(async move { gather_client(&env, &*source, client, &buffer).await });
        }

        while let Some(joined) = tasks.join_next().await {
            let batch = match joined {
                Ok(Ok(batch)) => batch,
                Ok(Err(e)) => {
                    tasks.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    tasks.abort_all();
                    return Err(e.into());
                }
            };

            let records = batch.len();
            if tx.send(batch).await.is_err() {
                debug!("{}: consumer closed, abandoning dispatch", source.method());
                tasks.abort_all();
                return Ok(stats);
            }
            stats.batches += 1;
            stats.records += records;
        }

        debug!(
            "{}: {} records from {} clients",
            source.method(),
            stats.records,
            stats.clients
        );
        Ok(stats)
    }
}

async fn gather_client<S: Source + ?Sized>(
    env: &Collaborators,
    source: &S,
    client: Client,
    buffer: &BufferContext,
) -> Result<Batch> {
    let method = source.method();
    let params = source.params(env, &client, buffer).await?;
    debug!("{}: requesting from {}", method, client.name);
    let response = env
        .transport
        .request(&client, method, params, buffer.bufnr)
        .await?;

    let context = ItemContext {
        client,
        bufnr: buffer.bufnr,
        method,
    };
    source.process(env, &context, buffer, response).await
}
