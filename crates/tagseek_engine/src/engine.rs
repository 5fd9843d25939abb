use std::io;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tagseek_logging::{seek_debug, seek_info, seek_warn};
use thiserror::Error;

use crate::search::{GifSearcher, ReqwestGifSearcher, SearchSettings};
use crate::{EngineEvent, RequestId, SearchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start search runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build search client: {0}")]
    Client(#[from] SearchError),
    #[error("search engine is not running")]
    Stopped,
}

enum EngineCommand {
    Search { request_id: RequestId, query: String },
    Shutdown,
}

/// Runs searches on a background tokio runtime.
///
/// Requests are independent: nothing is queued behind another request and
/// nothing is cancelled. Completions come back through [`EngineHandle::try_recv`]
/// in the order they finish.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, EngineError> {
        let searcher = ReqwestGifSearcher::new(settings)?;
        Self::with_searcher(Arc::new(searcher))
    }

    pub fn with_searcher(searcher: Arc<dyn GifSearcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tagseek-search")
            .enable_all()
            .build()?;

        let worker = thread::Builder::new()
            .name("tagseek-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    if matches!(command, EngineCommand::Shutdown) {
                        break;
                    }
                    let searcher = searcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(searcher.as_ref(), command, event_tx).await;
                    });
                }
                seek_info!("Search engine shutting down");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx,
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Hands a search to the worker. Fails with [`EngineError::Stopped`] once
    /// the worker has exited; no completion event follows in that case.
    pub fn search(
        &self,
        request_id: RequestId,
        query: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Search {
                request_id,
                query: query.into(),
            })
            .map_err(|_| EngineError::Stopped)
    }

    /// Stops accepting searches and waits for the worker thread to exit.
    /// Searches already in flight are dropped with the runtime.
    pub fn shutdown(&self) {
        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(worker) = worker {
            let _ = self.cmd_tx.send(EngineCommand::Shutdown);
            if worker.join().is_err() {
                seek_warn!("Search engine worker panicked");
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    searcher: &dyn GifSearcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, query } => {
            seek_debug!("Search started request_id={} q={}", request_id, query);
            let result = searcher.search(&query).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
        EngineCommand::Shutdown => {}
    }
}
