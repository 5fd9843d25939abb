//! Tagseek engine: search requests and persistent storage.
mod engine;
mod persist;
mod search;
mod store;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use search::{
    redact_api_key, GifSearcher, ReqwestGifSearcher, SearchSettings, DEFAULT_BASE_URL, DEFAULT_LIMIT,
};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StoreError};
pub use types::{EngineEvent, FailureKind, GifItem, RequestId, SearchError};
