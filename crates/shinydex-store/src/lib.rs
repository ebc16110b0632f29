// Persistence layer: the key-value backend abstraction and the progress store
// that keeps per-Pokémon collection state on top of it.
pub mod backend;
pub mod error;
pub mod record;
pub mod sqlite;
pub mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::Error;
pub use record::{ContextState, FormProgress, GameContext, ProgressRecord, StateField};
pub use sqlite::SqliteBackend;
pub use store::{ProgressStore, PROGRESS_KEY_PREFIX};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
