use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::Result;

/// Abstract key-value backend the progress store writes through.
///
/// This mirrors the narrow surface of the device storage the original app
/// used: point reads/writes, batched reads/writes, batched deletes, and key
/// enumeration. Implementations must honor two contracts the store relies on:
/// - `get_all` returns exactly one entry per requested key, in request order.
/// - `set_all` and `delete_all` apply as a single batch; a reader never
///   observes a partially applied bulk write.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn get_all(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>>;
    fn set_all(&self, pairs: &[(String, String)]) -> Result<()>;
    fn delete_all(&self, keys: &[String]) -> Result<()>;
    fn list_keys(&self) -> Result<Vec<String>>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_all(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>> {
        let entries = self.lock();
        Ok(keys
            .iter()
            .map(|key| (key.clone(), entries.get(key).cloned()))
            .collect())
    }

    fn set_all(&self, pairs: &[(String, String)]) -> Result<()> {
        let mut entries = self.lock();
        for (key, value) in pairs {
            entries.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn delete_all(&self, keys: &[String]) -> Result<()> {
        let mut entries = self.lock();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}
