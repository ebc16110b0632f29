use std::collections::HashMap;

use tracing::{debug, warn};

use crate::backend::StorageBackend;
use crate::record::{GameContext, ProgressRecord, StateField};
use crate::Result;

/// Key namespace for progress records. Other app data (volume settings and
/// the like) lives in the same backend under different prefixes, so every
/// store operation filters on this rather than touching the whole keyspace.
pub const PROGRESS_KEY_PREFIX: &str = "pokemon_";

fn progress_key(id: u32) -> String {
    format!("{}{}", PROGRESS_KEY_PREFIX, id)
}

/// Parse a persisted record, dropping it with a warning when corrupt.
/// A broken value on disk must never take the read path down with it.
fn parse_record(id: u32, raw: &str) -> Option<ProgressRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(id, %err, "dropping malformed progress record");
            None
        }
    }
}

/// Collection progress, persisted through an abstract key-value backend.
///
/// All operations are synchronous and perform at most one logical read plus
/// one logical write against the backend. Callers that interleave `mutate`
/// and `load` for the same id must re-read afterwards; the store itself does
/// no caching.
pub struct ProgressStore<B> {
    backend: B,
}

impl<B: StorageBackend> ProgressStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the records for the given ids in one batched backend call.
    ///
    /// Ids with no persisted record are omitted from the result, not
    /// materialized as empty records; callers default-fill on lookup.
    pub fn load(&self, ids: &[u32]) -> Result<HashMap<u32, ProgressRecord>> {
        let keys: Vec<String> = ids.iter().map(|id| progress_key(*id)).collect();
        let rows = self.backend.get_all(&keys)?;

        let mut records = HashMap::new();
        for (id, (_, value)) in ids.iter().zip(rows) {
            if let Some(raw) = value {
                if let Some(record) = parse_record(*id, &raw) {
                    records.insert(*id, record);
                }
            }
        }
        Ok(records)
    }

    /// Read every persisted progress record, whatever its id.
    /// This is what the list screen does on startup.
    pub fn load_all(&self) -> Result<HashMap<u32, ProgressRecord>> {
        let ids: Vec<u32> = self
            .backend
            .list_keys()?
            .iter()
            .filter_map(|key| key.strip_prefix(PROGRESS_KEY_PREFIX))
            .filter_map(|suffix| suffix.parse().ok())
            .collect();
        self.load(&ids)
    }

    /// Apply one flag change to one (form, game) slot and write it back.
    ///
    /// The shiny-implies-owned invariant is enforced inside the same update,
    /// so no intermediate inconsistent state is ever persisted. Returns the
    /// record as written.
    pub fn mutate(
        &self,
        id: u32,
        form_key: &str,
        context: GameContext,
        field: StateField,
        value: bool,
    ) -> Result<ProgressRecord> {
        let key = progress_key(id);
        let mut record = self
            .backend
            .get(&key)?
            .and_then(|raw| parse_record(id, &raw))
            .unwrap_or_default();

        record.form_mut(form_key).get_mut(context).set(field, value);

        self.backend.set(&key, &serde_json::to_string(&record)?)?;
        Ok(record)
    }

    /// Apply the same flag change to many Pokémon as one backend batch.
    ///
    /// Bulk selection happens at entity granularity, so each target names the
    /// Pokémon's canonical (first) form; other forms are untouched. The
    /// backend sees a single `set_all`, never a partially applied run.
    pub fn bulk_mutate(
        &self,
        targets: &[(u32, &str)],
        context: GameContext,
        field: StateField,
        value: bool,
    ) -> Result<()> {
        let keys: Vec<String> = targets.iter().map(|(id, _)| progress_key(*id)).collect();
        let rows = self.backend.get_all(&keys)?;

        let mut pairs = Vec::with_capacity(targets.len());
        for ((id, form_key), (key, value_raw)) in targets.iter().zip(rows) {
            let mut record = value_raw
                .and_then(|raw| parse_record(*id, &raw))
                .unwrap_or_default();
            record.form_mut(form_key).get_mut(context).set(field, value);
            pairs.push((key, serde_json::to_string(&record)?));
        }

        debug!(count = pairs.len(), context = %context, "bulk progress write");
        self.backend.set_all(&pairs)
    }

    /// Delete every progress record. Non-progress keys survive.
    pub fn reset_all(&self) -> Result<()> {
        let keys: Vec<String> = self
            .backend
            .list_keys()?
            .into_iter()
            .filter(|key| key.starts_with(PROGRESS_KEY_PREFIX))
            .collect();
        debug!(count = keys.len(), "resetting all progress records");
        self.backend.delete_all(&keys)
    }
}
