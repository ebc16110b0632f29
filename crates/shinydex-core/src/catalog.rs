use tracing::debug;

use crate::models::{Entity, Form};
use crate::names;
use crate::types::{TypeRelations, TypeTag};
use crate::Result;

/// One row of the remote catalog listing: the raw identifier plus its
/// 0-based position in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub raw_name: String,
    pub index: usize,
}

/// Detail payload for a single Pokémon. Types arrive as raw strings off the
/// wire; unknown ones are dropped during [`apply_detail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    pub types: Vec<String>,
    pub forms: Vec<FormDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDetail {
    pub form_key: String,
    pub normal_sprite: String,
    pub shiny_sprite: String,
}

/// The remote catalog, seen through a keyhole. Fetching, retries and
/// timeouts are the implementor's problem; the core receives either complete
/// data or an error, never a partial entity.
pub trait CatalogSource {
    fn list_entities(&self) -> Result<Vec<CatalogEntry>>;
    fn entity_detail(&self, raw_name: &str) -> Result<EntityDetail>;
}

/// Type-relation table lookup. `None` for a tag means the table has no entry
/// for it, which the calculator treats as all-neutral.
pub trait RelationSource {
    fn type_relations(&self, tag: TypeTag) -> Option<TypeRelations>;
}

/// Build the entity list the UI renders: 1-based ids from catalog order,
/// display names derived from the raw identifiers, detail left unloaded.
pub fn load_entities(source: &impl CatalogSource) -> Result<Vec<Entity>> {
    let entries = source.list_entities()?;
    debug!(count = entries.len(), "loaded catalog listing");

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| Entity {
            // The id comes from the position in the listing, never from the
            // raw name and never from `entry.index` as reported remotely.
            id: (position + 1) as u32,
            display_name: names::display_name(&entry.raw_name),
            raw_name: entry.raw_name,
            types: Vec::new(),
            forms: Vec::new(),
        })
        .collect())
}

/// Fetch and attach the detail for one entity. Unknown type strings are
/// skipped rather than failing the whole load.
pub fn load_detail(source: &impl CatalogSource, entity: &mut Entity) -> Result<()> {
    let detail = source.entity_detail(&entity.raw_name)?;
    apply_detail(entity, detail);
    Ok(())
}

pub fn apply_detail(entity: &mut Entity, detail: EntityDetail) {
    entity.types = detail
        .types
        .iter()
        .filter_map(|name| TypeTag::from_name(name))
        .collect();
    entity.forms = detail
        .forms
        .into_iter()
        .map(|form| Form {
            form_key: form.form_key,
            normal_sprite: form.normal_sprite,
            shiny_sprite: form.shiny_sprite,
        })
        .collect();
}

/// Dex id one step back, if any. Ids are 1-based.
pub fn previous_id(id: u32) -> Option<u32> {
    if id > 1 {
        Some(id - 1)
    } else {
        None
    }
}

/// Dex id one step forward, clamped to the catalog length.
pub fn next_id(id: u32, catalog_len: u32) -> Option<u32> {
    if id < catalog_len {
        Some(id + 1)
    } else {
        None
    }
}
