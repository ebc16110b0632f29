use serde::{Deserialize, Serialize};

use crate::types::TypeTag;

/// One catalog entry - the star of the show.
///
/// `id` is always the 1-based catalog position; the raw identifier string is
/// never used as a key. `types` and `forms` stay empty until the detail for
/// this Pokémon has been fetched (the list screen never needs them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub raw_name: String,
    pub display_name: String,
    pub types: Vec<TypeTag>,
    pub forms: Vec<Form>,
}

/// A distinct variant of a Pokémon: same dex id, its own sprites and its own
/// progress slot. The first form in the list is the canonical/base one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Stable key, unique within the entity ("charizard", "charizard-mega-x").
    pub form_key: String,
    /// Opaque image references; the core never dereferences them.
    pub normal_sprite: String,
    pub shiny_sprite: String,
}

impl Entity {
    /// The base form, once detail is loaded.
    pub fn canonical_form(&self) -> Option<&Form> {
        self.forms.first()
    }

    pub fn has_detail(&self) -> bool {
        !self.forms.is_empty()
    }
}
