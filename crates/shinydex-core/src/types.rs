use serde::{Deserialize, Serialize};

/// The closed set of Pokémon types, in PokeAPI id order.
///
/// Keeping this an enum (rather than free strings) makes "invalid type" a
/// compile-time impossibility everywhere past the catalog boundary; unknown
/// strings coming off the wire are dropped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl TypeTag {
    pub const ALL: [TypeTag; 18] = [
        TypeTag::Normal,
        TypeTag::Fighting,
        TypeTag::Flying,
        TypeTag::Poison,
        TypeTag::Ground,
        TypeTag::Rock,
        TypeTag::Bug,
        TypeTag::Ghost,
        TypeTag::Steel,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Grass,
        TypeTag::Electric,
        TypeTag::Psychic,
        TypeTag::Ice,
        TypeTag::Dragon,
        TypeTag::Dark,
        TypeTag::Fairy,
    ];

    /// English tag name, as the catalog API speaks it.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normal",
            TypeTag::Fighting => "fighting",
            TypeTag::Flying => "flying",
            TypeTag::Poison => "poison",
            TypeTag::Ground => "ground",
            TypeTag::Rock => "rock",
            TypeTag::Bug => "bug",
            TypeTag::Ghost => "ghost",
            TypeTag::Steel => "steel",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Grass => "grass",
            TypeTag::Electric => "electric",
            TypeTag::Psychic => "psychic",
            TypeTag::Ice => "ice",
            TypeTag::Dragon => "dragon",
            TypeTag::Dark => "dark",
            TypeTag::Fairy => "fairy",
        }
    }

    /// Italian display name, lowercase. The app's UI (and therefore its
    /// search box) is Italian.
    pub fn italian_name(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normale",
            TypeTag::Fighting => "lotta",
            TypeTag::Flying => "volante",
            TypeTag::Poison => "veleno",
            TypeTag::Ground => "terra",
            TypeTag::Rock => "roccia",
            TypeTag::Bug => "coleottero",
            TypeTag::Ghost => "spettro",
            TypeTag::Steel => "acciaio",
            TypeTag::Fire => "fuoco",
            TypeTag::Water => "acqua",
            TypeTag::Grass => "erba",
            TypeTag::Electric => "elettro",
            TypeTag::Psychic => "psico",
            TypeTag::Ice => "ghiaccio",
            TypeTag::Dragon => "drago",
            TypeTag::Dark => "buio",
            TypeTag::Fairy => "folletto",
        }
    }

    /// Resolve a lowercase name, accepting both the English tag and the
    /// Italian display name. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<TypeTag> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == name || tag.italian_name() == name)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Attack-type relations for one defending type, as delivered by the
/// relation-table collaborator. Empty sets mean "everything neutral".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRelations {
    pub double_from: Vec<TypeTag>,
    pub half_from: Vec<TypeTag>,
    pub none_from: Vec<TypeTag>,
}
