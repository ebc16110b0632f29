//! The search-box mini language.
//!
//! A query is a comma-separated list of parts. A part is either one of the
//! fixed Italian keywords below (a hard constraint, ANDed), a type name (in
//! either language), or a plain name prefix. Name and type parts are
//! alternatives of one another: "find by name or by type" is one user intent,
//! so an entry passes if either matches.

use crate::models::Entity;
use crate::types::TypeTag;

/// Require the shiny flag.
pub const SHINY_TOKEN: &str = "variante";
/// Require the shiny flag to be absent.
pub const NOT_SHINY_TOKEN: &str = "non variante";
/// Require the Pokémon to not be owned yet.
pub const MISSING_TOKEN: &str = "mancanti";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    Shiny,
    NotShiny,
    Missing,
}

impl Constraint {
    fn from_part(part: &str) -> Option<Constraint> {
        match part {
            SHINY_TOKEN => Some(Constraint::Shiny),
            NOT_SHINY_TOKEN => Some(Constraint::NotShiny),
            MISSING_TOKEN => Some(Constraint::Missing),
            _ => None,
        }
    }
}

/// One list row as seen by the filter: the entity plus its aggregated flags.
#[derive(Debug, Clone)]
pub struct DexEntry {
    pub entity: Entity,
    pub owned: bool,
    pub shiny: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// The "mostra solo registrati" switch.
    pub owned_only: bool,
}

/// A parsed query, ready to test entries against.
#[derive(Debug, Clone, Default)]
pub struct Query {
    constraints: Vec<Constraint>,
    /// First part that is neither a keyword nor a type name; candidate for
    /// name-prefix matching.
    name_prefix: Option<String>,
    /// Every non-keyword part that names a type, in either language.
    type_filters: Vec<TypeTag>,
    has_plain_parts: bool,
}

impl Query {
    /// Split on commas, trim, lowercase, classify. Never fails; junk parts
    /// simply become name-prefix candidates that match nothing.
    pub fn parse(raw: &str) -> Query {
        let mut query = Query::default();

        for part in raw.split(',') {
            let part = part.trim().to_lowercase();
            if part.is_empty() {
                continue;
            }
            if let Some(constraint) = Constraint::from_part(&part) {
                query.constraints.push(constraint);
                continue;
            }

            query.has_plain_parts = true;
            // A part naming a type is a type filter, not a name-prefix
            // candidate; only parts that resolve to nothing fall through.
            if let Some(tag) = TypeTag::from_name(&part) {
                query.type_filters.push(tag);
            } else if query.name_prefix.is_none() {
                query.name_prefix = Some(part);
            }
        }

        query
    }

    /// Keyword constraints are conjunctive; once they hold, a keyword-only
    /// query is done. Otherwise the entry must match by name prefix or by
    /// type.
    pub fn matches(&self, entry: &DexEntry) -> bool {
        for constraint in &self.constraints {
            let ok = match constraint {
                Constraint::Shiny => entry.shiny,
                Constraint::NotShiny => !entry.shiny,
                Constraint::Missing => !entry.owned,
            };
            if !ok {
                return false;
            }
        }

        if !self.has_plain_parts {
            return true;
        }

        let name_match = self
            .name_prefix
            .as_deref()
            .map(|prefix| entry.entity.display_name.to_lowercase().starts_with(prefix))
            .unwrap_or(false);
        let type_match = self
            .type_filters
            .iter()
            .any(|tag| entry.entity.types.contains(tag));

        name_match || type_match
    }
}

/// Filter a dex listing. Order is preserved; this never re-sorts.
pub fn filter<'a>(
    entries: &'a [DexEntry],
    query: &Query,
    options: FilterOptions,
) -> Vec<&'a DexEntry> {
    entries
        .iter()
        .filter(|entry| query.matches(entry))
        .filter(|entry| !options.owned_only || entry.owned)
        .collect()
}
