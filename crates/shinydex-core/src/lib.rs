// Core business logic lives here - the brain of the operation
pub mod aggregate;
pub mod catalog;
pub mod effectiveness;
pub mod error;
pub mod models;
pub mod names;
pub mod query;
pub mod types;

pub use shinydex_store as store;

pub use aggregate::{completion, counts, is_owned, is_shiny, FormScope, TotalCounts};
pub use catalog::{CatalogEntry, CatalogSource, EntityDetail, FormDetail, RelationSource};
pub use effectiveness::{Matchup, TypeMatchups};
pub use error::Error;
pub use models::{Entity, Form};
pub use query::{DexEntry, FilterOptions, Query};
pub use types::{TypeRelations, TypeTag};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
