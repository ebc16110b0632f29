use thiserror::Error;

/// Errors that can reach callers of the core.
///
/// Deliberately short: the calculators and the query engine are total over
/// well-typed input, so only the collaborators (catalog source, persistence)
/// can actually fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog source error: {0}")]
    Catalog(String),

    #[error("store error: {0}")]
    Store(#[from] shinydex_store::Error),
}
