//! Pure aggregation over loaded progress records: owned/shiny rollups,
//! completion percentage and the totals shown in the stats bar.

use std::collections::HashMap;

use crate::store::{ContextState, GameContext, ProgressRecord};

/// Which forms of a record an aggregation question looks at.
///
/// `Form` is for detail display (one specific form); `Any` unions across
/// every form and is the right policy for entity-level questions like list
/// badges and the completion bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormScope<'a> {
    Form(&'a str),
    Any,
}

/// Totals across all records, for summary display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalCounts {
    pub owned: usize,
    pub shiny: usize,
}

fn any_state(
    record: &ProgressRecord,
    scope: FormScope<'_>,
    contexts: &[GameContext],
    test: fn(&ContextState) -> bool,
) -> bool {
    let check = |form: &crate::store::FormProgress| contexts.iter().any(|ctx| test(form.get(*ctx)));
    match scope {
        FormScope::Form(key) => record.form(key).map(check).unwrap_or(false),
        FormScope::Any => record.forms.values().any(check),
    }
}

/// True iff at least one selected (form, game) slot is owned.
pub fn is_owned(record: &ProgressRecord, scope: FormScope<'_>, contexts: &[GameContext]) -> bool {
    any_state(record, scope, contexts, |state| state.owned)
}

/// True iff at least one selected (form, game) slot is shiny.
pub fn is_shiny(record: &ProgressRecord, scope: FormScope<'_>, contexts: &[GameContext]) -> bool {
    any_state(record, scope, contexts, |state| state.shiny)
}

/// Completion percentage over the whole catalog, rounded to the nearest
/// integer. An empty catalog is 0% complete, not a division error.
pub fn completion(
    records: &HashMap<u32, ProgressRecord>,
    total_entity_count: usize,
    contexts: &[GameContext],
) -> u8 {
    if total_entity_count == 0 {
        return 0;
    }
    let owned = records
        .values()
        .filter(|record| is_owned(record, FormScope::Any, contexts))
        .count();
    ((owned as f64 / total_entity_count as f64) * 100.0).round() as u8
}

/// Owned/shiny totals across every record, any form.
pub fn counts(records: &HashMap<u32, ProgressRecord>, contexts: &[GameContext]) -> TotalCounts {
    let mut totals = TotalCounts::default();
    for record in records.values() {
        if is_owned(record, FormScope::Any, contexts) {
            totals.owned += 1;
        }
        if is_shiny(record, FormScope::Any, contexts) {
            totals.shiny += 1;
        }
    }
    totals
}
