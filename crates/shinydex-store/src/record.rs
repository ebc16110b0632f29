use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One of the games a Pokémon can be registered in. Closed set: passing a
/// context is always valid by construction, there is no "unknown game".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameContext {
    Home,
    Za,
    Go,
}

impl GameContext {
    pub const ALL: [GameContext; 3] = [GameContext::Home, GameContext::Za, GameContext::Go];

    /// Short key used in the persisted JSON ("home" / "za" / "go").
    pub fn key(&self) -> &'static str {
        match self {
            GameContext::Home => "home",
            GameContext::Za => "za",
            GameContext::Go => "go",
        }
    }

    /// Human-facing panel title.
    pub fn title(&self) -> &'static str {
        match self {
            GameContext::Home => "Pokémon HOME",
            GameContext::Za => "Leggende Z-A",
            GameContext::Go => "Pokémon GO",
        }
    }
}

impl std::fmt::Display for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which flag a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Owned,
    Shiny,
}

/// Ownership state for one (form, game) pair.
///
/// Invariant: `shiny` implies `owned`. A shiny is by definition a registered
/// Pokémon, so every mutation goes through [`ContextState::set`] which keeps
/// the pair consistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextState {
    #[serde(default)]
    pub owned: bool,
    #[serde(default)]
    pub shiny: bool,
}

impl ContextState {
    /// Apply a single-flag update, preserving the shiny-implies-owned
    /// invariant in the same step:
    /// - setting `shiny = true` forces `owned = true`
    /// - clearing `owned` clears `shiny`
    /// - setting `owned = true` alone leaves `shiny` untouched
    pub fn set(&mut self, field: StateField, value: bool) {
        match field {
            StateField::Owned => {
                self.owned = value;
                if !value {
                    self.shiny = false;
                }
            }
            StateField::Shiny => {
                self.shiny = value;
                if value {
                    self.owned = true;
                }
            }
        }
    }
}

/// Per-form state across the three games. Field names match the persisted
/// JSON, which in turn matches what the original app wrote to device storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormProgress {
    #[serde(default)]
    pub home: ContextState,
    #[serde(default)]
    pub za: ContextState,
    #[serde(default)]
    pub go: ContextState,
}

impl FormProgress {
    pub fn get(&self, context: GameContext) -> &ContextState {
        match context {
            GameContext::Home => &self.home,
            GameContext::Za => &self.za,
            GameContext::Go => &self.go,
        }
    }

    pub fn get_mut(&mut self, context: GameContext) -> &mut ContextState {
        match context {
            GameContext::Home => &mut self.home,
            GameContext::Za => &mut self.za,
            GameContext::Go => &mut self.go,
        }
    }
}

/// The persisted unit: everything tracked for one Pokémon, keyed by form.
///
/// A missing record is equivalent to a default one (nothing owned anywhere),
/// so absence never needs special-casing beyond `unwrap_or_default`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub forms: HashMap<String, FormProgress>,
}

impl ProgressRecord {
    pub fn form(&self, form_key: &str) -> Option<&FormProgress> {
        self.forms.get(form_key)
    }

    /// Fetch a form's state, creating an empty one on first touch.
    pub fn form_mut(&mut self, form_key: &str) -> &mut FormProgress {
        self.forms.entry(form_key.to_string()).or_default()
    }
}
