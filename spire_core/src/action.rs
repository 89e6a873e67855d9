//! Action - A selectable combat move

use crate::types::ActionKind;
use serde::{Deserialize, Serialize};

/// A player combat move
///
/// The engine accepts any well-formed action; it does not check membership in
/// the configured catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    /// Base damage before attack power and defense
    pub damage: u32,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl Action {
    pub fn new(name: impl Into<String>, damage: u32, kind: ActionKind) -> Self {
        Action {
            name: name.into(),
            damage,
            kind,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Plain physical strike, used when the catalog fails to load
    pub fn clockwork_strike() -> Self {
        Action::new("Clockwork Strike", 10, ActionKind::Physical)
            .with_description("A precise mechanical hit.")
    }

    pub fn is_aetherial(&self) -> bool {
        self.kind == ActionKind::Aetherial
    }
}
