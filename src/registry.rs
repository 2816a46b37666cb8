//! Widget name registry
//!
//! Widgets are registered explicitly by the host application at startup under
//! a default or caller-chosen name. Registration is idempotent for the same
//! kind; registering a different kind under a taken name is an error rather
//! than a silent warning. Nothing registers itself as a side effect, and the
//! picker works unregistered.

use std::collections::HashMap;

use thiserror::Error;

/// Name the typeahead widget registers under when the host doesn't pick one
pub const DEFAULT_WIDGET_NAME: &str = "actor-typeahead";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("widget name '{name}' is already registered to a different widget")]
    NameConflict { name: String },

    #[error("widget name must not be empty")]
    EmptyName,
}

/// Kinds of widgets the registry knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Typeahead,
    /// Host-supplied variant of the typeahead, registered manually
    Custom,
}

/// Explicit widget-name registry owned by the host application
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    entries: HashMap<String, WidgetKind>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `kind` under `name`.
    ///
    /// Re-registering the same kind under the same name is a no-op; a name
    /// held by a different kind is a conflict.
    pub fn register(&mut self, name: &str, kind: WidgetKind) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        match self.entries.get(name) {
            Some(existing) if *existing == kind => Ok(()),
            Some(_) => Err(RegistryError::NameConflict {
                name: name.to_string(),
            }),
            None => {
                self.entries.insert(name.to_string(), kind);
                Ok(())
            }
        }
    }

    /// Register the typeahead widget under [`DEFAULT_WIDGET_NAME`]
    pub fn register_default(&mut self) -> Result<(), RegistryError> {
        self.register(DEFAULT_WIDGET_NAME, WidgetKind::Typeahead)
    }

    pub fn lookup(&self, name: &str) -> Option<WidgetKind> {
        self.entries.get(name).copied()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
