//! Actor data model
//!
//! An actor is one suggestion result from the search endpoint: a handle plus
//! an optional avatar URL. Actors are immutable once deserialized.

use serde::Deserialize;

/// One suggestion result: a handle and an optional avatar URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub handle: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Actor {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Actors without a handle are malformed and get dropped before display
    pub fn is_well_formed(&self) -> bool {
        !self.handle.is_empty()
    }
}
