//! Wire-tag lookup table.

use std::collections::HashMap;

use parlor_proto::EventTag;

/// Immutable mapping from wire tag to handler.
///
/// Built once from the closed [`EventTag`] set and never modified. Lookups of
/// tags outside the set return `None`; the dispatcher treats that as a
/// silent drop.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<&'static str, EventTag>,
}

impl Registry {
    /// Registry covering every [`EventTag`].
    pub fn standard() -> Self {
        let handlers = EventTag::ALL.into_iter().map(|tag| (tag.wire_name(), tag)).collect();
        Self { handlers }
    }

    /// Handler for a wire tag. `None` if the tag is not registered.
    pub fn lookup(&self, tag: &str) -> Option<EventTag> {
        self.handlers.get(tag).copied()
    }

    /// Check if a wire tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Registered wire tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
