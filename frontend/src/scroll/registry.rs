//! Identifier <-> index mapping for the panels of one full-page scroll.
//!
//! Panels register from their own mount effects, so registrations can arrive
//! in any order. Render order stays the source of truth for indices; the
//! registry only answers "which index does this fragment name" and back.

use std::collections::HashMap;

use crate::error::RegistryError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    by_id: HashMap<String, usize>,
    by_index: HashMap<usize, String>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an ordered list of identifiers.
    #[cfg(test)]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (index, id) in ids.into_iter().enumerate() {
            if let Err(e) = registry.register(id, index) {
                log::warn!("Skipping section registration: {}", e);
            }
        }
        registry
    }

    /// Record that `id` names the panel at `index`.
    ///
    /// Re-registering the same pair is a no-op. A panel that re-registers
    /// under a new identifier drops its old one. An identifier already owned
    /// by a different index is rejected.
    pub fn register(&mut self, id: impl Into<String>, index: usize) -> Result<(), RegistryError> {
        let id = id.into();
        if id.is_empty() {
            return Err(RegistryError::EmptyIdentifier);
        }
        if let Some(&existing) = self.by_id.get(&id) {
            if existing == index {
                return Ok(());
            }
            return Err(RegistryError::DuplicateIdentifier {
                id,
                existing,
                attempted: index,
            });
        }
        if let Some(old) = self.by_index.insert(index, id.clone()) {
            self.by_id.remove(&old);
        }
        self.by_id.insert(id, index);
        Ok(())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
