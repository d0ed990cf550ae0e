use crate::domain::error::DomainError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub id: String,
    pub title: String,
}

/// Bidirectional id <-> slot mapping. The reverse direction is a dense Vec
/// indexed by slot, maintained alongside the forward map so both lookups are
/// O(1) rather than scans.
#[derive(Default)]
pub struct Registry {
    slot_by_id: HashMap<String, usize>,
    entry_by_slot: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entry_by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_by_slot.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slot_by_id.contains_key(id)
    }

    /// Registers `id` at `slot`, which must be the next dense slot — the
    /// store position the caller just appended to. A mismatched slot is
    /// rejected outright, since recording it anywhere else would break the
    /// id <-> slot bijection.
    pub fn register(&mut self, id: String, title: String, slot: usize) -> Result<(), DomainError> {
        if self.slot_by_id.contains_key(&id) {
            return Err(DomainError::DuplicateId(id));
        }
        if slot != self.entry_by_slot.len() {
            return Err(DomainError::InvalidInput(format!(
                "slot {slot} is not the next registry slot ({})",
                self.entry_by_slot.len()
            )));
        }
        self.slot_by_id.insert(id.clone(), slot);
        self.entry_by_slot.push(RegistryEntry { id, title });
        Ok(())
    }

    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.slot_by_id.get(id).copied()
    }

    pub fn entry_at(&self, slot: usize) -> Option<&RegistryEntry> {
        self.entry_by_slot.get(slot)
    }
}
