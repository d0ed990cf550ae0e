pub mod registry;
pub mod search;
pub mod store;

use crate::domain::entities::movie::Movie;
use crate::domain::error::DomainError;
use crate::index::registry::Registry;
use crate::index::store::VectorStore;
use std::sync::RwLock;

struct Inner {
    store: VectorStore,
    registry: Registry,
}

/// The shared index: vector store and identifier registry owned together
/// behind one lock, so the pair is mutated atomically and readers never see
/// a vector without its registration (or the reverse).
pub struct MovieIndex {
    inner: RwLock<Inner>,
}

/// A neighbor returned by a similarity query.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub id: String,
    pub title: String,
    pub slot: usize,
    pub distance: f64,
}

impl MovieIndex {
    pub fn new(dim: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                store: VectorStore::new(dim),
                registry: Registry::new(),
            }),
        }
    }

    pub fn dim(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).store.dim()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a movie under the write lock. Duplicate-id detection runs
    /// before the append so a rejected insert leaves no orphaned vector.
    pub fn insert(&self, id: &str, title: &str, vector: &[f32]) -> Result<Movie, DomainError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.registry.contains(id) {
            return Err(DomainError::DuplicateId(id.to_string()));
        }
        if vector.len() != inner.store.dim() {
            return Err(DomainError::InvalidInput(format!(
                "vector has dimension {}, index expects {}",
                vector.len(),
                inner.store.dim()
            )));
        }
        let slot = inner.store.append(vector)?;
        inner.registry.register(id.to_string(), title.to_string(), slot)?;
        Ok(Movie::new(id.to_string(), title.to_string(), slot))
    }

    /// Resolves `id` and returns up to `k` neighbors by ascending squared L2
    /// distance, the movie itself excluded.
    pub fn neighbors_of(&self, id: &str, k: usize) -> Result<Vec<Neighbor>, DomainError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let slot = inner
            .registry
            .slot_of(id)
            .ok_or_else(|| DomainError::NotFound(format!("unknown movie id: {id}")))?;
        let query = inner.store.get(slot)?.to_vec();
        let hits = search::nearest(&inner.store, &query, k, Some(slot))?;

        let mut neighbors = Vec::with_capacity(hits.len());
        for (hit_slot, distance) in hits {
            let entry = inner.registry.entry_at(hit_slot).ok_or_else(|| {
                DomainError::NotFound(format!("slot {hit_slot} has no registry entry"))
            })?;
            neighbors.push(Neighbor {
                id: entry.id.clone(),
                title: entry.title.clone(),
                slot: hit_slot,
                distance,
            });
        }
        Ok(neighbors)
    }

    pub fn lookup(&self, id: &str) -> Option<Movie> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let slot = inner.registry.slot_of(id)?;
        let entry = inner.registry.entry_at(slot)?;
        Some(Movie::new(entry.id.clone(), entry.title.clone(), slot))
    }
}
