use crate::domain::error::DomainError;

/// Append-only store of fixed-dimension vectors, flat `Vec<f32>` backing.
/// A slot is the vector's insertion position; slots are dense, zero-based,
/// and never reused.
pub struct VectorStore {
    dim: usize,
    data: Vec<f32>,
}

impl VectorStore {
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "vector dimension must be positive");
        Self {
            dim,
            data: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a vector and returns its slot (the pre-append length).
    pub fn append(&mut self, vector: &[f32]) -> Result<usize, DomainError> {
        if vector.len() != self.dim {
            return Err(DomainError::InvalidInput(format!(
                "vector has dimension {}, store expects {}",
                vector.len(),
                self.dim
            )));
        }
        let slot = self.len();
        self.data.extend_from_slice(vector);
        Ok(slot)
    }

    pub fn get(&self, slot: usize) -> Result<&[f32], DomainError> {
        if slot >= self.len() {
            return Err(DomainError::NotFound(format!(
                "slot {slot} out of range (store holds {})",
                self.len()
            )));
        }
        let start = slot * self.dim;
        Ok(&self.data[start..start + self.dim])
    }

    /// Iterator over (slot, vector) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f32])> {
        self.data.chunks_exact(self.dim).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_dense_slots() {
        let mut store = VectorStore::new(2);
        assert_eq!(store.append(&[1.0, 0.0]).unwrap(), 0);
        assert_eq!(store.append(&[0.0, 1.0]).unwrap(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap(), &[0.0, 1.0]);
    }

    #[test]
    fn append_rejects_wrong_dimension() {
        let mut store = VectorStore::new(3);
        let err = store.append(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn get_out_of_range_fails() {
        let mut store = VectorStore::new(2);
        store.append(&[1.0, 1.0]).unwrap();
        assert!(store.get(1).is_err());
    }
}
