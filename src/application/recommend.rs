use crate::domain::entities::movie::Movie;
use crate::domain::error::DomainError;
use crate::index::MovieIndex;
use std::sync::Arc;

pub struct RecommendUseCase {
    index: Arc<MovieIndex>,
}

impl RecommendUseCase {
    pub fn new(index: Arc<MovieIndex>) -> Self {
        Self { index }
    }

    /// The single closest movie to `id`, or `NotFound` when no other movie
    /// exists (unknown id included).
    pub fn similar(&self, id: &str) -> Result<Movie, DomainError> {
        let mut neighbors = self.index.neighbors_of(id, 1)?;
        match neighbors.pop() {
            Some(n) => Ok(Movie::new(n.id, n.title, n.slot)),
            None => Err(DomainError::NotFound(format!(
                "no movie similar to {id} exists yet"
            ))),
        }
    }

    /// Up to `limit` closest movies to `id`, the movie itself excluded.
    pub fn similar_many(&self, id: &str, limit: usize) -> Result<Vec<Movie>, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidInput("limit must be positive".into()));
        }
        let neighbors = self.index.neighbors_of(id, limit)?;
        Ok(neighbors
            .into_iter()
            .map(|n| Movie::new(n.id, n.title, n.slot))
            .collect())
    }
}
