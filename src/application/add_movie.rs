use crate::domain::entities::movie::Movie;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::index::MovieIndex;
use std::sync::Arc;

pub struct AddMovieUseCase {
    index: Arc<MovieIndex>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl AddMovieUseCase {
    pub fn new(index: Arc<MovieIndex>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { index, embedder }
    }

    /// Encodes the movie text and inserts it into the index.
    ///
    /// Encoding happens before any index mutation, so a provider failure (or
    /// a malformed vector) leaves the store and registry untouched. Returns
    /// the embedding, which the transport echoes back to the caller.
    pub async fn execute(
        &self,
        id: &str,
        title: &str,
        overview: &str,
    ) -> Result<Vec<f32>, DomainError> {
        // Cheap pre-check outside the embedding call; insert re-checks under
        // the write lock, which is the authoritative test.
        if self.index.lookup(id).is_some() {
            return Err(DomainError::DuplicateId(id.to_string()));
        }

        let text = Movie::embedding_text(title, overview);
        let vectors = self
            .embedder
            .embed(&[text], InputType::Document)
            .await
            .map_err(DomainError::Embedding)?;
        let vector = vectors
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::Embedding("provider returned no embedding".into()))?;
        if vector.len() != self.index.dim() {
            return Err(DomainError::Embedding(format!(
                "provider returned dimension {}, index expects {}",
                vector.len(),
                self.index.dim()
            )));
        }

        self.index.insert(id, title, &vector)?;
        Ok(vector)
    }
}
