pub mod application;
pub mod cli;
pub mod domain;
pub mod index;
pub mod infrastructure;

use crate::application::add_movie::AddMovieUseCase;
use crate::application::recommend::RecommendUseCase;
use crate::domain::entities::movie::Movie;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::index::MovieIndex;
use crate::infrastructure::embeddings::hashing::HashingProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::embeddings::voyage::VoyageProvider;
use std::sync::Arc;

pub struct CineMatch {
    add_movie_uc: AddMovieUseCase,
    recommend_uc: RecommendUseCase,
    index: Arc<MovieIndex>,
}

impl CineMatch {
    /// Builds an instance from environment configuration:
    /// `CINEMATCH_EMBEDDING_PROVIDER` (`openai`, `voyage`, anything else falls
    /// back to the offline hashing provider), `CINEMATCH_EMBEDDING_API_KEY`,
    /// `CINEMATCH_EMBEDDING_MODEL`. `dim` (the binary's `--dim` flag)
    /// overrides the provider's native dimension; the index is sized from
    /// whichever wins.
    pub fn new(dim: Option<usize>) -> Result<Self, DomainError> {
        let provider =
            std::env::var("CINEMATCH_EMBEDDING_PROVIDER").unwrap_or_else(|_| "hashing".into());
        let api_key = std::env::var("CINEMATCH_EMBEDDING_API_KEY").unwrap_or_default();
        let model = std::env::var("CINEMATCH_EMBEDDING_MODEL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = match provider.as_str() {
            "voyage" => Arc::new(VoyageProvider::new(api_key, model, None, dim)),
            "openai" => Arc::new(OpenAiProvider::new(api_key, model, dim)),
            _ => Arc::new(HashingProvider::new(dim.unwrap_or(HashingProvider::DEFAULT_DIM))),
        };

        Self::with_provider(embedder)
    }

    /// Explicit dependency injection; the index dimension is taken from the
    /// provider so every stored vector is validated against it.
    pub fn with_provider(embedder: Arc<dyn EmbeddingProvider>) -> Result<Self, DomainError> {
        let dim = embedder.dimension();
        if dim == 0 {
            return Err(DomainError::InvalidInput(
                "embedding provider reports dimension 0".into(),
            ));
        }

        let index = Arc::new(MovieIndex::new(dim));
        Ok(Self {
            add_movie_uc: AddMovieUseCase::new(index.clone(), embedder),
            recommend_uc: RecommendUseCase::new(index.clone()),
            index,
        })
    }

    // Delegating methods
    pub async fn add_movie(
        &self,
        id: &str,
        title: &str,
        overview: &str,
    ) -> Result<Vec<f32>, DomainError> {
        self.add_movie_uc.execute(id, title, overview).await
    }

    pub fn similar_movie(&self, id: &str) -> Result<Movie, DomainError> {
        self.recommend_uc.similar(id)
    }

    pub fn similar_movies(&self, id: &str, limit: usize) -> Result<Vec<Movie>, DomainError> {
        self.recommend_uc.similar_many(id, limit)
    }

    pub fn movie_count(&self) -> usize {
        self.index.len()
    }

    pub fn dimension(&self) -> usize {
        self.index.dim()
    }
}
