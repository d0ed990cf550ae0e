use cinematch::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use cinematch::CineMatch;
use std::sync::Arc;

/// Test provider that reads the vector straight out of the movie overview:
/// the text after the last ':' is parsed as comma-separated floats. Lets
/// tests pin exact vectors without a network.
pub struct ParsingProvider {
    dim: usize,
}

impl ParsingProvider {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for ParsingProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, String> {
        texts
            .iter()
            .map(|text| {
                let tail = text.rsplit(':').next().unwrap_or_default();
                tail.split(',')
                    .map(|part| part.trim().parse::<f32>().map_err(|e| e.to_string()))
                    .collect::<Result<Vec<f32>, String>>()
            })
            .collect()
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

/// Provider that always fails, for exercising the encoder-failure path.
pub struct FailingProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed(&self, _texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, String> {
        Err("encoder unavailable".to_string())
    }

    fn dimension(&self) -> usize {
        2
    }
}

pub fn setup(dim: usize) -> CineMatch {
    CineMatch::with_provider(Arc::new(ParsingProvider::new(dim))).unwrap()
}

/// Adds a movie whose embedding is exactly `vector`.
pub async fn add_with_vector(cm: &CineMatch, id: &str, title: &str, vector: &[f32]) {
    let overview = vector
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(",");
    cm.add_movie(id, title, &overview).await.unwrap();
}
