/// Whether the text being embedded is a movie document going into the index
/// or a free-form query; providers that embed the two asymmetrically need
/// the distinction.
#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

/// Boundary to the external encoder. `dimension` is the fixed width the
/// index sizes its vector store against; every vector returned by `embed`
/// is validated against it before insertion.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, String>;
    fn dimension(&self) -> usize;
}
