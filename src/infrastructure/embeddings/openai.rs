use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI embeddings adapter. The index sizes its vector store from
/// `dimension()`, so when a dimension override is configured it is also sent
/// with every request (the `dimensions` parameter truncates server-side);
/// otherwise the model's native width is reported.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    dimensions: Option<usize>,
}

#[derive(Serialize)]
struct OpenAiRequest {
    input: Vec<String>,
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    data: Vec<OpenAiEmbedding>,
}

#[derive(Deserialize)]
struct OpenAiEmbedding {
    embedding: Vec<f32>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>, dimensions: Option<usize>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "text-embedding-3-small".to_string()),
            dimensions,
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "text-embedding-3-large" => 3072,
            "text-embedding-3-small" | "text-embedding-ada-002" => 1536,
            _ => 1536,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, String> {
        let resp = self.client
            .post("https://api.openai.com/v1/embeddings")
            .bearer_auth(&self.api_key)
            .json(&OpenAiRequest {
                input: texts.to_vec(),
                model: self.model.clone(),
                dimensions: self.dimensions,
            })
            .send()
            .await
            .map_err(|e| format!("OpenAI API error: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("OpenAI API {status}: {body}"));
        }

        let result: OpenAiResponse = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
        Ok(result.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.dimensions
            .unwrap_or_else(|| Self::model_dimension(&self.model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_prefers_the_configured_override() {
        let provider = OpenAiProvider::new(String::new(), None, Some(384));
        assert_eq!(provider.dimension(), 384);
    }

    #[test]
    fn dimension_falls_back_to_the_model_width() {
        let provider =
            OpenAiProvider::new(String::new(), Some("text-embedding-3-large".into()), None);
        assert_eq!(provider.dimension(), 3072);
    }
}
