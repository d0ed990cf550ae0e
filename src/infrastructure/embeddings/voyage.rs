use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Voyage AI embeddings adapter. Voyage embeds documents and queries
/// asymmetrically, so the input type is forwarded; a configured dimension
/// override is sent as `output_dimension` and reported to the index,
/// otherwise the model's native width is used.
pub struct VoyageProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    dimensions: Option<usize>,
}

#[derive(Serialize)]
struct VoyageRequest {
    input: Vec<String>,
    model: String,
    input_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dimension: Option<usize>,
}

#[derive(Deserialize)]
struct VoyageResponse {
    data: Vec<VoyageEmbedding>,
}

#[derive(Deserialize)]
struct VoyageEmbedding {
    embedding: Vec<f32>,
}

impl VoyageProvider {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        dimensions: Option<usize>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "voyage-4-lite".to_string()),
            base_url: base_url.unwrap_or_else(|| "https://api.voyageai.com".to_string()),
            dimensions,
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "voyage-4-lite" | "voyage-3-lite" => 512,
            "voyage-3" | "voyage-code-3" => 1024,
            "voyage-3-large" | "voyage-large-2" => 1536,
            _ => 512,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for VoyageProvider {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, String> {
        let it = match input_type {
            InputType::Document => "document",
            InputType::Query => "query",
        };

        let url = format!("{}/v1/embeddings", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&VoyageRequest {
                input: texts.to_vec(),
                model: self.model.clone(),
                input_type: it.to_string(),
                output_dimension: self.dimensions,
            })
            .send()
            .await
            .map_err(|e| format!("Voyage API error: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Voyage API {status}: {body}"));
        }

        let result: VoyageResponse = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
        Ok(result.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.dimensions
            .unwrap_or_else(|| Self::model_dimension(&self.model))
    }
}
