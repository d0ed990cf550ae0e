use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Offline fallback provider: feature-hashed bag of words.
///
/// Each lowercased token is hashed into one of `dim` buckets and the bucket
/// counts are L2-normalized. Deterministic for a given input, needs no
/// network or API key, and still puts texts with shared vocabulary close
/// together, so it is usable for local runs and tests. Default dimension 384
/// matches the MiniLM-class models this index is typically fed from.
pub struct HashingProvider {
    dim: usize,
}

impl HashingProvider {
    pub const DEFAULT_DIM: usize = 384;

    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0_f32; self.dim];
        for token in text.split_whitespace() {
            let token: String = token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let bucket = (hasher.finish() % self.dim as u64) as usize;
            v[bucket] += 1.0;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

impl Default for HashingProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIM)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashingProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, String> {
        Ok(texts.iter().map(|t| self.encode(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deterministic_for_same_input() {
        let provider = HashingProvider::new(64);
        let a = provider
            .embed(&["Dune: desert planet spice".into()], InputType::Document)
            .await
            .unwrap();
        let b = provider
            .embed(&["Dune: desert planet spice".into()], InputType::Document)
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].len(), 64);
    }

    #[tokio::test]
    async fn output_is_normalized() {
        let provider = HashingProvider::new(32);
        let v = &provider
            .embed(&["a b c d".into()], InputType::Document)
            .await
            .unwrap()[0];
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }
}
