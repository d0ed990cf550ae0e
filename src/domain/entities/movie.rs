use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered movie: the external identifier, display title, and the
/// permanent slot its embedding occupies in the vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub slot: usize,
    pub added_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(id: String, title: String, slot: usize) -> Self {
        Self {
            id,
            title,
            slot,
            added_at: Utc::now(),
        }
    }

    /// Text fed to the embedding provider when indexing a movie.
    pub fn embedding_text(title: &str, overview: &str) -> String {
        format!("{title}: {overview}")
    }
}
