//! NDJSON request/response types for the serve loop. One JSON object per
//! line in, one per line out; errors are reported in-band with the same
//! status strings a gRPC transport would use.

use crate::domain::error::DomainError;
use crate::CineMatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Add {
        id: String,
        title: String,
        #[serde(default)]
        overview: String,
    },
    Similar {
        id: String,
    },
    Recommend {
        id: String,
        limit: usize,
    },
    Stats,
}

#[derive(Debug, Serialize)]
pub struct MovieRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Added {
        status: &'static str,
        embedding: Vec<f32>,
    },
    Similar {
        status: &'static str,
        movie: MovieRef,
    },
    Recommendations {
        status: &'static str,
        recommendations: Vec<MovieRef>,
    },
    Stats {
        status: &'static str,
        count: usize,
        dimension: usize,
    },
    Error {
        status: &'static str,
        message: String,
    },
}

impl Response {
    pub fn from_error(err: DomainError) -> Self {
        Response::Error {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

/// Dispatches one parsed request against the service facade.
pub async fn handle(cm: &CineMatch, request: Request) -> Response {
    let result = match request {
        Request::Add {
            id,
            title,
            overview,
        } => cm
            .add_movie(&id, &title, &overview)
            .await
            .map(|embedding| Response::Added {
                status: "OK",
                embedding,
            }),
        Request::Similar { id } => cm.similar_movie(&id).map(|m| Response::Similar {
            status: "OK",
            movie: MovieRef {
                id: m.id,
                title: m.title,
            },
        }),
        Request::Recommend { id, limit } => {
            cm.similar_movies(&id, limit).map(|movies| {
                Response::Recommendations {
                    status: "OK",
                    recommendations: movies
                        .into_iter()
                        .map(|m| MovieRef {
                            id: m.id,
                            title: m.title,
                        })
                        .collect(),
                }
            })
        }
        Request::Stats => Ok(Response::Stats {
            status: "OK",
            count: cm.movie_count(),
            dimension: cm.dimension(),
        }),
    };

    result.unwrap_or_else(Response::from_error)
}
