mod common;

use cinematch::cli::protocol::{handle, Request, Response};
use common::{add_with_vector, setup};

#[tokio::test]
async fn test_status_codes_match_transport_contract() {
    let cm = setup(2);
    add_with_vector(&cm, "1", "One", &[1.0, 0.0]).await;

    // Unknown id surfaces NOT_FOUND
    let response = handle(&cm, Request::Similar { id: "ghost".into() }).await;
    match response {
        Response::Error { status, .. } => assert_eq!(status, "NOT_FOUND"),
        other => panic!("expected error, got {other:?}"),
    }

    // Duplicate id surfaces INVALID_ARGUMENT
    let response = handle(
        &cm,
        Request::Add {
            id: "1".into(),
            title: "One again".into(),
            overview: "0,1".into(),
        },
    )
    .await;
    match response {
        Response::Error { status, .. } => assert_eq!(status, "INVALID_ARGUMENT"),
        other => panic!("expected error, got {other:?}"),
    }

    // Zero limit surfaces INVALID_ARGUMENT
    let response = handle(
        &cm,
        Request::Recommend {
            id: "1".into(),
            limit: 0,
        },
    )
    .await;
    match response {
        Response::Error { status, .. } => assert_eq!(status, "INVALID_ARGUMENT"),
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_happy_path_round_trip() {
    let cm = setup(2);
    add_with_vector(&cm, "1", "One", &[1.0, 0.0]).await;
    add_with_vector(&cm, "2", "Two", &[1.0, 0.5]).await;

    let response = handle(&cm, Request::Similar { id: "1".into() }).await;
    match response {
        Response::Similar { status, movie } => {
            assert_eq!(status, "OK");
            assert_eq!(movie.id, "2");
            assert_eq!(movie.title, "Two");
        }
        other => panic!("expected similar, got {other:?}"),
    }

    let response = handle(&cm, Request::Stats).await;
    match response {
        Response::Stats {
            status,
            count,
            dimension,
        } => {
            assert_eq!(status, "OK");
            assert_eq!(count, 2);
            assert_eq!(dimension, 2);
        }
        other => panic!("expected stats, got {other:?}"),
    }

    let serialized = serde_json::to_string(&handle(&cm, Request::Stats).await).unwrap();
    assert!(serialized.contains("\"status\":\"OK\""));
}
