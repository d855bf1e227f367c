//! Atlas Search index endpoint tests.
//!
//! # Invariants
//! - Records are returned in the order the API produced them
//! - Pagination parameters are only sent when non-zero
//! - Non-success responses surface the Atlas error detail

mod common;

use common::*;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_list_search_indexes_preserves_order() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("search_indexes/list_search_indexes.json");

    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let indexes = client
        .list_search_indexes(&movies_params())
        .await
        .expect("list should succeed");

    assert_eq!(indexes.len(), 2);
    assert_eq!(indexes[0].name, "default");
    assert_eq!(indexes[1].name, "titles");
    assert_eq!(indexes[1].analyzers.len(), 2);
    assert_eq!(indexes[1].analyzers[1].name_str(), Some("keywordAnalyzer"));
    assert!(indexes[0].mappings.dynamic);
    assert!(indexes[0].mappings.fields.is_none());
}

#[tokio::test]
async fn test_default_paging_sends_no_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .and(query_param_is_missing("pageNum"))
        .and(query_param_is_missing("itemsPerPage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let indexes = client.list_search_indexes(&movies_params()).await.unwrap();
    assert!(indexes.is_empty());
}

#[tokio::test]
async fn test_explicit_paging_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .and(query_param("pageNum", "2"))
        .and(query_param("itemsPerPage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let params = ListSearchIndexesParams {
        page_num: 2,
        items_per_page: 50,
        ..movies_params()
    };
    client.list_search_indexes(&params).await.unwrap();
}

#[tokio::test]
async fn test_paginated_envelope_is_accepted() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("search_indexes/list_search_indexes_paginated.json");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let indexes = client.list_search_indexes(&movies_params()).await.unwrap();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes[0].mappings.fields, Some(serde_json::json!({})));
}

#[tokio::test]
async fn test_api_error_uses_atlas_detail() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("search_indexes/error_cluster_not_found.json");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 3);
    let err = client
        .list_search_indexes(&movies_params())
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            message,
            error_code,
            ..
        } => {
            assert_eq!(status, 404);
            assert!(message.contains("No cluster named Cluster9"));
            assert_eq!(error_code.as_deref(), Some("CLUSTER_NOT_FOUND"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 3);
    let err = client
        .list_search_indexes(&movies_params())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let err = client
        .list_search_indexes(&movies_params())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_mistyped_record_error_names_position() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"indexID": "ok1", "name": "fine"},
            {"indexID": "bad-id", "name": ["not", "a", "string"]}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 0);
    let err = client
        .list_search_indexes(&movies_params())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(message.contains("search index #1"), "{message}");
    assert!(message.contains("invalid type"), "{message}");
}
