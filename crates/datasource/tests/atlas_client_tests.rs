//! End-to-end reads through `AtlasClient` against a mock Atlas API.

mod common;

use std::time::Duration;

use atlas_client::AtlasClient;
use atlas_client::testing::load_fixture;
use common::*;
use wiremock::matchers::{bearer_token, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MOVIES_PATH: &str =
    "/api/atlas/v1.0/groups/5e2211c17a3e5a48f5497de3/clusters/Cluster0/fts/indexes/sample_mflix/movies";

fn client_for(server: &MockServer) -> AtlasClient {
    AtlasClient::builder()
        .base_url(server.uri())
        .api_token("test-token".to_string())
        .max_retries(1)
        .retry_base_delay(Duration::from_millis(5))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn test_read_through_atlas_client() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .and(bearer_token("test-token"))
        .and(query_param_is_missing("pageNum"))
        .and(query_param_is_missing("itemsPerPage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("search_indexes/list_search_indexes.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut data = movies_inputs();
    read_search_indexes(&client, &mut data).await.unwrap();

    assert_eq!(data.get_output("total_count"), Some(&json!(2)));
    let results = data.get_output("results").unwrap();
    assert_eq!(results[0]["index_id"], "5d1268a980eef518dac0cf41");
    assert_eq!(results[0]["analyzers"], Value::Null);
    assert!(results[0].get("mappings_fields").is_none());

    assert_eq!(results[1]["name"], "titles");
    assert_eq!(results[1]["collection_name"], "movies");
    assert_eq!(results[1]["analyzers"].as_array().unwrap().len(), 2);
    let fields: Value =
        serde_json::from_str(results[1]["mappings_fields"].as_str().unwrap()).unwrap();
    assert_eq!(fields["awards"]["fields"]["wins"]["type"], "number");
}

#[tokio::test]
async fn test_pagination_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .and(query_param("pageNum", "2"))
        .and(query_param("itemsPerPage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut data = ResourceData::from_json(json!({
        "project_id": "5e2211c17a3e5a48f5497de3",
        "cluster_name": "Cluster0",
        "database": "sample_mflix",
        "collection_name": "movies",
        "page_num": 2,
        "items_per_page": 50
    }))
    .unwrap();
    read_search_indexes(&client, &mut data).await.unwrap();

    assert_eq!(data.get_output("results"), Some(&Value::Null));
    assert_eq!(data.get_output("total_count"), Some(&json!(0)));
}

#[tokio::test]
async fn test_api_error_is_reported_with_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(load_fixture("search_indexes/error_cluster_not_found.json")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut data = movies_inputs();
    let err = read_search_indexes(&client, &mut data).await.unwrap_err();

    assert!(matches!(err, DataSourceError::RemoteFetch(_)));
    let message = err.to_string();
    assert!(message.starts_with("error getting search indexes information: "));
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("CLUSTER_NOT_FOUND"), "{message}");
    assert!(data.get_output("results").is_none());
    assert!(data.id().is_none());
}

#[tokio::test]
async fn test_validation_failure_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut data = ResourceData::from_json(json!({"project_id": "p1"})).unwrap();
    let err = read_search_indexes(&client, &mut data).await.unwrap_err();

    assert!(matches!(err, DataSourceError::Validation(_)));
}

#[tokio::test]
async fn test_non_string_analyzer_name_is_a_flatten_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MOVIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"indexID": "ok1", "name": "fine"},
            {
                "indexID": "bad-id",
                "name": "broken",
                "analyzers": [{"name": 5, "tokenizer": {"type": "standard"}}]
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut data = movies_inputs();
    let err = read_search_indexes(&client, &mut data).await.unwrap_err();

    assert!(
        matches!(
            err,
            DataSourceError::Flatten { ref index_id, ref name, .. }
                if index_id == "bad-id" && name == "broken"
        ),
        "{err:?}"
    );
    assert!(data.get_output("results").is_none());
}

#[tokio::test]
async fn test_connection_refused_keeps_underlying_cause() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = AtlasClient::builder()
        .base_url(format!("http://127.0.0.1:{port}"))
        .api_token("test-token".to_string())
        .max_retries(0)
        .build()
        .expect("client should build");
    let mut data = movies_inputs();

    let err = read_search_indexes(&client, &mut data).await.unwrap_err();

    assert!(matches!(err, DataSourceError::RemoteFetch(_)));
    let message = err.to_string().to_lowercase();
    assert!(message.contains("refused"), "{message}");
    assert!(data.get_output("results").is_none());
    assert!(data.id().is_none());
}
