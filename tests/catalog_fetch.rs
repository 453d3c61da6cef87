use neocomet::{
    env_state::ExplorerConfig, explorer::CometExplorer, neocomet_errors::NeoCometError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DATASET_PATH: &str = "/resource/b67r-rgxc.json";

fn explorer_for(server: &MockServer) -> CometExplorer {
    let config = ExplorerConfig {
        dataset_url: format!("{}{DATASET_PATH}", server.uri()),
        request_timeout: 5,
        ..Default::default()
    };
    CometExplorer::new(config).unwrap()
}

fn encke_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "object": "2P/Encke",
            "epoch_tdb": "54629",
            "tp_tdb": "2455248.5",
            "e": "0.8483",
            "i_deg": "11.78",
            "w_deg": "186.5",
            "node_deg": "334.57",
            "q_au_1": "0.34",
            "q_au_2": "4.09",
            "p_yr": "3.3",
            "moid_au": "0.173",
            "ref": "20"
        }
    ])
}

#[tokio::test]
async fn catalog_reports_server_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&mock_server)
        .await;

    let explorer = explorer_for(&mock_server);
    assert_eq!(
        explorer.load_catalog().await.unwrap_err(),
        NeoCometError::FetchFailed { status: 503 }
    );
    assert_eq!(
        explorer.catalog().await.unwrap_err(),
        NeoCometError::FetchFailed { status: 503 }
    );
    assert_eq!(
        explorer.derive(None).await.unwrap_err(),
        NeoCometError::FetchFailed { status: 503 }
    );
}

#[tokio::test]
async fn catalog_accepts_empty_dataset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let explorer = explorer_for(&mock_server);
    let catalog = explorer.catalog().await.unwrap();
    assert_eq!(catalog.len(), 0);
    assert!(explorer.derive(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn catalog_is_fetched_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(encke_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let explorer = explorer_for(&mock_server);
    let derived = explorer.derive(None).await.unwrap();
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].raw.designation, "2P/Encke");

    // Served from the cached catalog, the mock expects a single request
    assert_eq!(explorer.derive(None).await.unwrap().len(), 1);
    assert_eq!(explorer.catalog().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_fetch_is_retried_on_next_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(encke_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let explorer = explorer_for(&mock_server);
    assert_eq!(
        explorer.catalog().await.unwrap_err(),
        NeoCometError::FetchFailed { status: 503 }
    );

    let catalog = explorer.catalog().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find("2P/Encke").is_some());
}
