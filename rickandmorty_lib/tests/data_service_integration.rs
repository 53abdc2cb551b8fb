use std::net::TcpListener;
use std::time::Duration;

use rickandmorty_api::{CharacterQuery, Client, ErrorKind};
use rickandmorty_lib::{DataService, SearchInput, ServiceConfig, ViewController};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../rickandmorty_api/tests/fixtures/{}", name)).unwrap()
}

/// Address of a port that was bound and released, so nothing is listening on it.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn character_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "unknown", "url": "" },
        "location": { "name": "unknown", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        "episode": [],
        "url": format!("https://rickandmortyapi.com/api/character/{}", id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn page_json(pages: i64, characters: Vec<Value>) -> Value {
    json!({
        "info": { "count": characters.len(), "pages": pages, "next": null, "prev": null },
        "results": characters
    })
}

fn ids(characters: &[rickandmorty_lib::types::Character]) -> Vec<i64> {
    characters.iter().map(|c| c.id).collect()
}

#[tokio::test]
async fn get_all_characters_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("characters.json")))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let characters = service.get_all_characters().await;
    assert_eq!(ids(&characters), vec![1, 2, 3, 8]);
}

#[tokio::test]
async fn get_all_characters_server_error_yields_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert!(service.get_all_characters().await.is_empty());
}

#[tokio::test]
async fn get_all_characters_transport_error_yields_empty() {
    let uri = closed_port_url();

    // Nothing listens there, so the client sees a connection failure.
    let err = Client::with_base_url(&uri)
        .with_timeout(Duration::from_secs(2))
        .get_characters(&CharacterQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);

    let config = ServiceConfig {
        base_url: uri,
        timeout: Duration::from_secs(2),
    };
    let service = DataService::with_config(&config);
    assert!(service.get_all_characters().await.is_empty());
}

#[tokio::test]
async fn get_characters_by_page_success_and_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            2,
            vec![character_json(21, "Aqua Morty")],
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "99"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"There is nothing here"}"#))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert_eq!(ids(&service.get_characters_by_page(2).await), vec![21]);
    assert!(service.get_characters_by_page(99).await.is_empty());
}

#[tokio::test]
async fn blank_search_matches_get_all_characters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("characters.json")))
        .expect(3)
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let all = service.get_all_characters().await;
    assert_eq!(service.search_characters_by_name("").await, all);
    assert_eq!(service.search_characters_by_name("   ").await, all);
}

#[tokio::test]
async fn search_by_name_sends_name_filter() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/"))
        .and(query_param("name", "smith"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            1,
            vec![character_json(2, "Morty Smith"), character_json(3, "Summer Smith")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let characters = service.search_characters_by_name("smith").await;
    assert_eq!(ids(&characters), vec![2, 3]);
}

#[tokio::test]
async fn search_with_no_match_yields_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"There is nothing here"}"#))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert!(service.search_characters_by_name("zzz").await.is_empty());
}

#[tokio::test]
async fn get_character_by_id_found_and_missing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("character_single.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"Character not found"}"#))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let found = service.get_character_by_id(6).await;
    assert_eq!(found.map(|c| c.name).as_deref(), Some("Abadango Cluster Princess"));
    assert!(service.get_character_by_id(9999).await.is_none());
}

#[tokio::test]
async fn get_multiple_characters_success_and_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/1,183"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("characters_multiple.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character/1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert_eq!(ids(&service.get_multiple_characters(&[1, 183]).await), vec![1, 183]);
    assert!(service.get_multiple_characters(&[1, 2]).await.is_empty());
}

#[tokio::test]
async fn get_api_info_failure_is_none() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert!(service.get_api_info().await.is_none());
}

async fn mount_three_pages(mock_server: &MockServer, page_two: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(3, vec![])))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(
                    3,
                    vec![character_json(1, "Rick Sanchez"), character_json(2, "Morty Smith")],
                ))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "2"))
        .respond_with(page_two)
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(3, vec![character_json(5, "Jerry Smith")])),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn get_every_character_keeps_page_order() {
    let mock_server = MockServer::start().await;
    mount_three_pages(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(page_json(
            3,
            vec![character_json(3, "Summer Smith"), character_json(4, "Beth Smith")],
        )),
    )
    .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let characters = service.get_every_character().await;
    assert_eq!(ids(&characters), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn get_every_character_skips_failed_page() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server, ResponseTemplate::new(500)).await;

    let service = DataService::with_base_url(&mock_server.uri());
    let characters = service.get_every_character().await;
    assert_eq!(ids(&characters), vec![1, 2, 5]);
}

#[tokio::test]
async fn get_every_character_without_info_is_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    assert!(service.get_every_character().await.is_empty());
}

#[tokio::test]
async fn controller_mounted_on_service_filters_fixture() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("characters.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let mut view = ViewController::new();
    view.mount(&service).await;
    view.mount(&service).await;

    assert!(!view.is_loading());
    assert!(view.error().is_none());
    assert_eq!(view.characters().len(), 4);

    view.on_search_input(SearchInput::new("Smith"));
    let names: Vec<&str> = view
        .filtered_characters()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Morty Smith", "Summer Smith"]);
}

#[tokio::test]
async fn controller_on_failing_service_shows_empty_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = DataService::with_base_url(&mock_server.uri());
    let mut view = ViewController::new();
    view.mount(&service).await;

    assert!(!view.is_loading());
    assert!(view.characters().is_empty());
    // The service absorbed the failure, so the view has nothing to report.
    assert!(view.error().is_none());
}
