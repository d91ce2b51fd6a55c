use piece_catalog::client::CatalogClient;
use piece_catalog::codec::MediaType;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_requests_declare_client_media_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pieces"))
        .and(header("content-type", "application/xml"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("content-type", "application/xml")
                .set_body_string("<Pieces></Pieces>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri(), MediaType::Xml);
    let response = client.list("pieces").await.unwrap();

    assert_eq!(response.status, 202);
    assert!(response.is_success());
    assert_eq!(response.content_type.as_deref(), Some("application/xml"));
    assert_eq!(response.body, "<Pieces></Pieces>");
}

#[tokio::test]
async fn test_create_and_update_send_body_verbatim() {
    let mock_server = MockServer::start().await;
    let studio = r#"[{"studio_name": "Studio 6", "email": "email6@email.com", "phone": "+56-1"}]"#;

    Mock::given(method("POST"))
        .and(path("/api/studios"))
        .and(header("content-type", "application/json"))
        .and(body_string(studio))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/studios/2"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Studio 2 does not exist"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Trailing slash on the base URL is tolerated
    let client = CatalogClient::new(&format!("{}/", mock_server.uri()), MediaType::Json);
    assert_eq!(client.create("studios", studio).await.unwrap().status, 202);

    let response = client.update("studios", 2, studio).await.unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_filter_queries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pieces/1/evaluations"))
        .and(query_param("date", "2021-08-11"))
        .and(query_param("start", "1"))
        .and(query_param("end", "2"))
        .respond_with(ResponseTemplate::new(202).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/evaluations"))
        .and(query_param("pattern", "good"))
        .respond_with(ResponseTemplate::new(202).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/studios/2/pieces"))
        .respond_with(ResponseTemplate::new(202).set_body_string(r#"{"number of pieces":2}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri(), MediaType::Json);

    let window = client
        .evaluations_for_piece(1, Some("2021-08-11"), Some(1), Some(2))
        .await
        .unwrap();
    assert_eq!(window.status, 202);

    let search = client.search_evaluations("good").await.unwrap();
    assert_eq!(search.body, "[]");

    let count = client.count_pieces_by_studio(2).await.unwrap();
    assert_eq!(count.body, r#"{"number of pieces":2}"#);
}

#[tokio::test]
async fn test_delete_targets_record_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/evaluations/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri(), MediaType::Xml).with_media(MediaType::Json);
    assert_eq!(client.media(), MediaType::Json);

    let response = client.delete("evaluations", 3).await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_an_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = CatalogClient::new(&uri, MediaType::Xml);
    assert!(client.get("pieces", 1).await.is_err());
}
