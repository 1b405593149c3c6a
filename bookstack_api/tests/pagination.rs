use bookstack_api::types::Book;
use bookstack_api::{Client, Config, Error, ErrorCategory};
use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    Client::new(Config::new(&server.uri(), "test-id", "test-secret")).unwrap()
}

fn books(ids: &[i64]) -> serde_json::Value {
    ids.iter()
        .map(|id| json!({"id": id, "name": format!("Book {}", id)}))
        .collect()
}

async fn page_requests(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn walks_pages_by_returned_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[1, 2]), "total": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[3]), "total": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Book> = client
        .books()
        .list_all()
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    let ids: Vec<i64> = items.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(items[2].name, "Book 3");
    assert_eq!(page_requests(&server).await, 2);
}

#[tokio::test]
async fn early_stop_fetches_no_more_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": books(&[1, 2, 3]), "total": 100})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let taken: Vec<Book> = client
        .books()
        .list_all()
        .take(2)
        .map(Result::unwrap)
        .collect()
        .await;

    assert_eq!(taken.len(), 2);
    assert_eq!(page_requests(&server).await, 1);
}

#[tokio::test]
async fn stream_is_lazy_until_polled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[1]), "total": 1})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut stream = Box::pin(client.books().list_all());
    assert_eq!(page_requests(&server).await, 0);

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.id, 1);
    assert!(stream.next().await.is_none());
    assert_eq!(page_requests(&server).await, 1);
}

#[tokio::test]
async fn empty_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert!(items.is_empty());
    assert_eq!(page_requests(&server).await, 1);
}

#[tokio::test]
async fn empty_page_stops_even_if_total_is_higher() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[1]), "total": 50})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 50})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(items.len(), 1);
    assert_eq!(page_requests(&server).await, 2);
}

#[tokio::test]
async fn first_page_error_is_yielded_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(items.len(), 1);
    let err = items.into_iter().next().unwrap().unwrap_err();
    assert_eq!(err.api_error().map(|e| e.status), Some(500));
    assert_eq!(page_requests(&server).await, 1);
}

#[tokio::test]
async fn mid_stream_error_terminates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[1, 2]), "total": 6})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(
            json!({"error": {"code": 403, "message": "You do not have permission"}}),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_ok());
    let err = items[2].as_ref().unwrap_err();
    assert!(err.is(ErrorCategory::Forbidden));
    assert_eq!(page_requests(&server).await, 2);
}

#[tokio::test]
async fn malformed_page_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": "not a list", "total": 1})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::Decode(_))));
}

#[tokio::test]
async fn page_without_data_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::Decode(_))), "got {:?}", items[0]);
}

#[tokio::test]
async fn independent_streams_keep_their_own_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": books(&[1, 2]), "total": 2})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    let second: Vec<Result<Book, Error>> = client.books().list_all().collect().await;
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn generic_paginate_appends_to_existing_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages"))
        .and(query_param("filter[book_id]", "4"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": [{"id": 8, "book_id": 4, "name": "Intro"}], "total": 1}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let pages: Vec<Result<bookstack_api::types::Page, Error>> = client
        .paginate("/api/pages?filter%5Bbook_id%5D=4")
        .collect()
        .await;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].as_ref().unwrap().book_id, 4);
}
