//! Tests for the suggestion HTTP client

use std::time::Duration;

use proptest::prelude::*;

use super::*;
use crate::test_utils::test_helpers::{
    refused_endpoint, serve_once, serve_once_after, test_runtime,
};

fn client_for(endpoint: Url) -> SuggestClient {
    SuggestClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

fn endpoint(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

#[test]
fn test_request_url_has_query_and_limit() {
    let client = client_for(endpoint("http://127.0.0.1:5000/api/books"));
    let url = client.request_url("dune");
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/books?q=dune&limit=10");
}

#[test]
fn test_request_url_encodes_query() {
    let client = client_for(endpoint("http://127.0.0.1:5000/api/books"));
    let url = client.request_url("war & peace");

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), "war & peace".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]
    );
}

#[test]
fn test_request_url_keeps_existing_pairs() {
    let client = client_for(endpoint("http://books.local/api/books?lang=en"));
    let url = client.request_url("du");
    assert_eq!(url.query(), Some("lang=en&q=du&limit=10"));
}

#[test]
fn test_request_url_replaces_existing_query_and_limit() {
    let client = client_for(endpoint("http://books.local/api/books?q=x&lang=en&limit=3"));
    let url = client.request_url("dune");

    assert_eq!(url.query(), Some("lang=en&q=dune&limit=10"));
    let queries: Vec<String> = url
        .query_pairs()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(queries, vec!["dune".to_string()]);
}

#[test]
fn test_request_url_does_not_mutate_endpoint() {
    let client = client_for(endpoint("http://books.local/api/books"));
    let _ = client.request_url("first");
    let url = client.request_url("second");
    assert_eq!(url.query(), Some("q=second&limit=10"));
    assert_eq!(client.endpoint().query(), None);
}

#[test]
fn test_fetch_success_returns_books_in_order() {
    let server = serve_once("200 OK", r#"{"books": ["Dune", "Dune Messiah"]}"#);
    let client = client_for(server.url.clone());
    let token = CancellationToken::new();

    let result = test_runtime().block_on(client.fetch_suggestions("dune", &token));
    assert_eq!(result.unwrap(), vec!["Dune", "Dune Messiah"]);

    let request_line = server.request_line().unwrap();
    assert!(request_line.starts_with("GET /api/books?q=dune&limit=10 "));
}

#[test]
fn test_fetch_missing_field_is_empty() {
    let server = serve_once("200 OK", r#"{"total": 0}"#);
    let client = client_for(server.url.clone());

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert_eq!(result.unwrap(), Vec::<String>::new());
}

#[test]
fn test_fetch_server_error_is_empty_not_error() {
    let server = serve_once("500 Internal Server Error", r#"{"books": []}"#);
    let client = client_for(server.url.clone());

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert_eq!(result.unwrap(), Vec::<String>::new());
}

#[test]
fn test_fetch_not_found_is_empty_not_error() {
    let server = serve_once("404 Not Found", "not json at all");
    let client = client_for(server.url.clone());

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert_eq!(result.unwrap(), Vec::<String>::new());
}

#[test]
fn test_fetch_unparseable_body_is_body_error() {
    let server = serve_once("200 OK", "<html>oops</html>");
    let client = client_for(server.url.clone());

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert!(matches!(result, Err(SuggestError::Body(_))));
}

#[test]
fn test_fetch_connection_refused_is_transport_error() {
    let client = client_for(refused_endpoint());

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert!(matches!(result, Err(SuggestError::Transport(_))));
}

#[test]
fn test_fetch_timeout_is_transport_error() {
    let server = serve_once_after(Duration::from_millis(500), "200 OK", r#"{"books": ["Late"]}"#);
    let client = SuggestClient::new(server.url.clone(), Duration::from_millis(50)).unwrap();

    let result =
        test_runtime().block_on(client.fetch_suggestions("dune", &CancellationToken::new()));
    assert!(matches!(result, Err(SuggestError::Transport(_))));
}

#[test]
fn test_cancel_during_request_is_superseded() {
    let server = serve_once_after(Duration::from_millis(500), "200 OK", r#"{"books": ["Late"]}"#);
    let client = client_for(server.url.clone());
    let token = CancellationToken::new();
    let canceller = token.clone();

    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        canceller.cancel();
    });

    let result = test_runtime().block_on(client.fetch_suggestions("dune", &token));
    assert_eq!(result, Err(SuggestError::Superseded));
}

// A pre-cancelled token never reaches the network: even an endpoint that
// refuses connections reports Superseded rather than Transport.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_precancelled_token_is_superseded(query in "[a-zA-Z ]{2,30}") {
        let client = client_for(refused_endpoint());
        let token = CancellationToken::new();
        token.cancel();

        let result = test_runtime().block_on(client.fetch_suggestions(&query, &token));
        prop_assert_eq!(result, Err(SuggestError::Superseded));
    }
}
