//! Integration tests for `XApiClient` and the search invoker using wiremock HTTP mocks.

use pnkstr_xapi::{
    normalize_page, search, CallLogger, QueryStatus, SearchRequest, XApiClient, XApiError,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> XApiClient {
    XApiClient::with_base_url("test-token", 30, "pnkstr-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn two_post_body() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {
                "id": "1",
                "text": "hello\nworld",
                "created_at": "2025-01-15T12:00:00.000Z",
                "author_id": "u1",
                "lang": "en",
                "public_metrics": {
                    "like_count": 3,
                    "retweet_count": 2,
                    "reply_count": 1,
                    "quote_count": 0
                },
                "edit_history_tweet_ids": ["1"]
            },
            {
                "id": "2",
                "text": "$PNKSTR",
                "created_at": "2025-01-15T12:05:00.000Z",
                "author_id": "u2",
                "lang": "qme",
                "public_metrics": {
                    "like_count": 0,
                    "retweet_count": 0,
                    "reply_count": 0,
                    "quote_count": 1,
                    "impression_count": 40
                },
                "edit_history_tweet_ids": ["2"]
            }
        ],
        "includes": {
            "users": [
                { "id": "u1", "username": "alice", "name": "Alice", "verified": true }
            ]
        },
        "meta": {
            "newest_id": "2",
            "oldest_id": "1",
            "result_count": 2,
            "next_token": "b26v89c19zqg8o3f"
        }
    })
}

#[tokio::test]
async fn fetch_search_page_sends_bearer_and_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("query", "PNKSTR"))
        .and(query_param("max_results", "100"))
        .and(query_param("tweet.fields", "created_at,public_metrics,author_id,lang"))
        .and(query_param("expansions", "author_id"))
        .and(query_param("user.fields", "username,name,verified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_post_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 100).unwrap();
    let page = client
        .fetch_search_page(&request)
        .await
        .expect("should parse search page");

    assert_eq!(page.posts.len(), 2);
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.result_count, Some(2));
    assert_eq!(page.next_token.as_deref(), Some("b26v89c19zqg8o3f"));

    let records = normalize_page("PNKSTR", &page).unwrap();
    assert_eq!(records[0].text, "hello world");
    assert_eq!(records[0].author_username, "alice");
    assert!(records[0].author_verified);
    assert_eq!(records[1].author_username, "unknown");
    assert_eq!(records[1].impressions, 40);
    assert_eq!(records[0].impressions, 0);
}

#[tokio::test]
async fn unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "title": "Unauthorized",
            "type": "about:blank",
            "status": 401,
            "detail": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let err = client.fetch_search_page(&request).await.unwrap_err();

    assert!(
        matches!(err, XApiError::Api { status: 401, ref detail } if detail == "Unauthorized"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn problem_only_payload_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{ "detail": "Query contains an invalid operator", "title": "Invalid Request" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let err = client.fetch_search_page(&request).await.unwrap_err();

    let msg = err.to_string();
    assert!(
        msg.contains("invalid operator"),
        "expected problem detail in message, got: {msg}"
    );
}

#[tokio::test]
async fn partial_errors_alongside_data_keep_the_posts() {
    let server = MockServer::start().await;

    let mut body = two_post_body();
    body["errors"] = serde_json::json!([
        { "title": "Authorization Error", "detail": "Not authorized to see the user." }
    ]);
    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut logger = CallLogger::new(dir.path().join("api_calls.txt")).unwrap();
    let client = test_client(&server.uri());

    let outcome = search(&client, &mut logger, "PNKSTR", 100).await.unwrap();

    assert_eq!(outcome.status, QueryStatus::Found(2));
    assert_eq!(outcome.page.errors.len(), 1);
    assert_eq!(normalize_page("PNKSTR", &outcome.page).unwrap().len(), 2);
}

#[tokio::test]
async fn null_metric_counts_do_not_fail_the_page() {
    let server = MockServer::start().await;

    let mut body = two_post_body();
    body["data"][0]["public_metrics"]["like_count"] = serde_json::Value::Null;
    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let page = client.fetch_search_page(&request).await.unwrap();
    let records = normalize_page("PNKSTR", &page).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].likes, 0);
    assert_eq!(records[0].retweets, 2);
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let err = client.fetch_search_page(&request).await.unwrap_err();

    assert!(matches!(err, XApiError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn search_distinguishes_empty_from_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .and(query_param("query", "nothing here"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "meta": { "result_count": 0 } })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .and(query_param("query", "PNKSTR"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut logger = CallLogger::new(dir.path().join("api_calls.txt")).unwrap();
    let client = test_client(&server.uri());

    let empty = search(&client, &mut logger, "nothing here", 100).await.unwrap();
    let failed = search(&client, &mut logger, "PNKSTR", 100).await.unwrap();

    assert_eq!(empty.status, QueryStatus::Empty);
    assert!(
        matches!(failed.status, QueryStatus::Failed(ref reason) if reason.contains("503")),
        "unexpected status: {:?}",
        failed.status
    );
    assert_eq!(logger.calls(), 2);

    let log = std::fs::read_to_string(logger.path()).unwrap();
    assert!(log.contains("Call #1: tweets/search/recent"));
    assert!(log.contains("Call #2: tweets/search/recent"));
    assert!(log.contains(r#""query":"nothing here""#));
}

#[tokio::test]
async fn search_recent_raw_returns_body_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tweets/search/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_post_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let body = client.search_recent_raw(&request).await.unwrap();

    assert_eq!(body, two_post_body());
}
