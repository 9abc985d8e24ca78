use super::*;

fn test_client(base_url: &str) -> XApiClient {
    XApiClient::with_base_url("test-token", 30, "pnkstr-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_search_url_targets_recent_search() {
    let client = test_client("https://api.x.com/2");
    let request = SearchRequest::new("PNKSTR", 100).unwrap();
    let url = client.build_search_url(&request);
    assert_eq!(url.path(), "/2/tweets/search/recent");
    assert!(url.as_str().starts_with("https://api.x.com/2/tweets/search/recent?query=PNKSTR"));
}

#[test]
fn build_search_url_keeps_root_path_with_trailing_slash() {
    let client = test_client("https://api.x.com/2/");
    let request = SearchRequest::new("PNKSTR", 10).unwrap();
    let url = client.build_search_url(&request);
    assert_eq!(url.path(), "/2/tweets/search/recent");
}

#[test]
fn build_search_url_encodes_query_operators() {
    let client = test_client("https://api.x.com/2");
    let request = SearchRequest::new("$PNKSTR OR pnkstr", 10).unwrap();
    let url = client.build_search_url(&request);
    assert!(
        url.as_str().contains("query=%24PNKSTR+OR+pnkstr")
            || url.as_str().contains("query=%24PNKSTR%20OR%20pnkstr"),
        "query param should be percent-encoded: {url}"
    );
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("query".to_string(), "$PNKSTR OR pnkstr".to_string())));
    assert!(pairs.contains(&("max_results".to_string(), "10".to_string())));
    assert!(pairs.contains(&("expansions".to_string(), "author_id".to_string())));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = XApiClient::with_base_url("t", 30, "ua", "not a url");
    assert!(matches!(result, Err(XApiError::InvalidBaseUrl { .. })));
}

#[test]
fn api_error_uses_problem_detail() {
    let body = r#"{"title":"Unauthorized","type":"about:blank","status":401,"detail":"Unauthorized"}"#;
    let err = XApiClient::api_error(401, body);
    assert!(
        matches!(err, XApiError::Api { status: 401, ref detail } if detail == "Unauthorized"),
        "unexpected: {err:?}"
    );
}

#[test]
fn api_error_falls_back_to_raw_body() {
    let err = XApiClient::api_error(502, "Bad Gateway");
    assert!(
        matches!(err, XApiError::Api { status: 502, ref detail } if detail == "Bad Gateway"),
        "unexpected: {err:?}"
    );
}
