mod common;

use serde_json::json;
use shortlink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_create_link_generates_code() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/page" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["targetUrl"], "https://example.com/page");
    assert_eq!(json["shortUrl"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["clicks"], 0);
    assert!(json["lastClickedAt"].is_null());

    assert!(repo.exists(&code).await.unwrap());
}

#[tokio::test]
async fn test_create_link_generated_codes_are_distinct() {
    let (server, repo) = common::create_test_server();

    let mut codes = std::collections::HashSet::new();
    for i in 0..25 {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": format!("https://example.com/{i}") }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        codes.insert(response.json::<serde_json::Value>()["code"].to_string());
    }

    assert_eq!(codes.len(), 25);
    assert_eq!(repo.count().await.unwrap(), 25);
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "code": "Promo24" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"], "Promo24");
}

#[tokio::test]
async fn test_create_link_accepts_snake_case_fields() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com", "custom_code": "snake12" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"], "snake12");
}

#[tokio::test]
async fn test_create_link_invalid_code_creates_nothing() {
    let (server, repo) = common::create_test_server();

    for bad in ["", "abc", "abc-123", "abcdefghi", "has space"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": "https://example.com", "code": bad }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_format",
            "code {bad:?}"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_link_conflict() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "abc123", "https://first.example").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://second.example", "code": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "conflict"
    );

    let stored = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://first.example");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, repo) = common::create_test_server();

    for body in [
        json!({ "targetUrl": "not-a-url" }),
        json!({ "targetUrl": "ftp://example.com/file" }),
        json!({ "code": "abc123" }),
        json!({}),
    ] {
        let response = server.post("/api/links").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_url"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "older1", "https://a.example").await;
    common::create_test_link(&repo, "newer2", "https://b.example").await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["code"], "newer2");
    assert_eq!(items[1]["code"], "older1");
}

#[tokio::test]
async fn test_get_link_does_not_count_click() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "stats1", "https://example.com").await;

    let response = server.get("/api/links/stats1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
    assert_eq!(repo.find_by_code("stats1").await.unwrap().unwrap().clicks, 0);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/api/links/nothere").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "bye123", "https://example.com").await;

    let response = server.delete("/api/links/bye123").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert!(!repo.exists("bye123").await.unwrap());

    let response = server.delete("/api/links/bye123").await;
    response.assert_status_not_found();

    let response = server.get("/bye123").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_rejects_url_with_control_characters() {
    let (server, repo) = common::create_test_server();

    for target in [
        "https://exa\nmple.com/page",
        "https://example.com/\tpage",
        " https://example.com",
    ] {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": target, "code": "ctrl12" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_url",
            "target {target:?}"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
    server.get("/ctrl12").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_non_string_url_is_invalid_url() {
    let (server, repo) = common::create_test_server();

    for target in [json!(42), json!(["https://example.com"]), json!({ "u": 1 })] {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": target }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_url"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_link_malformed_body_is_invalid_format() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/links")
        .bytes("not json".into())
        .content_type("application/json")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_format"
    );

    let response = server.post("/api/links").text("not json").await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_format"
    );

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "code": 123456 }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_format"
    );

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_link_url_checked_before_code() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "not-a-url", "code": "x".repeat(65) }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_url"
    );
}

#[tokio::test]
async fn test_create_link_oversized_url_is_invalid_url() {
    let (server, repo) = common::create_test_server();
    let target = format!("https://example.com/{}", "a".repeat(2048));

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": target }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_url"
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}
