//! Full integration tests for the site
//!
//! The real router and real reqwest adapters are exercised end to end; every
//! upstream (GitHub API, scraped pages, notification webhook) is an httpmock
//! server, so nothing leaves the machine.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::{build_router, AppState};

    const WEBHOOK_PATH: &str = "/api/notification/telegram";

    fn test_config(upstream: &MockServer) -> Config {
        Config {
            github_api_url: upstream.base_url(),
            webhook_url: upstream.url(WEBHOOK_PATH),
            project_links: Vec::new(),
            ..Config::default()
        }
    }

    fn test_server(config: Config) -> TestServer {
        TestServer::new(build_router(AppState::new(config))).unwrap()
    }

    fn contact_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Collaboration",
            "message": "Could we collaborate?"
        })
    }

    // ========================================================================
    // POST /api/fetch-metadata
    // ========================================================================

    #[tokio::test]
    async fn unreachable_host_degrades_to_hostname_preview() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        let response = server
            .post("/api/fetch-metadata")
            .json(&json!({ "url": "http://127.0.0.1:9/landing" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["title"], "127.0.0.1");
        assert_eq!(body["description"], "Project information not available");
        assert_eq!(body["image"], Value::Null);
        assert_eq!(body["type"], "website");
    }

    #[tokio::test]
    async fn github_repository_uses_api_and_keeps_language_order() {
        let upstream = MockServer::start_async().await;
        let repo_mock = upstream
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/iraunit/get-link")
                    .header("User-Agent", "Portfolio-Website");
                then.status(200).json_body(json!({
                    "name": "get-link",
                    "description": "Share links across devices",
                    "owner": { "avatar_url": "https://avatars.example/u/1" },
                    "languages_url": upstream.url("/repos/iraunit/get-link/languages"),
                    "stargazers_count": 42,
                    "forks_count": 7,
                    "language": "Kotlin"
                }));
            })
            .await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/repos/iraunit/get-link/languages");
                // Deliberately not sorted by name or size
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"Kotlin":9000,"Rust":12000,"Java":300,"Shell":20}"#);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let response = server
            .post("/api/fetch-metadata")
            .json(&json!({ "url": "https://github.com/iraunit/get-link" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["type"], "github");
        assert_eq!(body["title"], "get-link");
        assert_eq!(body["image"], "https://avatars.example/u/1");
        assert_eq!(body["tech"], json!(["Kotlin", "Rust", "Java"]));
        assert_eq!(body["stars"], 42);
        assert_eq!(body["forks"], 7);
        repo_mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_github_repo_falls_back_to_github_preview() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/repos/iraunit/gone");
                then.status(404).body(r#"{"message":"Not Found"}"#);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let response = server
            .post("/api/fetch-metadata")
            .json(&json!({ "url": "https://github.com/iraunit/gone" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["title"], "github.com");
        assert_eq!(body["type"], "github");
        assert_eq!(body["image"], Value::Null);
    }

    #[tokio::test]
    async fn website_description_read_in_either_attribute_order() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/name-first")
                    .header("User-Agent", "Mozilla/5.0 (compatible; ShyptSolutionBot/1.0)");
                then.status(200).body(
                    r#"<html><head><title>Alpha</title><meta name="description" content="X"></head></html>"#,
                );
            })
            .await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/content-first");
                then.status(200).body(
                    r#"<html><head><title>Beta</title><meta content="X" name="description"></head></html>"#,
                );
            })
            .await;
        let server = test_server(test_config(&upstream));

        for path in ["/name-first", "/content-first"] {
            let response = server
                .post("/api/fetch-metadata")
                .json(&json!({ "url": upstream.url(path) }))
                .await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["description"], "X", "{path}");
            assert_eq!(body["type"], "website");
        }
    }

    #[tokio::test]
    async fn relative_og_image_resolves_against_page_origin() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/foo");
                then.status(200).body(
                    r#"<title>Foo</title><meta property="og:image" content="/img/preview.png">"#,
                );
            })
            .await;
        let server = test_server(test_config(&upstream));

        let response = server
            .post("/api/fetch-metadata")
            .json(&json!({ "url": upstream.url("/foo") }))
            .await;

        let body: Value = response.json();
        assert_eq!(body["image"], upstream.url("/img/preview.png"));
        assert_eq!(body["description"], "No description available");
    }

    #[tokio::test]
    async fn every_resolve_hits_upstream() {
        let upstream = MockServer::start_async().await;
        let page = upstream
            .mock_async(|when, then| {
                when.method(GET).path("/again");
                then.status(200).body("<title>Again</title>");
            })
            .await;
        let server = test_server(test_config(&upstream));

        for _ in 0..2 {
            server
                .post("/api/fetch-metadata")
                .json(&json!({ "url": upstream.url("/again") }))
                .await
                .assert_status_ok();
        }

        page.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn missing_or_invalid_url_is_bad_request() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        let missing = server.post("/api/fetch-metadata").json(&json!({})).await;
        missing.assert_status_bad_request();
        missing.assert_json(&json!({ "error": "URL is required" }));

        let invalid = server
            .post("/api/fetch-metadata")
            .json(&json!({ "url": "not a url" }))
            .await;
        invalid.assert_status_bad_request();
        invalid.assert_json(&json!({ "error": "Invalid URL" }));
    }

    #[tokio::test]
    async fn malformed_metadata_body_is_internal_error() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        let response = server.post("/api/fetch-metadata").text("{not json").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Failed to fetch metadata" }));
    }

    #[tokio::test]
    async fn falsy_or_non_object_url_is_required() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        for body in [
            json!({ "url": 0 }),
            json!({ "url": null }),
            json!({ "url": false }),
            json!("https://x.com"),
        ] {
            let response = server.post("/api/fetch-metadata").json(&body).await;

            response.assert_status_bad_request();
            response.assert_json(&json!({ "error": "URL is required" }));
        }
    }

    #[tokio::test]
    async fn non_string_url_is_invalid() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        for body in [
            json!({ "url": 5 }),
            json!({ "url": true }),
            json!({ "url": ["https://x.com"] }),
        ] {
            let response = server.post("/api/fetch-metadata").json(&body).await;

            response.assert_status_bad_request();
            response.assert_json(&json!({ "error": "Invalid URL" }));
        }
    }

    // ========================================================================
    // POST /api/send-message
    // ========================================================================

    #[tokio::test]
    async fn valid_message_is_relayed_once() {
        let upstream = MockServer::start_async().await;
        let webhook = upstream
            .mock_async(|when, then| {
                when.method(POST)
                    .path(WEBHOOK_PATH)
                    .body_contains("Name: Ada Lovelace")
                    .body_contains("Message: Could we collaborate?");
                then.status(200);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let response = server.post("/api/send-message").json(&contact_body()).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": "Message sent successfully" }));
        webhook.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn missing_field_never_reaches_webhook() {
        let upstream = MockServer::start_async().await;
        let webhook = upstream
            .mock_async(|when, then| {
                when.method(POST).path(WEBHOOK_PATH);
                then.status(200);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let mut body = contact_body();
        body["subject"] = json!("");
        let response = server.post("/api/send-message").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "message": "All fields are required" }));
        webhook.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_webhook() {
        let upstream = MockServer::start_async().await;
        let webhook = upstream
            .mock_async(|when, then| {
                when.method(POST).path(WEBHOOK_PATH);
                then.status(200);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let mut body = contact_body();
        body["email"] = json!("not-an-email");
        let response = server.post("/api/send-message").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "message": "Please provide a valid email address" }));
        webhook.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn webhook_rejection_is_internal_error() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(POST).path(WEBHOOK_PATH);
                then.status(500);
            })
            .await;
        let server = test_server(test_config(&upstream));

        let response = server.post("/api/send-message").json(&contact_body()).await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Error sending message" }));
    }

    #[tokio::test]
    async fn unreachable_webhook_asks_to_retry_later() {
        let upstream = MockServer::start_async().await;
        let config = Config {
            webhook_url: "http://127.0.0.1:9/notify".to_string(),
            ..test_config(&upstream)
        };
        let server = test_server(config);

        let response = server.post("/api/send-message").json(&contact_body()).await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "message": "Error sending message. Please try again later."
        }));
    }

    #[tokio::test]
    async fn malformed_contact_body_is_internal_error() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        let response = server.post("/api/send-message").text("name=Ada").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "message": "Error sending message. Please try again later."
        }));
    }

    #[tokio::test]
    async fn non_string_contact_fields_are_missing() {
        let upstream = MockServer::start_async().await;
        let webhook = upstream
            .mock_async(|when, then| {
                when.method(POST).path(WEBHOOK_PATH);
                then.status(200);
            })
            .await;
        let server = test_server(test_config(&upstream));

        for body in [
            json!({ "name": 0, "email": "a@b.co", "subject": "s", "message": "m" }),
            json!({ "name": "Ada", "email": 5, "subject": "s", "message": "m" }),
            json!({ "name": "Ada", "email": "a@b.co", "subject": true, "message": "m" }),
            json!(["Ada", "a@b.co", "s", "m"]),
        ] {
            let response = server.post("/api/send-message").json(&body).await;

            response.assert_status_bad_request();
            response.assert_json(&json!({ "message": "All fields are required" }));
        }
        webhook.assert_hits_async(0).await;
    }

    // ========================================================================
    // GET / and /health
    // ========================================================================

    #[tokio::test]
    async fn home_page_renders_resolved_cards_in_order() {
        let upstream = MockServer::start_async().await;
        let first = upstream
            .mock_async(|when, then| {
                when.method(GET).path("/first");
                then.status(200).body(
                    r#"<title>First Product</title><meta name="description" content="The first one">"#,
                );
            })
            .await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/second");
                then.status(200).body("<title>Second Product</title>");
            })
            .await;
        let config = Config {
            project_links: vec![upstream.url("/first"), upstream.url("/second")],
            site_url: "https://preview.example.com".to_string(),
            ..test_config(&upstream)
        };
        let server = test_server(config);

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        let first_at = html.find("First Product").unwrap();
        let second_at = html.find("Second Product").unwrap();
        assert!(first_at < second_at);
        assert!(html.contains("The first one"));
        assert!(html.contains(r#"href="https://preview.example.com/""#));

        // Cached for the second render
        server.get("/").await.assert_status_ok();
        first.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let upstream = MockServer::start_async().await;
        let server = test_server(test_config(&upstream));

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
