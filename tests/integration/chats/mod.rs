//! Chat handler integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{json_request, parse_body, raw_json_request, TestApp};

mod test_create_chat {
    use super::*;

    #[tokio::test]
    async fn test_create_chat_returns_201() {
        let app = TestApp::new();
        let req = json_request(Method::POST, "/chats", Some(json!({"title": "General"})));

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "General");
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_chat_with_trailing_slash() {
        let app = TestApp::new();
        let req = json_request(Method::POST, "/chats/", Some(json!({"title": "Slash"})));

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_chat_trims_title() {
        let app = TestApp::new();
        let req = json_request(
            Method::POST,
            "/chats",
            Some(json!({"title": "  Чат с пробелами  "})),
        );

        let resp = app.router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;
        assert_eq!(body["title"], "Чат с пробелами");
    }

    #[tokio::test]
    async fn test_create_chat_empty_title_returns_400() {
        let app = TestApp::new();
        let req = json_request(Method::POST, "/chats", Some(json!({"title": "   "})));

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(body["error"]["message"], "title cannot be empty");
    }

    #[tokio::test]
    async fn test_create_chat_title_201_chars_returns_400() {
        let app = TestApp::new();
        let req = json_request(
            Method::POST,
            "/chats",
            Some(json!({"title": "a".repeat(201)})),
        );

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["message"], "title must be 1-200 characters");
    }

    #[tokio::test]
    async fn test_create_chat_malformed_json_returns_400() {
        let app = TestApp::new();
        let req = raw_json_request(Method::POST, "/chats", "{not json");

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_chat_missing_title_returns_400() {
        let app = TestApp::new();
        let req = json_request(Method::POST, "/chats", Some(json!({})));

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_chat_storage_failure_returns_500() {
        let app = TestApp::new();
        app.store.set_unavailable(true);
        let req = json_request(Method::POST, "/chats", Some(json!({"title": "General"})));

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["message"], "internal server error");
    }
}

mod test_get_chat {
    use super::*;

    #[tokio::test]
    async fn test_get_chat_returns_chat_and_messages() {
        let app = TestApp::new();
        let chat_id = app.create_chat("General").await;
        app.create_message(chat_id, "first").await;
        app.create_message(chat_id, "second").await;

        let req = json_request(Method::GET, &format!("/chats/{}", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["chat"]["id"], chat_id);
        assert_eq!(body["chat"]["title"], "General");

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["text"], "second");
        assert_eq!(messages[1]["text"], "first");
    }

    #[tokio::test]
    async fn test_get_chat_without_messages_returns_empty_list() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Quiet").await;

        let req = json_request(Method::GET, &format!("/chats/{}", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_get_chat_respects_limit() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Busy").await;
        for i in 1..=5 {
            app.create_message(chat_id, &format!("message {}", i)).await;
        }

        let req = json_request(Method::GET, &format!("/chats/{}?limit=2", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["text"], "message 5");
        assert_eq!(messages[1]["text"], "message 4");
    }

    #[tokio::test]
    async fn test_get_chat_default_limit_is_20() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Chatty").await;
        for i in 0..25 {
            app.create_message(chat_id, &format!("m{}", i)).await;
        }

        for uri in [
            format!("/chats/{}", chat_id),
            format!("/chats/{}?limit=0", chat_id),
            format!("/chats/{}?limit=-7", chat_id),
            format!("/chats/{}?limit=abc", chat_id),
        ] {
            let resp = app
                .router()
                .oneshot(json_request(Method::GET, &uri, None))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "uri: {}", uri);

            let body = parse_body(resp).await;
            assert_eq!(body["messages"].as_array().unwrap().len(), 20, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn test_get_chat_limit_clamped_to_100() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Flood").await;
        for i in 0..105 {
            app.create_message(chat_id, &format!("m{}", i)).await;
        }

        let req = json_request(Method::GET, &format!("/chats/{}?limit=150", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["messages"].as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_get_missing_chat_returns_404() {
        let app = TestApp::new();
        let req = json_request(Method::GET, "/chats/999?limit=20", None);

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "chat not found");
    }

    #[tokio::test]
    async fn test_get_chat_invalid_id_returns_400() {
        let app = TestApp::new();
        let req = json_request(Method::GET, "/chats/abc", None);

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["message"], "invalid chat id");
    }
}

mod test_delete_chat {
    use super::*;

    #[tokio::test]
    async fn test_delete_chat_returns_204_and_cascades() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Doomed").await;
        app.create_message(chat_id, "bye").await;

        let req = json_request(Method::DELETE, &format!("/chats/{}", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
        assert_eq!(app.store.message_count().unwrap(), 0);

        let req = json_request(Method::GET, &format!("/chats/{}", chat_id), None);
        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_404() {
        let app = TestApp::new();
        let chat_id = app.create_chat("Once").await;
        let uri = format!("/chats/{}", chat_id);

        let resp = app
            .router()
            .oneshot(json_request(Method::DELETE, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app
            .router()
            .oneshot(json_request(Method::DELETE, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_invalid_id_returns_400() {
        let app = TestApp::new();
        let req = json_request(Method::DELETE, "/chats/not-a-number", None);

        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
