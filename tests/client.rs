use serde_json::json;
use v2ex::{Client, Error};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client pointed at the mock server, mirroring the live URL
/// layout: v2 under `/api/v2`, classic under `/api`.
fn client_for(server: &MockServer, token: Option<&str>) -> Client {
    let mut builder = Client::builder()
        .api_base(format!("{}/api/v2", server.uri()))
        .classic_base(format!("{}/api", server.uri()));
    if let Some(token) = token {
        builder = builder.token(token);
    }
    builder.build().expect("client should build")
}

fn enveloped(result: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "result": result })
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);

    let err = client.member().await.unwrap_err();
    assert!(matches!(err, Error::MissingToken), "got {err:?}");

    let err = client.delete_notification(1).await.unwrap_err();
    assert!(matches!(err, Error::MissingToken), "got {err:?}");

    assert!(
        server.received_requests().await.unwrap().is_empty(),
        "no request should reach the wire without a token"
    );
}

#[tokio::test]
async fn member_sends_exact_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/member"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!({
            "id": 1,
            "username": "Livid",
            "github": "livid",
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let member = client.member().await.unwrap();
    assert_eq!(member.username(), "Livid");
    assert_eq!(member.github(), Some("livid"));
}

#[tokio::test]
async fn classic_calls_send_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topics/hot.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1000,
            "title": "Hello World",
            "replies": 3,
            "member": { "id": 1, "username": "Livid" },
            "node": { "id": 2, "name": "programmer", "title": "Programmer" },
            "created": 1272206037,
        }])))
        .expect(1)
        .mount(&server)
        .await;

    // a token is held, but must not leak onto classic calls
    let client = client_for(&server, Some("T"));
    let topics = client.hot_topics().await.unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].node().name(), "programmer");

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|request| request.headers.get("authorization").is_none()));
}

#[tokio::test]
async fn classic_rejects_enveloped_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topics/latest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!([]))))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.latest_topics().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn v2_rejects_bare_list_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.notifications(1).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn decode_failure_keeps_rate_limit_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/member"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("x-rate-limit-limit", "120")
                .insert_header("x-rate-limit-remaining", "117")
                .insert_header("x-rate-limit-reset", "1693000000"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.member().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    let limits = err.rate_limit().expect("headers were on the response");
    assert_eq!(limits.remaining(), Some(117));
    assert_eq!(limits.reset(), Some(1_693_000_000));
}

#[tokio::test]
async fn rate_limited_error_carries_reset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/member"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-rate-limit-limit", "120")
                .insert_header("x-rate-limit-remaining", "0")
                .insert_header("x-rate-limit-reset", "1693000000"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.member().await.unwrap_err();
    match &err {
        Error::RateLimited(failure) => {
            assert_eq!(failure.rate_limit().reset(), Some(1_693_000_000));
            assert_eq!(failure.rate_limit().remaining(), Some(0));
        }
        other => panic!("expected RateLimited, got {other:?}"),
    }
    assert_eq!(err.status().map(|status| status.as_u16()), Some(429));
}

#[tokio::test]
async fn delete_of_missing_notification_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/notifications/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "notification not found",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.delete_notification(9999).await.unwrap_err();
    match err {
        Error::NotFound(failure) => {
            assert_eq!(failure.message(), Some("notification not found"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_acknowledgement_surfaces_rate_limits() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/notifications/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .insert_header("x-rate-limit-remaining", "118"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let reply = client.delete_notification(42).await.unwrap();
    assert_eq!(reply.rate_limit().remaining(), Some(118));
}

#[tokio::test]
async fn notification_page_param_is_sent_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/notifications"))
        .and(query_param("p", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!([{
            "id": 7,
            "text": "someone mentioned you",
            "created": 1693000000,
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let notifications = client.notifications(2).await.unwrap();
    assert_eq!(notifications[0].id(), 7);

    let requests = server.received_requests().await.unwrap();
    let pages = requests[0]
        .url
        .query_pairs()
        .filter(|(key, _)| key == "p")
        .count();
    assert_eq!(pages, 1);
}

#[tokio::test]
async fn node_lookup_success_and_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/nodes/programmer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!({
            "id": 90,
            "name": "programmer",
            "title": "Programmer",
            "topics": 48000,
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/nodes/__does_not_exist__"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "node not found",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));

    let node = client.node("programmer").await.unwrap();
    assert_eq!(node.title(), "Programmer");
    assert_eq!(node.topics(), 48000);

    let err = client.node("__does_not_exist__").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn topic_detail_embeds_member_and_node() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/topics/1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!({
            "id": 1000,
            "title": "Hello World",
            "content": "first",
            "syntax": 1,
            "replies": 2,
            "member": { "id": 1, "username": "Livid" },
            "node": { "id": 90, "name": "programmer", "title": "Programmer" },
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/topics/1000/replies"))
        .and(query_param("p", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!([{
            "id": 2,
            "content": "welcome",
            "member": { "id": 3, "username": "kevin" },
        }]))))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));

    let topic = client.topic(1000).await.unwrap();
    assert_eq!(topic.member().unwrap().username(), "Livid");
    assert_eq!(topic.node().unwrap().name(), "programmer");

    let replies = client.topic_replies(1000, 1).await.unwrap();
    assert_eq!(replies[0].content(), Some("welcome"));
    assert_eq!(replies[0].member().unwrap().username(), "kevin");
}

#[tokio::test]
async fn token_introspection_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/token"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(json!({
            "token": "T",
            "scope": "everything",
            "good_for_days": 30,
            "total_used": 5,
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let token = client.token().await.unwrap();
    assert_eq!(token.token(), "T");
    assert_eq!(token.scope(), Some("everything"));
    assert_eq!(token.good_for_days(), Some(30));
}

#[tokio::test]
async fn rejected_envelope_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/member"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "token has been revoked",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.member().await.unwrap_err();
    match err {
        Error::Rejected { message, .. } => assert_eq!(message, "token has been revoked"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn success_envelope_without_result_is_missing_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/member"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .insert_header("x-rate-limit-remaining", "116"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some("T"));
    let err = client.member().await.unwrap_err();
    assert!(matches!(err, Error::MissingResult { .. }), "got {err:?}");
    assert_eq!(
        err.rate_limit().and_then(v2ex::RateLimit::remaining),
        Some(116)
    );
}

#[tokio::test]
async fn statuses_classify_onto_error_variants() {
    let server = MockServer::start().await;
    for (status, node) in [(401, "a"), (403, "b"), (500, "c")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/nodes/{node}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    let client = client_for(&server, Some("T"));

    let err = client.node("a").await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)), "got {err:?}");

    let err = client.node("b").await.unwrap_err();
    assert!(matches!(err, Error::Authorization(_)), "got {err:?}");

    let err = client.node("c").await.unwrap_err();
    assert!(matches!(err, Error::Server(_)), "got {err:?}");
    assert_eq!(err.status().map(|status| status.as_u16()), Some(500));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // nothing listens on this port
    let client = Client::builder()
        .api_base("http://127.0.0.1:9/api/v2")
        .token("T")
        .build()
        .unwrap();

    let err = client.member().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
