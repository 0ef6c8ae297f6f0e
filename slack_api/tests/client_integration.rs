use slack_api::{Client, Error};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "xoxc-test", "cookie%2Bvalue")
}

#[tokio::test]
async fn get_thread_messages_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("replies.json");

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("channel", "C0123"))
        .and(query_param("ts", "1700000000.123456"))
        .and(query_param("include_all_metadata", "true"))
        .and(header("authorization", "Bearer xoxc-test"))
        .and(header("cookie", "d=cookie%2Bvalue"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let messages = client(&mock_server)
        .get_thread_messages("C0123", "1700000000.123456")
        .await
        .unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].user.as_deref(), Some("U02BOB"));
}

#[tokio::test]
async fn get_thread_messages_follows_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("cursor", "bmV4dF90czoxNzAwMDAwMTAw"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("replies_page2.json")))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("replies_page1.json")))
        .with_priority(2)
        .expect(1)
        .mount(&mock_server)
        .await;

    let messages = client(&mock_server)
        .get_thread_messages("C0123", "1700000000.123456")
        .await
        .unwrap();
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["root", "reply"]);
}

#[tokio::test]
async fn get_thread_messages_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"ok": false, "error": "thread_not_found"}"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get_thread_messages("C0123", "1.2")
        .await;
    match result {
        Err(Error::Api(code)) => assert_eq!(code, "thread_not_found"),
        other => panic!("expected api error, got {:?}", other.map(|m| m.len())),
    }
}

#[tokio::test]
async fn get_thread_messages_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get_thread_messages("C0123", "1.2")
        .await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn get_thread_messages_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get_thread_messages("C0123", "1.2")
        .await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn get_users_info_batches_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users.info"))
        .and(query_param("users", "U01ALICE,U02BOB"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("users.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = vec!["U01ALICE".to_string(), "U02BOB".to_string()];
    let users = client(&mock_server).get_users_info(&ids).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].profile.first_name, "Bob");
}
