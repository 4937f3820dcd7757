//! Endpoint tests against a stubbed todo service
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use todoflow_client::{ClientError, TaskPriority, TaskStatus, TodoClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todolist_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "createdAt": "2024-01-15T10:00:00Z",
        "order": 0
    })
}

fn task_json(id: &str, todolist_id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "todoListId": todolist_id,
        "title": title,
        "description": null,
        "status": 0,
        "priority": 1,
        "startDate": null,
        "deadline": null,
        "order": 0,
        "addedDate": "2024-01-15T10:00:00Z"
    })
}

#[tokio::test]
async fn get_todolists_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todo-lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            todolist_json("tl1", "Errands"),
            todolist_json("tl2", "Work"),
        ])))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let lists = client.get_todolists().await.unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id, "tl1");
    assert_eq!(lists[1].title, "Work");
}

#[tokio::test]
async fn create_todolist_unwraps_item_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo-lists"))
        .and(body_json(serde_json::json!({ "title": "Errands" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCode": 0,
            "messages": [],
            "data": { "item": todolist_json("tl1", "Errands") }
        })))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let response = client.create_todolist("Errands").await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.data.unwrap().item.title, "Errands");
}

#[tokio::test]
async fn create_todolist_rejection_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo-lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCode": 1,
            "messages": ["title required"],
            "data": {}
        })))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let response = client.create_todolist("").await.unwrap();

    assert!(!response.is_success());
    assert_eq!(response.first_message(), Some("title required"));
}

#[tokio::test]
async fn get_tasks_parses_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todo-lists/tl1/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [task_json("t1", "tl1", "Buy milk")],
            "totalCount": 1,
            "error": null
        })))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let page = client.get_tasks("tl1").await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].status, TaskStatus::New);
    assert_eq!(page.items[0].priority, TaskPriority::Middle);
}

#[tokio::test]
async fn update_task_sends_full_camel_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todo-lists/tl1/tasks/t1"))
        .and(body_json(serde_json::json!({
            "title": "Buy milk",
            "description": null,
            "status": 2,
            "priority": 1,
            "startDate": null,
            "deadline": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCode": 0,
            "messages": [],
            "data": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let model = todoflow_client::UpdateTaskModel {
        title: "Buy milk".into(),
        description: None,
        status: TaskStatus::Completed,
        priority: TaskPriority::Middle,
        start_date: None,
        deadline: None,
    };
    let response = client.update_task("tl1", "t1", &model).await.unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn api_key_header_is_attached() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todo-lists/tl1"))
        .and(header("API-KEY", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCode": 0,
            "messages": [],
            "data": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri()).with_api_key("secret");
    assert!(client.delete_todolist("tl1").await.unwrap().is_success());
}

#[tokio::test]
async fn me_without_session_keeps_empty_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCode": 1,
            "messages": ["You are not authorized"],
            "data": {}
        })))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let response = client.me().await.unwrap();

    assert!(!response.is_success());
    assert!(response.data.is_none());
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todo-lists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    let error = client.get_todolists().await.unwrap_err();

    match error {
        ClientError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    assert!(matches!(
        client.me().await.unwrap_err(),
        ClientError::Unauthorized
    ));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todo-lists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = TodoClient::new(server.uri());
    assert!(matches!(
        client.get_todolists().await.unwrap_err(),
        ClientError::ResponseParseFailed(_)
    ));
}
