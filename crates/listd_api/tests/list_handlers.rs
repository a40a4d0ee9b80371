use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use listd_api::{app, AppState, Envelope};
use listd_core::db::fixtures::{reseed, truncate};
use listd_core::List;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a freshly seeded in-memory database.
struct TestServer {
    state: AppState,
    lists: Vec<List>,
}

impl TestServer {
    async fn new() -> Self {
        let state = AppState::in_memory().expect("in-memory database should open");
        let lists = state
            .with_connection(|conn| Ok(reseed(conn)?))
            .await
            .expect("fixtures should seed");
        assert!(lists.len() >= 2, "handler tests need two fixture lists");
        Self { state, lists }
    }

    async fn truncate(&self) {
        self.state
            .with_connection(|conn| Ok(truncate(conn)?))
            .await
            .expect("truncate should succeed");
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
        let body = match body {
            Some(value) => Body::from(serde_json::to_vec(&value).unwrap()),
            None => Body::empty(),
        };
        self.send_raw(method, uri, body).await
    }

    async fn send_raw(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Bytes) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();
        let response = app(self.state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }
}

fn results<T: DeserializeOwned>(body: &Bytes) -> T {
    serde_json::from_slice::<Envelope<T>>(body)
        .unwrap_or_else(|err| panic!("error decoding response body: {err}"))
        .into_inner()
}

fn list_body(name: &str) -> Option<Value> {
    Some(json!({ "ID": 0, "Name": name }))
}

#[tokio::test]
async fn get_lists_returns_seeded_lists() {
    let server = TestServer::new().await;

    let (status, body) = server.send(Method::GET, "/list", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<Vec<List>>(&body), server.lists);
}

#[tokio::test]
async fn get_lists_returns_empty_array_when_store_is_empty() {
    let server = TestServer::new().await;
    server.truncate().await;

    let (status, body) = server.send(Method::GET, "/list", None).await;

    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(raw, json!({ "Results": [] }));
}

#[tokio::test]
async fn create_list_enforces_name_rules() {
    let server = TestServer::new().await;

    let (status, body) = server.send(Method::POST, "/list", list_body("Foo")).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: List = results(&body);
    assert_eq!(created.name, "Foo");
    assert!(created.id > 0);

    let (status, _) = server.send(Method::POST, "/list", list_body("Foo")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "duplicate name");

    let (status, _) = server.send(Method::POST, "/list", list_body("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "empty name");

    let (status, _) = server.send(Method::POST, "/list", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "missing name");
}

#[tokio::test]
async fn create_then_get_returns_same_name() {
    let server = TestServer::new().await;

    let (_, body) = server
        .send(Method::POST, "/list", list_body("Weekend"))
        .await;
    let created: List = results(&body);

    let (status, body) = server
        .send(Method::GET, &format!("/list/{}", created.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<List>(&body), created);
}

#[tokio::test]
async fn create_list_rejects_malformed_json() {
    let server = TestServer::new().await;

    let (status, body) = server
        .send_raw(Method::POST, "/list", Body::from("{\"Name\":"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn get_list_returns_fixture_or_404() {
    let server = TestServer::new().await;
    let expected = server.lists[0].clone();

    let (status, body) = server
        .send(Method::GET, &format!("/list/{}", expected.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<List>(&body), expected);

    let (status, body) = server.send(Method::GET, "/list/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let server = TestServer::new().await;

    for method in [Method::GET, Method::DELETE] {
        let (status, _) = server.send(method, "/list/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    let (status, _) = server
        .send(Method::PUT, "/list/abc", list_body("Foo"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_list_applies_checks_in_order() {
    let server = TestServer::new().await;
    let first = server.lists[0].id;
    let second = server.lists[1].id;

    let (status, body) = server
        .send(Method::PUT, &format!("/list/{first}"), list_body("Foo"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<List>(&body), List::new(first, "Foo"));

    let (status, _) = server
        .send(Method::PUT, &format!("/list/{second}"), list_body("Foo"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "duplicate name");

    let (status, _) = server
        .send(Method::PUT, &format!("/list/{first}"), list_body(""))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "empty name");

    let (status, _) = server.send(Method::PUT, "/list/0", list_body("Bar")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_list_is_404_for_any_body() {
    let server = TestServer::new().await;

    let (status, _) = server.send(Method::PUT, "/list/0", list_body("")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .send_raw(Method::PUT, "/list/0", Body::from("not json"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = server.lists[0].id;
    let (status, _) = server
        .send_raw(Method::PUT, &format!("/list/{id}"), Body::from("not json"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_to_own_name_succeeds() {
    let server = TestServer::new().await;
    let list = server.lists[0].clone();

    let (status, body) = server
        .send(
            Method::PUT,
            &format!("/list/{}", list.id),
            list_body(&list.name),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<List>(&body), list);
}

#[tokio::test]
async fn delete_list_then_get_is_404() {
    let server = TestServer::new().await;
    let id = server.lists[0].id;

    let (status, body) = server
        .send(Method::DELETE, &format!("/list/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = server.send(Method::GET, &format!("/list/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .send(Method::DELETE, &format!("/list/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.send(Method::DELETE, "/list/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lifecycle_of_a_single_list() {
    let server = TestServer::new().await;
    server.truncate().await;

    let (status, body) = server.send(Method::POST, "/list", list_body("Foo")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(results::<List>(&body), List::new(1, "Foo"));

    let (status, _) = server.send(Method::POST, "/list", list_body("Foo")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = server.send(Method::PUT, "/list/1", list_body("Bar")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results::<List>(&body).name, "Bar");

    let (status, _) = server.send(Method::DELETE, "/list/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = server.send(Method::GET, "/list/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::new().await;

    let (status, body) = server.send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(raw, json!({ "Results": { "status": "ok" } }));
}
