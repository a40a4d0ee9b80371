use listd_api::{run, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

#[tokio::test]
async fn run_serves_requests_until_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::open(dir.path().join("listd.sqlite3")).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(run(listener, state, async move {
        let _ = stop_rx.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /list HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(
        response.starts_with("HTTP/1.1 200"),
        "unexpected response: {response}"
    );
    assert!(response.ends_with(r#"{"Results":[]}"#));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
