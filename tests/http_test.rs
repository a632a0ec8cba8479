//! Integration tests driving a real listener over raw TCP.
//!
//! Each test binds an ephemeral port, runs the accept loop in a background
//! task, and talks plain HTTP/1.1 over a `TcpStream`.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use bench_server::config::{Config, ServerContext};
use bench_server::routes::RouteTable;
use bench_server::server;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let ctx = Arc::new(ServerContext::new(Config::default(), RouteTable::benchmark()));
    tokio::spawn(server::serve(listener, ctx));
    addr
}

/// Send one request and read the full response (the request carries
/// `Connection: close`, so the server closes after responding).
async fn send_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("read response");
    String::from_utf8(response).expect("utf-8 response")
}

async fn get(addr: SocketAddr, path: &str) -> String {
    send_request(
        addr,
        &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"),
    )
    .await
}

fn status_line(response: &str) -> &str {
    response.lines().next().unwrap_or("")
}

fn body_of(response: &str) -> &str {
    response.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}

fn content_type_of(response: &str) -> String {
    response
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("content-type:"))
        .map(|line| line.split_once(':').unwrap().1.trim().to_string())
        .unwrap_or_default()
}

#[tokio::test]
async fn health_returns_ok() {
    let addr = start_server().await;
    let response = get(addr, "/health").await;
    assert_eq!(status_line(&response), "HTTP/1.1 200 OK");
    assert_eq!(content_type_of(&response), "text/plain; charset=utf-8");
    assert_eq!(body_of(&response), "ok");
}

#[tokio::test]
async fn index_returns_greeting() {
    let addr = start_server().await;
    let response = get(addr, "/index").await;
    assert_eq!(status_line(&response), "HTTP/1.1 200 OK");
    assert_eq!(content_type_of(&response), "text/plain; charset=utf-8");
    assert_eq!(body_of(&response), "hello from gin server");
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let addr = start_server().await;
    let response = get(addr, "/missing").await;
    assert_eq!(status_line(&response), "HTTP/1.1 404 Not Found");
    assert_eq!(content_type_of(&response), "text/plain; charset=utf-8");
    assert_eq!(body_of(&response), "not found");
}

#[tokio::test]
async fn post_to_registered_path_returns_not_found() {
    let addr = start_server().await;
    let response = send_request(
        addr,
        "POST /health HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert_eq!(status_line(&response), "HTTP/1.1 404 Not Found");
    assert_eq!(body_of(&response), "not found");
}

#[tokio::test]
async fn query_string_does_not_break_exact_match() {
    // The exact match is on the path component only.
    let addr = start_server().await;
    let response = get(addr, "/health?probe=1").await;
    assert_eq!(status_line(&response), "HTTP/1.1 200 OK");
    assert_eq!(body_of(&response), "ok");
}

#[tokio::test]
async fn keep_alive_serves_multiple_requests_on_one_connection() {
    let addr = start_server().await;
    let mut stream = TcpStream::connect(addr).await.expect("connect");

    // First request without Connection: close; read until its body arrives.
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .expect("write first request");
    let mut first = Vec::new();
    let mut chunk = [0u8; 1024];
    while !String::from_utf8_lossy(&first).contains("\r\n\r\nok") {
        let n = stream.read(&mut chunk).await.expect("read first response");
        assert_ne!(n, 0, "server closed a keep-alive connection early");
        first.extend_from_slice(&chunk[..n]);
    }
    assert!(String::from_utf8_lossy(&first).starts_with("HTTP/1.1 200 OK"));

    // Second request on the same connection closes it.
    stream
        .write_all(b"GET /index HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .expect("write second request");
    let mut second = Vec::new();
    stream
        .read_to_end(&mut second)
        .await
        .expect("read second response");
    let second = String::from_utf8(second).expect("utf-8 response");
    assert_eq!(status_line(&second), "HTTP/1.1 200 OK");
    assert_eq!(body_of(&second), "hello from gin server");
}

#[tokio::test]
async fn concurrent_requests_do_not_interfere() {
    let addr = start_server().await;

    let mut tasks = Vec::new();
    for i in 0..16 {
        tasks.push(tokio::spawn(async move {
            if i % 2 == 0 {
                (get(addr, "/health").await, "ok")
            } else {
                (get(addr, "/index").await, "hello from gin server")
            }
        }));
    }

    for task in tasks {
        let (response, expected) = task.await.expect("task completes");
        assert_eq!(status_line(&response), "HTTP/1.1 200 OK");
        assert_eq!(body_of(&response), expected);
    }
}
