//! RestClient tests against a one-shot local HTTP responder.

use serde_json::json;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use tabsearch_client::{RestClient, Transport};
use tabsearch_core::Error;

/// Accepts one connection, answers it with `status` and `body`, and returns
/// the raw request text.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}", addr), handle)
}

/// Reads one request: the head plus `Content-Length` bytes of body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn post_returns_parsed_body() {
    init_logger();
    let (url, server) = serve_once("200 OK", r#"{"hits" : {"hits": [{"_source": {}}] }}"#);

    let client = RestClient::new(url, "people/_search");
    let response = client.post(&json!({"size": 20}), None).unwrap();
    assert_eq!(response, json!({"hits": {"hits": [{"_source": {}}]}}));

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /people/_search HTTP/1.1"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"size":20}"#));
}

#[test]
fn headers_and_auth_are_sent() {
    init_logger();
    let (url, server) = serve_once("200 OK", "{}");

    let client = RestClient::new(url, "people")
        .header("X-Opaque-Id", "report-42")
        .basic_auth("IAm", "Testing");
    client.get(None).unwrap();

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /people http/1.1"));
    assert!(request.contains("x-opaque-id: report-42"));
    assert!(request.contains(&"authorization: Basic SUFtOlRlc3Rpbmc=".to_lowercase()));
}

#[test]
fn params_become_query_string() {
    init_logger();
    let (url, server) = serve_once("200 OK", "{}");

    let client = RestClient::new(url, "people/_search");
    let params: &[(&str, &str)] = &[("pretty", "true"), ("routing", "a b")];
    client.get(Some(params)).unwrap();

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /people/_search?pretty=true&routing=a+b HTTP/1.1"));
}

#[test]
fn error_status_carries_server_reason() {
    init_logger();
    let (url, server) = serve_once(
        "404 Not Found",
        r#"{"error": {"type": "index_not_found_exception"}, "status": 404}"#,
    );

    let client = RestClient::new(url, "nope/_search");
    let err = client.post(&json!({}), None).unwrap_err();
    match err {
        Error::Server { reason } => {
            assert_eq!(reason, Some(json!({"type": "index_not_found_exception"})))
        }
        other => panic!("Wrong error type: {}", other),
    }
    server.join().unwrap();
}

#[test]
fn unparseable_error_body_has_no_reason() {
    init_logger();
    let (url, server) = serve_once("502 Bad Gateway", "upstream down");

    let client = RestClient::new(url, "people/_search");
    let err = client.post(&json!({}), None).unwrap_err();
    assert!(matches!(err, Error::Server { reason: None }));
    server.join().unwrap();
}

#[test]
fn invalid_success_body_is_transport_error() {
    init_logger();
    let (url, server) = serve_once("200 OK", "not json");

    let client = RestClient::new(url, "people/_search");
    let err = client.get(None).unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    server.join().unwrap();
}
