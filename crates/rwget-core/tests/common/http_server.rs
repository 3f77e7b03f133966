//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed routes keyed by request path. Unknown paths get a 404 with a
//! short body. Every response closes the connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    /// Status line after `HTTP/1.1 `, e.g. `"200 OK"`.
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    /// If false, omit `Content-Length` and end the body by closing the connection.
    pub send_length: bool,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            content_type: Some("application/octet-stream"),
            send_length: true,
            body,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: "404 Not Found",
            content_type: Some("text/plain"),
            send_length: true,
            body: b"not found".to_vec(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). The server runs until the
/// process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let fallback = Route::not_found();
    let route = routes.get(&path).unwrap_or(&fallback);

    let mut head = format!("HTTP/1.1 {}\r\nConnection: close\r\n", route.status);
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if route.send_length {
        head.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}
