//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status and body, and records how many
//! requests arrived plus the last request path and `User-Agent`.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// What the server saw. Shared with the test through `ModelServer`.
#[derive(Debug, Default)]
pub struct Seen {
    pub requests: AtomicUsize,
    pub last_path: Mutex<Option<String>>,
    pub last_user_agent: Mutex<Option<String>>,
}

pub struct ModelServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    pub seen: Arc<Seen>,
}

impl ModelServer {
    pub fn request_count(&self) -> usize {
        self.seen.requests.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<String> {
        self.seen.last_path.lock().unwrap().clone()
    }

    pub fn last_user_agent(&self) -> Option<String> {
        self.seen.last_user_agent.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering `status` (e.g. "200 OK") with `body`.
/// The server runs until the process exits.
pub fn start(status: &'static str, body: Vec<u8>) -> ModelServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let seen = Arc::new(Seen::default());
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    ModelServer {
        base_url: format!("http://127.0.0.1:{}", port),
        seen,
    }
}

fn handle(mut stream: std::net::TcpStream, status: &str, body: &[u8], seen: &Seen) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path, user_agent) = parse_request(request);
    seen.requests.fetch_add(1, Ordering::SeqCst);
    *seen.last_path.lock().unwrap() = Some(path.to_string());
    *seen.last_user_agent.lock().unwrap() = user_agent.map(str::to_string);

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, path, optional User-Agent value).
fn parse_request(request: &str) -> (&str, &str, Option<&str>) {
    let mut lines = request.lines();
    let mut first = lines.next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let path = first.next().unwrap_or("");
    let mut user_agent = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (method, path, user_agent)
}
