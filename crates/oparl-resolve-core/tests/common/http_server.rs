//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes, one response per connection:
//! - `/ok`: 200, body `hello`
//! - `/missing`: 404, body `not found`
//! - `/error`: 500, body `boom`
//! - `/empty`: 204, no body
//! - `/binary`: 200, body that is not valid UTF-8
//! - `/redirect`: 302 to `/ok`
//! - `/echo`: 200, body = request's `User-Agent` and `X-Probe` values joined by `|`
//! - anything else: 404, empty body

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on a port nothing listens on (bound, then released).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/ok", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let (path, user_agent, probe) = parse_request(request);

    let (status, extra, body): (&str, String, Vec<u8>) = match path {
        "/ok" => ("200 OK", String::new(), b"hello".to_vec()),
        "/missing" => ("404 Not Found", String::new(), b"not found".to_vec()),
        "/error" => ("500 Internal Server Error", String::new(), b"boom".to_vec()),
        "/empty" => ("204 No Content", String::new(), Vec::new()),
        "/binary" => ("200 OK", String::new(), vec![0xff, 0xfe, 0x00, 0x41]),
        "/redirect" => ("302 Found", "Location: /ok\r\n".to_string(), Vec::new()),
        "/echo" => (
            "200 OK",
            String::new(),
            format!("{}|{}", user_agent, probe).into_bytes(),
        ),
        _ => ("404 Not Found", String::new(), Vec::new()),
    };

    let length = if status.starts_with("204") {
        String::new()
    } else {
        format!("Content-Length: {}\r\n", body.len())
    };
    let head = format!(
        "HTTP/1.1 {}\r\n{}{}Connection: close\r\n\r\n",
        status, length, extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}

/// Returns (path, User-Agent value, X-Probe value).
fn parse_request(request: &str) -> (&str, &str, &str) {
    let mut path = "";
    let mut user_agent = "";
    let mut probe = "";
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if i == 0 {
            path = line.split_whitespace().nth(1).unwrap_or("");
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("user-agent") {
                user_agent = value.trim();
            } else if name.eq_ignore_ascii_case("x-probe") {
                probe = value.trim();
            }
        }
    }
    (path, user_agent, probe)
}
