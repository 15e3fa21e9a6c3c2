#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;

/// One-shot HTTP fixture server. Accepts a single connection, reads the full
/// request (headers plus `Content-Length` body), answers with the scripted
/// response, and hands the captured request bytes back through the handle.
pub struct FixtureServer {
    pub url: String,
    handle: thread::JoinHandle<Vec<u8>>,
}

impl FixtureServer {
    /// Block until the request was served and return the raw request bytes.
    pub fn into_request(self) -> Vec<u8> {
        self.handle.join().expect("fixture server thread panicked")
    }
}

/// Spawn a fixture server that answers exactly one request.
/// `url` points at a `process` route on the ephemeral port.
pub fn serve_once(response: String) -> FixtureServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept fixture connection");
        let request = read_request(&mut stream);
        stream
            .write_all(response.as_bytes())
            .expect("write fixture response");
        let _ = stream.shutdown(Shutdown::Both);
        request
    });

    FixtureServer {
        url: format!("http://{addr}/process"),
        handle,
    }
}

/// 200 response carrying a JSON body.
pub fn json_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// An endpoint URL nothing is listening on (the listener is bound to reserve
/// a port, then dropped before the URL is used).
pub fn dead_endpoint_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway listener addr");
    drop(listener);
    format!("http://{addr}/process")
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read fixture request");
        if n == 0 {
            return buf;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read fixture body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    buf
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
