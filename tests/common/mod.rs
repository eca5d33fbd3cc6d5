//! Shared helpers for integration tests

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Answer one request on a random local port with `200 OK` and `body`
///
/// Returns the endpoint URL and a handle that yields the request line.
pub fn serve_json_once(body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().expect("No request arrived");
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("Unreadable request");
        // Headers end at the first blank line
        let mut header = String::new();
        while reader.read_line(&mut header).is_ok_and(|n| n > 2) {
            header.clear();
        }

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
        .expect("Failed to respond");
        request_line.trim_end().to_string()
    });

    (format!("http://127.0.0.1:{}/api/books", port), handle)
}
