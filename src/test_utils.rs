#[cfg(test)]
pub mod test_helpers {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use reqwest::Url;

    use crate::app::App;
    use crate::autocomplete::Autocomplete;
    use crate::dropdown::DropdownState;
    use crate::input::InputState;
    use crate::suggest::{SuggestRequest, SuggestResponse, SuggestState};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn books(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    /// Controller wired to test channels instead of a worker thread
    pub struct TestAutocomplete {
        pub autocomplete: Autocomplete,
        pub request_rx: tokio::sync::mpsc::UnboundedReceiver<SuggestRequest>,
        pub response_tx: std::sync::mpsc::Sender<SuggestResponse>,
    }

    impl TestAutocomplete {
        /// Drain every request the controller has sent so far
        pub fn sent_requests(&mut self) -> Vec<SuggestRequest> {
            let mut requests = Vec::new();
            while let Ok(request) = self.request_rx.try_recv() {
                requests.push(request);
            }
            requests
        }

        /// Only the `Query` requests, in order, as `(query, request_id)`
        pub fn sent_queries(&mut self) -> Vec<(String, u64)> {
            self.sent_requests()
                .into_iter()
                .filter_map(|request| match request {
                    SuggestRequest::Query { query, request_id } => Some((query, request_id)),
                    SuggestRequest::Cancel { .. } => None,
                })
                .collect()
        }
    }

    pub fn test_autocomplete() -> TestAutocomplete {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();

        let mut suggest = SuggestState::new();
        suggest.set_channels(request_tx, response_rx);

        TestAutocomplete {
            autocomplete: Autocomplete::new(InputState::new(), DropdownState::new(), suggest),
            request_rx,
            response_tx,
        }
    }

    /// Controller with `titles` already rendered in the dropdown
    pub fn autocomplete_with_suggestions(titles: &[&str]) -> TestAutocomplete {
        let mut harness = test_autocomplete();
        harness.autocomplete.render_suggestions(books(titles));
        harness
    }

    /// App wired to test channels instead of a worker thread
    pub struct TestApp {
        pub app: App,
        pub request_rx: tokio::sync::mpsc::UnboundedReceiver<SuggestRequest>,
        pub response_tx: std::sync::mpsc::Sender<SuggestResponse>,
    }

    pub fn test_app() -> TestApp {
        let TestAutocomplete {
            autocomplete,
            request_rx,
            response_tx,
        } = test_autocomplete();

        TestApp {
            app: App::new(autocomplete, "http://127.0.0.1:5000/api/books".to_string()),
            request_rx,
            response_tx,
        }
    }

    /// App with `titles` already rendered in the dropdown
    pub fn app_with_suggestions(titles: &[&str]) -> TestApp {
        let mut harness = test_app();
        harness.app.autocomplete.render_suggestions(books(titles));
        harness
    }

    /// A local HTTP server that answers exactly one request
    pub struct StubServer {
        pub url: Url,
        handle: JoinHandle<Option<String>>,
    }

    impl StubServer {
        /// Wait for the server thread and return the request line it saw
        pub fn request_line(self) -> Option<String> {
            self.handle.join().ok().flatten()
        }
    }

    /// Serve one response with the given status line and JSON body
    pub fn serve_once(status: &str, body: &str) -> StubServer {
        serve_once_after(Duration::ZERO, status, body)
    }

    /// Serve one response after holding the connection for `delay`
    pub fn serve_once_after(delay: Duration, status: &str, body: &str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = Url::parse(&format!("http://127.0.0.1:{}/api/books", port)).unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().ok()?;
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).ok()?;
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }
            std::thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();

            String::from_utf8_lossy(&received)
                .lines()
                .next()
                .map(|line| line.to_string())
        });

        StubServer { url, handle }
    }

    /// An endpoint on a port nobody is listening on
    pub fn refused_endpoint() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        Url::parse(&format!("http://127.0.0.1:{}/api/books", port)).unwrap()
    }

    pub fn test_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }
}
