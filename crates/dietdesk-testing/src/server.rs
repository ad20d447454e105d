use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tiny_http::{Header, Method, Response, Server};

/// Loopback HTTP server standing in for the remote diet/indent service.
///
/// Serves the given envelope for `GET /notifications` and an empty JSON
/// body for every `PUT`, recording each request line and its
/// `Authorization` header. One server per test; drop shuts it down.
pub struct MockApi {
    server: Arc<Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    authorization: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockApi {
    pub fn serve(notifications_body: Value) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("failed to bind mock server"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("mock server has no ip address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let authorization = Arc::new(Mutex::new(Vec::new()));
        let requests_writer = requests.clone();
        let authorization_writer = authorization.clone();
        let accept_loop = server.clone();

        let handle = std::thread::spawn(move || {
            for request in accept_loop.incoming_requests() {
                requests_writer
                    .lock()
                    .unwrap()
                    .push(format!("{} {}", request.method(), request.url()));

                if let Some(header) = request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Authorization"))
                {
                    authorization_writer
                        .lock()
                        .unwrap()
                        .push(header.value.to_string());
                }

                let json_header =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();

                let body = if request.method() == &Method::Get {
                    notifications_body.to_string()
                } else {
                    "{}".to_string()
                };

                let _ = request.respond(Response::from_string(body).with_header(json_header));
            }
        });

        Self {
            server,
            base_url,
            requests,
            authorization,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request seen so far, as `"<METHOD> <path>"` lines.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// `Authorization` header values in request order.
    pub fn authorization_headers(&self) -> Vec<String> {
        self.authorization.lock().unwrap().clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
