#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use tiny_http::{Header, Response, Server};

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Canned answer for one method + path.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn get(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            method: "GET",
            path,
            status: 200,
            body: body.into(),
        }
    }

    pub fn post(path: &'static str, status: u16) -> Self {
        Self {
            method: "POST",
            path,
            status,
            body: String::new(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

/// In-process HTTP server answering from a fixed route table and recording requests.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("Failed to bind mock server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock server has no IP address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().to_string();
                let url = request.url().to_string();
                let headers = request
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string(), h.value.to_string()))
                    .collect();

                recorded.lock().unwrap().push(RecordedRequest {
                    method: method.clone(),
                    url: url.clone(),
                    headers,
                    body,
                });

                let path = url.split('?').next().unwrap_or("/").to_string();
                let response = match routes
                    .iter()
                    .find(|route| route.method == method && route.path == path)
                {
                    Some(route) => {
                        let mut response =
                            Response::from_string(route.body.clone()).with_status_code(route.status);
                        response.add_header(
                            Header::from_bytes(
                                b"Content-Type".as_slice(),
                                b"application/json".as_slice(),
                            )
                            .unwrap(),
                        );
                        response
                    }
                    None => Response::from_string("Not found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url == path)
            .count()
    }
}

/// A base url on which nothing listens.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}
