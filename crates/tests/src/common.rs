use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Query, Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use client::{ApiConfig, NoticeClient};
use serde_json::{json, Value};

/// One part of a multipart body as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub text: Option<String>,
    pub size: usize,
}

/// A request captured by the mock API.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
    pub parts: Vec<FormPart>,
}

impl Recorded {
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Text values sent under `name`, in order.
    pub fn text(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter(|p| p.name == name)
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    pub fn files(&self) -> Vec<&FormPart> {
        self.parts.iter().filter(|p| p.file_name.is_some()).collect()
    }
}

struct Reply {
    method: Method,
    path: String,
    status: StatusCode,
    body: Value,
}

struct MockState {
    replies: Vec<Reply>,
    requests: Mutex<Vec<Recorded>>,
}

#[derive(Default)]
pub struct MockApiBuilder {
    replies: Vec<Reply>,
}

impl MockApiBuilder {
    /// Answer `method path` with `status` and a JSON body.
    pub fn reply(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.replies.push(Reply {
            method,
            path: path.to_string(),
            status: StatusCode::from_u16(status).expect("valid status code"),
            body,
        });
        self
    }

    pub async fn start(self) -> MockApi {
        let state = Arc::new(MockState {
            replies: self.replies,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("mock API address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock API server");
        });

        MockApi {
            client: client_for(addr),
            state,
        }
    }
}

/// In-process stand-in for the notices REST API.
///
/// Requests are recorded for later assertions; unknown routes get a 404.
pub struct MockApi {
    pub client: NoticeClient,
    state: Arc<MockState>,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder::default()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The single request the test expects to have been made.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(State(state): State<Arc<MockState>>, req: Request) -> impl IntoResponse {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
        .map(|q| q.0)
        .unwrap_or_default();
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let mut json = None;
    let mut parts = Vec::new();
    if content_type.starts_with("multipart/form-data") {
        if let Ok(mut multipart) = Multipart::from_request(req, &()).await {
            while let Ok(Some(field)) = multipart.next_field().await {
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.unwrap_or_default();
                let text = file_name
                    .is_none()
                    .then(|| String::from_utf8_lossy(&bytes).into_owned());
                parts.push(FormPart {
                    name,
                    file_name,
                    content_type,
                    text,
                    size: bytes.len(),
                });
            }
        }
    } else {
        let bytes = Bytes::from_request(req, &()).await.unwrap_or_default();
        json = serde_json::from_slice(&bytes).ok();
    }

    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query,
        json,
        parts,
    });

    match state
        .replies
        .iter()
        .find(|r| r.method == method && r.path == path)
    {
        Some(reply) => (reply.status, Json(reply.body.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Route not found" })),
        ),
    }
}

fn client_for(addr: SocketAddr) -> NoticeClient {
    NoticeClient::new(&ApiConfig::new(format!("http://{addr}")))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> NoticeClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind spare port");
    let addr = listener.local_addr().expect("spare port address");
    drop(listener);
    client_for(addr)
}

/// A client with a one second timeout against a server that accepts
/// connections and never answers.
pub async fn stalled_client() -> NoticeClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stalled API");
    let addr = listener.local_addr().expect("stalled API address");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    NoticeClient::new(&ApiConfig {
        timeout_secs: 1,
        ..ApiConfig::new(format!("http://{addr}"))
    })
}

/// Successful read envelope around `data`.
pub fn envelope(data: Value) -> Value {
    json!({ "status": true, "statusCode": 200, "data": data })
}

pub fn notice_json(id: &str, title: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "noticeTitle": title,
        "noticeType": { "id": "PAYROLL_COMPENSATION", "name": "Payroll / Compensation" },
        "targetDepartments": [{ "id": "HR", "name": "Human Resources" }],
        "publishDate": "2026-03-10",
        "status": status
    })
}

pub fn page_json(notices: Vec<Value>, pagination: Value) -> Value {
    envelope(json!({ "notices": notices, "pagination": pagination }))
}
