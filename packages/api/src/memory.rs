use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, HttpBackend, Method};

type Script = VecDeque<Result<ApiResponse, ApiError>>;

/// In-memory HttpBackend for tests.
///
/// Responses are scripted per method and path. Each call pops the next
/// scripted response; the last one stays in place and keeps answering.
/// Unscripted routes answer `404 {"error": "Not found"}`.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    routes: Arc<Mutex<HashMap<(Method, String), Script>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a JSON response for `method path`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        let body = serde_json::to_vec(&body).unwrap_or_default();
        self.push(method, path, Ok(ApiResponse { status, body }))
    }

    /// Script a response with a raw, possibly non-JSON body.
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &[u8]) -> &Self {
        self.push(
            method,
            path,
            Ok(ApiResponse {
                status,
                body: body.to_vec(),
            }),
        )
    }

    /// Script a transport failure for `method path`.
    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(ApiError::Transport(message.to_string())))
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn push(&self, method: Method, path: &str, response: Result<ApiResponse, ApiError>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, normalize(path)))
            .or_default()
            .push_back(response);
        self
    }

    fn next_response(&self, method: Method, url: &str) -> Result<ApiResponse, ApiError> {
        let mut routes = self.routes.lock().unwrap();
        let script = routes
            .iter_mut()
            .filter(|((m, path), _)| *m == method && url.ends_with(path.as_str()))
            .max_by_key(|((_, path), _)| path.len())
            .map(|(_, script)| script);

        match script {
            Some(script) if script.len() > 1 => script.pop_front().unwrap_or_else(not_found),
            Some(script) => script.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

impl HttpBackend for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.next_response(request.method, &request.url);
        self.requests.lock().unwrap().push(request);
        response
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

fn not_found() -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse {
        status: 404,
        body: br#"{"error":"Not found"}"#.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Body;
    use serde_json::json;

    fn get(url: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: url.to_string(),
            body: Body::Empty,
            with_credentials: false,
        }
    }

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let backend = MemoryBackend::new();
        backend
            .respond(Method::Get, "/articles", 500, json!({"error": "boom"}))
            .respond(Method::Get, "/articles", 200, json!([]));

        let first = backend.send(get("/api/articles")).await.unwrap();
        let second = backend.send(get("/api/articles")).await.unwrap();
        let third = backend.send(get("/api/articles")).await.unwrap();

        assert_eq!(first.status, 500);
        assert_eq!(second.status, 200);
        assert_eq!(third.status, 200);
        assert_eq!(backend.request_count(), 3);
    }

    #[tokio::test]
    async fn test_longest_path_wins() {
        let backend = MemoryBackend::new();
        backend
            .respond(Method::Get, "/articles", 200, json!([]))
            .respond(Method::Get, "/my-articles", 401, json!({"error": "Unauthorized"}));

        let mine = backend.send(get("/api/my-articles")).await.unwrap();
        assert_eq!(mine.status, 401);
    }

    #[tokio::test]
    async fn test_unscripted_route_is_not_found() {
        let backend = MemoryBackend::new();
        let response = backend.send(get("/api/nothing")).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let backend = MemoryBackend::new();
        backend.fail(Method::Get, "/check_session", "offline");
        let err = backend.send(get("/api/check_session")).await.unwrap_err();
        assert_eq!(err, ApiError::Transport("offline".into()));
    }
}
