//! HTTP client for the campus backend.
//!
//! Single point of outbound configuration: base URL, timeout, bearer-token
//! attachment, and envelope unwrapping. Domain API modules build one call
//! each on top of the verb helpers here and never see the envelope — they
//! get the payload or a [`ClientError`] with a resolved message.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{resolve_message, Envelope};
use crate::error::{ClientError, Result};
use crate::storage::SessionStorage;

/// Configured request pipeline. Cheap to clone; the underlying reqwest
/// client is reference-counted.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
    storage: SessionStorage,
}

/// Lenient view of an error-status body. Backends are not guaranteed to
/// send a full envelope alongside a 4xx/5xx.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig, storage: SessionStorage) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    pub async fn get<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn post_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.http.post(self.url(path)).query(query)).await
    }

    pub async fn put_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.http.put(self.url(path)).query(query)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.delete(self.url(path))).await
    }

    pub async fn delete_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.http.delete(self.url(path)).query(query)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the persisted token (when present), send, and unwrap.
    /// Unit endpoints decode their absent payload as `()` via JSON null.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let request = match self.storage.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "network error");
                return Err(ClientError::Network(e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "network error");
                return Err(ClientError::Network(e));
            }
        };

        if !status.is_success() {
            return Err(self.error_for_status(status, &body));
        }

        let envelope: Envelope<Value> = serde_json::from_str(&body)?;
        let data = envelope.into_result()?.unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Map an HTTP error status to a [`ClientError`], logging per status
    /// class. 401 additionally tears down the persisted session; the
    /// redirect-to-login itself belongs to whoever owns navigation.
    fn error_for_status(&self, status: StatusCode, body: &str) -> ClientError {
        let error_body: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = resolve_message(error_body.error_message, error_body.message);

        match status.as_u16() {
            400 => tracing::error!(%message, "request rejected"),
            401 => {
                tracing::warn!("unauthorized response, clearing persisted session");
                self.storage.clear_auth();
                return ClientError::Unauthorized { message };
            }
            403 => tracing::error!("permission denied"),
            500 => tracing::error!("server error"),
            _ => tracing::error!(status = status.as_u16(), %message, "request failed"),
        }

        ClientError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Building;
    use axum::extract::Query;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> (tempfile::TempDir, HttpClient) {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = SessionStorage::new(dir.path().join("session"));
        let client = HttpClient::new(&ClientConfig::new(base_url), storage);
        (dir, client)
    }

    #[tokio::test]
    async fn success_envelope_resolves_to_data() {
        let router = Router::new().route(
            "/v1/building/get",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["building_uuid"], "b-1");
                Json(serde_json::json!({
                    "output": "Success",
                    "code": 0,
                    "message": "ok",
                    "data": {
                        "building_uuid": "b-1",
                        "building_num": "B01",
                        "building_name": "Science"
                    }
                }))
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);

        let building: Building = client
            .get("/v1/building/get", &[("building_uuid", "b-1")])
            .await
            .unwrap();
        assert_eq!(building.building_name, "Science");
    }

    #[tokio::test]
    async fn operation_failed_rejects_with_error_message() {
        let router = Router::new().route(
            "/v1/building/add",
            axum::routing::post(|| async {
                Json(serde_json::json!({
                    "output": "OperationFailed",
                    "code": 1,
                    "message": "generic",
                    "error_message": "building number already exists"
                }))
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);

        let result: Result<()> = client
            .post_query("/v1/building/add", &[("building_num", "B01")])
            .await;
        match result {
            Err(ClientError::Api { message }) => {
                assert_eq!(message, "building number already exists")
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_persisted() {
        let router = Router::new().route(
            "/v1/classroom/get",
            get(|headers: HeaderMap| async move {
                assert_eq!(headers["authorization"], "Bearer tok-123");
                Json(serde_json::json!({"output": "Success", "code": 0, "data": null}))
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);
        client.storage().set_token("tok-123").unwrap();

        let empty: [(&str, &str); 0] = [];
        client
            .get::<_, ()>("/v1/classroom/get", &empty)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn request_proceeds_without_token() {
        let router = Router::new().route(
            "/v1/classroomType/get",
            get(|headers: HeaderMap| async move {
                assert!(!headers.contains_key("authorization"));
                Json(serde_json::json!({"output": "Success", "code": 0, "data": null}))
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);

        let empty: [(&str, &str); 0] = [];
        client
            .get::<_, ()>("/v1/classroomType/get", &empty)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_clears_persisted_session() {
        let router = Router::new().route(
            "/v1/building/getPage",
            get(|| async {
                (
                    axum::http::StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({"message": "token expired"})),
                )
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);
        client.storage().set_token("stale").unwrap();
        client.storage().set_user_type(crate::types::UserType::Teacher).unwrap();

        let empty: [(&str, &str); 0] = [];
        let result: Result<()> = client.get("/v1/building/getPage", &empty).await;
        match result {
            Err(ClientError::Unauthorized { message }) => assert_eq!(message, "token expired"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
        assert_eq!(client.storage().token(), None);
        assert_eq!(client.storage().user_type(), None);
        assert_eq!(client.storage().user_info(), None);
    }

    #[tokio::test]
    async fn error_status_resolves_message_chain() {
        let router = Router::new().route(
            "/v1/classroom/delete",
            axum::routing::delete(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error_message": "db down", "message": "generic"})),
                )
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);

        let result: Result<()> = client
            .delete_query("/v1/classroom/delete", &[("classroom_uuid", "c-1")])
            .await;
        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "db down");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_request_maps_to_status_error() {
        let router = Router::new().route(
            "/v1/auth/login",
            axum::routing::post(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error_message": "wrong password"})),
                )
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);

        let result: Result<()> = client
            .post_json("/v1/auth/login", &serde_json::json!({"user_name": "t1"}))
            .await;
        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "wrong password");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn forbidden_maps_to_status_error() {
        let router = Router::new().route(
            "/v1/building/delete",
            axum::routing::delete(|| async {
                (
                    axum::http::StatusCode::FORBIDDEN,
                    Json(serde_json::json!({"message": "not allowed"})),
                )
            }),
        );
        let base = serve(router).await;
        let (_dir, client) = client_for(&base);
        client.storage().set_token("tok").unwrap();

        let result: Result<()> = client
            .delete_query("/v1/building/delete", &[("building_uuid", "b-1")])
            .await;
        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "not allowed");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
        // Only 401 tears the session down.
        assert_eq!(client.storage().token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn connect_failure_is_a_network_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (_dir, client) = client_for(&format!("http://{addr}"));
        let empty: [(&str, &str); 0] = [];
        let result: Result<()> = client.get("/v1/building/getPage", &empty).await;
        match result {
            Err(err @ ClientError::Network(_)) => assert_eq!(err.to_string(), "network error"),
            other => panic!("expected Network error, got {other:?}"),
        }
    }
}
