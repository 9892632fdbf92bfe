//! Authentication endpoints.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{ChangePasswordRequest, LoginRequest, LoginResponse};

/// POST /v1/auth/login
pub async fn login(client: &HttpClient, request: &LoginRequest) -> Result<LoginResponse> {
    client.post_json("/v1/auth/login", request).await
}

/// DELETE /v1/auth/logout
pub async fn logout(client: &HttpClient) -> Result<()> {
    client.delete("/v1/auth/logout").await
}

/// POST /v1/auth/change-password
pub async fn change_password(client: &HttpClient, request: &ChangePasswordRequest) -> Result<()> {
    client.post_json("/v1/auth/change-password", request).await
}
