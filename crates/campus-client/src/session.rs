//! In-memory session state.
//!
//! [`Session`] is an explicit context object owned by the caller — there is
//! no module-level singleton. It holds the reactive copy of the token, user
//! type, and profile, and is the sole writer to [`SessionStorage`] for
//! those keys. Two states: anonymous (no token) and authenticated.

use crate::api::auth;
use crate::error::{ClientError, Result};
use crate::http::HttpClient;
use crate::types::{LoginRequest, UserInfo, UserType};

#[derive(Debug)]
pub struct Session {
    client: HttpClient,
    token: Option<String>,
    user_type: Option<UserType>,
    user_info: Option<UserInfo>,
}

impl Session {
    /// Hydrate from whatever the storage holds. Partial or corrupted
    /// persisted state degrades field-by-field to `None`.
    pub fn new(client: HttpClient) -> Self {
        let storage = client.storage();
        let token = storage.token();
        let user_type = storage.user_type();
        let user_info = storage.user_info();
        Self {
            client,
            token,
            user_type,
            user_info,
        }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user_type
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Authenticate. On success the token, user type, and matching profile
    /// are stored in memory and persisted; on failure the session stays
    /// anonymous and the error propagates unchanged.
    pub async fn login(&mut self, request: &LoginRequest) -> Result<()> {
        let response = auth::login(&self.client, request).await?;

        // The backend must supply the profile matching the role it claims.
        let user_info = response.user_info().ok_or_else(|| ClientError::Api {
            message: format!(
                "login response is missing the profile for user type {}",
                response.user_type
            ),
        })?;

        // Token last: its presence is what marks the persisted session as
        // authenticated, so it must never hit disk ahead of a write that
        // then fails. A partial write is rolled back wholesale.
        let storage = self.client.storage();
        let persisted = storage
            .set_user_info(&user_info)
            .and_then(|_| storage.set_user_type(response.user_type))
            .and_then(|_| storage.set_token(&response.token));
        if let Err(e) = persisted {
            storage.clear_auth();
            return Err(e);
        }

        self.token = Some(response.token);
        self.user_type = Some(response.user_type);
        self.user_info = Some(user_info);

        tracing::info!(user_type = %response.user_type, "logged in");
        Ok(())
    }

    /// Log out. The server call is best-effort: whether it resolves,
    /// rejects, or times out, the local session is torn down.
    pub async fn logout(&mut self) {
        if let Err(e) = auth::logout(&self.client).await {
            tracing::warn!(error = %e, "logout request failed, clearing local session anyway");
        }

        self.token = None;
        self.user_type = None;
        self.user_info = None;
        self.client.storage().clear_auth();
    }
}
