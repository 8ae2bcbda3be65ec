//! Login, logout and token refresh.

use derive_more::Deref;
use fleetdesk_core::types::{AuthTokens, TokenKind, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::response;
use crate::http::{HttpClient, RequestOptions};
use crate::store::usable;
use crate::{Error, Result, TRACING_TARGET_AUTH};

/// Token endpoint.
const TOKEN_PATH: &str = "/api/v1/auth/token/";

/// Refresh endpoint.
const REFRESH_PATH: &str = "/api/v1/auth/token/refresh/";

/// Message used when a failed login carries no usable error body.
const LOGIN_FAILED: &str = "Failed to login";

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    refresh: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The server-provided user, or one built from the login username.
    pub user: User,
    /// The stored token pair.
    pub tokens: AuthTokens,
}

/// Exchanges credentials for tokens and manages their lifecycle.
///
/// State lives entirely in the token store: the client is authenticated
/// exactly when an access token is stored.
#[derive(Clone, Debug, Deref)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    /// Creates the service on top of a request wrapper.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Logs in and stores the returned token pair.
    ///
    /// The request carries no `Authorization` header, even when a stale
    /// token is stored.
    ///
    /// # Errors
    ///
    /// Returns an authentication error carrying the server's `detail` or
    /// `message` (or `"Failed to login"`) when the server rejects the
    /// credentials. Returns a serialization error if a success response
    /// lacks either token; nothing is stored in that case.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        tracing::debug!(target: TRACING_TARGET_AUTH, username, "Logging in");

        let options = RequestOptions::post()
            .with_json(&Credentials { username, password })?
            .without_auth();
        let response = self.http.send(TOKEN_PATH, options).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message =
                response::error_message(&body).unwrap_or_else(|| LOGIN_FAILED.to_owned());

            tracing::warn!(
                target: TRACING_TARGET_AUTH,
                username,
                status = status.as_u16(),
                error = %message,
                "Login rejected"
            );
            return Err(Error::authentication()
                .with_status(status.as_u16())
                .with_message(message));
        }

        let body: TokenResponse = response::decode(response).await?;
        let (Some(access), Some(refresh)) = (
            body.access.filter(|t| !t.is_empty()),
            body.refresh.filter(|t| !t.is_empty()),
        ) else {
            tracing::warn!(
                target: TRACING_TARGET_AUTH,
                username,
                "Login response lacks the token pair"
            );
            return Err(Error::serialization()
                .with_message("login response is missing the access or refresh token"));
        };

        let tokens = AuthTokens::new(access, refresh);
        self.http.token_store().write(&tokens).await?;

        let user = body
            .user
            .and_then(|value| match serde_json::from_value::<User>(value) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(
                        target: TRACING_TARGET_AUTH,
                        error = %err,
                        "Ignoring malformed user in login response"
                    );
                    None
                }
            })
            .unwrap_or_else(|| User::from_username(username));

        tracing::info!(target: TRACING_TARGET_AUTH, username = %user.username, "Logged in");
        Ok(LoginOutcome { user, tokens })
    }

    /// Forgets both tokens. The server is not contacted.
    pub async fn logout(&self) -> Result<()> {
        self.http.token_store().clear().await?;
        tracing::info!(target: TRACING_TARGET_AUTH, "Logged out");
        Ok(())
    }

    /// Exchanges the stored refresh token for a new access token.
    ///
    /// A rotated refresh token is stored when the server returns one;
    /// otherwise the current refresh token is kept. Never called
    /// implicitly.
    ///
    /// # Errors
    ///
    /// Returns an authentication error without contacting the server when no
    /// refresh token is stored, and a status-derived error when the server
    /// rejects the token.
    pub async fn refresh(&self) -> Result<AuthTokens> {
        let store = self.http.token_store();
        let Some(current) = usable(store.read(TokenKind::Refresh).await) else {
            return Err(Error::authentication().with_message("No refresh token stored"));
        };

        tracing::debug!(target: TRACING_TARGET_AUTH, "Refreshing access token");

        let options = RequestOptions::post()
            .with_json(&RefreshRequest { refresh: &current })?
            .without_auth();
        let response = self.http.send(REFRESH_PATH, options).await?;
        let response = response::check_status(response).await.inspect_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET_AUTH,
                status = err.status(),
                error = %err,
                "Token refresh rejected"
            );
        })?;

        let body: RefreshResponse = response::decode(response).await?;
        let tokens = AuthTokens::new(body.access, body.refresh.unwrap_or(current));
        store.write(&tokens).await?;

        tracing::info!(target: TRACING_TARGET_AUTH, "Access token refreshed");
        Ok(tokens)
    }

    /// Returns true iff an access token is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.http.token_store().is_authenticated().await
    }
}
