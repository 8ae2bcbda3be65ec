//! Bearer token pair.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Which of the two stored tokens to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived credential sent with every request.
    Access,
    /// Longer-lived credential exchanged for new access tokens.
    Refresh,
}

impl TokenKind {
    /// Fixed storage key for this token.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }
}

/// Access and refresh tokens issued at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Access token.
    pub access: String,
    /// Refresh token.
    pub refresh: String,
}

impl AuthTokens {
    /// Creates a token pair.
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Returns the token of the given kind.
    pub fn get(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// Reads the `exp` claim of the access token when it is a JWT.
    ///
    /// The signature is not verified. Returns `None` for opaque tokens or
    /// tokens without an `exp` claim.
    pub fn access_expiry(&self) -> Option<Timestamp> {
        jwt_expiry(&self.access)
    }

    /// Returns true if the access token carries an `exp` claim in the past.
    ///
    /// Tokens without a readable expiry are never reported as expired.
    pub fn is_access_expired(&self, now: Timestamp) -> bool {
        self.access_expiry().is_some_and(|exp| exp <= now)
    }
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// Reads the `exp` claim of a JWT without verifying its signature.
///
/// Returns `None` for opaque tokens and tokens without an expiry.
pub fn jwt_expiry(token: &str) -> Option<Timestamp> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;
    Timestamp::from_second(claim.exp?).ok()
}
