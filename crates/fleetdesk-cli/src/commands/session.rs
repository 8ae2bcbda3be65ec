//! `login`, `logout`, `status` and `refresh`.

use clap::Args;
use fleetdesk_client::TokenStore;
use fleetdesk_core::types::{TokenKind, jwt_expiry};
use jiff::Timestamp;
use serde_json::{Value, json};

use super::Context;
use crate::output::print_json;

/// Credentials for `login`.
#[derive(Clone, Args)]
pub struct LoginArgs {
    /// Account username
    #[arg(long, env = "FLEET_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(long, env = "FLEET_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl std::fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginArgs")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

pub async fn login(ctx: &Context, args: LoginArgs) -> anyhow::Result<()> {
    let outcome = ctx.auth.login(&args.username, &args.password).await?;
    print_json(&outcome.user)?;
    ctx.toasts
        .success(format!("Logged in as {}", outcome.user.username))
        .await;
    Ok(())
}

pub async fn logout(ctx: &Context) -> anyhow::Result<()> {
    ctx.auth.logout().await?;
    ctx.toasts.info("Logged out").await;
    Ok(())
}

pub async fn status(ctx: &Context) -> anyhow::Result<()> {
    let report = status_report(ctx.auth.token_store().as_ref(), Timestamp::now()).await;
    print_json(&report)?;

    if report["access_expired"] == true {
        ctx.toasts
            .warning("Access token has expired; run `fleetdesk refresh`")
            .await;
    }
    Ok(())
}

/// Describes the stored session as of `now`.
async fn status_report(store: &dyn TokenStore, now: Timestamp) -> Value {
    let authenticated = store.is_authenticated().await;
    let has_refresh = store
        .read(TokenKind::Refresh)
        .await
        .is_some_and(|token| !token.is_empty());

    let access = store.read(TokenKind::Access).await;
    let expires_at = access.as_deref().and_then(jwt_expiry);

    json!({
        "authenticated": authenticated,
        "refresh_token": has_refresh,
        "access_expires_at": expires_at.map(|ts| ts.to_string()),
        "access_expired": expires_at.map(|exp| exp <= now),
    })
}

pub async fn refresh(ctx: &Context) -> anyhow::Result<()> {
    ctx.auth.refresh().await?;
    ctx.toasts.success("Access token refreshed").await;
    Ok(())
}
