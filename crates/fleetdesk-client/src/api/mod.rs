//! Typed facade over the fleet-management REST API.
//!
//! Every backend call goes through [`FleetApi`]. The generic verbs handle
//! status classification and JSON decoding; the resource methods in the
//! submodules only name paths and types.

mod analytics;
mod drivers;
mod maintenance;
pub(crate) mod response;
mod routes;
mod tracking;
mod vehicles;

use std::sync::Arc;

use derive_more::Deref;
use fleetdesk_core::query::query_pairs;
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::http::{HttpClient, RequestOptions};
use crate::store::TokenStore;
use crate::{Result, TRACING_TARGET_API};

/// Root of every fleet-management resource path.
pub(crate) const FLEET_PREFIX: &str = "/api/v1/fleet-management";

/// Percent-encodes an identifier as a single path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Client for the fleet-management API.
///
/// Dereferences to the underlying [`HttpClient`] for access to the token
/// store and configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use fleetdesk_client::{ClientConfig, FleetApi, MemoryTokenStore};
/// use fleetdesk_core::types::{VehicleFilter, VehicleStatus};
///
/// let api = FleetApi::from_config(ClientConfig::default(), Arc::new(MemoryTokenStore::new()))?;
/// let active = api
///     .vehicles(&VehicleFilter::default().with_status(VehicleStatus::Active))
///     .await?;
/// ```
#[derive(Clone, Debug, Deref)]
pub struct FleetApi {
    http: HttpClient,
}

impl FleetApi {
    /// Wraps an existing request wrapper.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Builds the request wrapper and the facade in one step.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid.
    pub fn from_config(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        HttpClient::new(config, store).map(Self::new)
    }

    /// Returns the underlying request wrapper.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Sends a `GET` with `params` flattened into the query string.
    ///
    /// Pass `&()` when there are no parameters.
    ///
    /// # Errors
    ///
    /// Returns a status-derived error for non-2xx responses, a
    /// serialization error if the body does not decode into `T`, or a
    /// transport error.
    pub async fn get<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let options = RequestOptions::get().with_query_pairs(query_pairs(params)?);
        let response = self.execute(path, options).await?;
        self.decode(&Method::GET, path, response).await
    }

    /// Sends a `POST` with a JSON body and decodes the reply.
    ///
    /// # Errors
    ///
    /// See [`FleetApi::get`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::post().with_json(body)?;
        let response = self.execute(path, options).await?;
        self.decode(&Method::POST, path, response).await
    }

    /// Sends a `PATCH` with a JSON body and decodes the reply.
    ///
    /// # Errors
    ///
    /// See [`FleetApi::get`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::patch().with_json(body)?;
        let response = self.execute(path, options).await?;
        self.decode(&Method::PATCH, path, response).await
    }

    /// Sends a `DELETE`. Any success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns a status-derived error for non-2xx responses or a transport
    /// error.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(path, RequestOptions::delete()).await?;
        Ok(())
    }

    /// Sends the request and rejects non-2xx responses.
    async fn execute(&self, path: &str, options: RequestOptions) -> Result<Response> {
        let method = options.method.clone();
        let result = match self.http.send(path, options).await {
            Ok(response) => response::check_status(response).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_API,
                    method = %method,
                    path,
                    status = response.status().as_u16(),
                    "API call succeeded"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_API,
                    method = %method,
                    path,
                    status = err.status(),
                    error = %err,
                    "API call failed"
                );
                Err(err)
            }
        }
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        response: Response,
    ) -> Result<T> {
        response::decode(response).await.inspect_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET_API,
                method = %method,
                path,
                error = %err,
                "API response did not decode"
            );
        })
    }
}
