//! REST API helpers for the voyage backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result` so callers can degrade UI behavior (toast,
//! inline message, retry) without crashing hydration. Failures are also
//! logged to the browser console.

#![allow(clippy::unused_async)]

use super::types::{CreateVoyagePayload, UnitType, VesselOption, Voyage};

/// Failure surfaced by an API helper.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on the server")]
    Unavailable,
}

/// Fetch all voyages from `GET /api/voyage/getAll`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_voyages() -> Result<Vec<Voyage>, ApiError> {
    get_json("/api/voyage/getAll").await
}

/// Fetch the vessel selector options from `GET /api/vessel/getAll`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_vessels() -> Result<Vec<VesselOption>, ApiError> {
    get_json("/api/vessel/getAll").await
}

/// Fetch the unit-type reference list from `GET /api/unitType/getAll`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_unit_types() -> Result<Vec<UnitType>, ApiError> {
    get_json("/api/unitType/getAll").await
}

/// Create a voyage via `POST /api/voyage/create`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the payload cannot be encoded, the request
/// fails, or the server answers with a non-2xx status.
pub async fn create_voyage(payload: &CreateVoyagePayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/voyage/create")
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("create voyage request failed: {e}");
                ApiError::Network(e.to_string())
            })?;
        if resp.ok() {
            Ok(())
        } else {
            log::warn!("create voyage rejected with status {}", resp.status());
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Delete a voyage via `DELETE /api/voyage/delete?id={id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn delete_voyage(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/voyage/delete?id={id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| {
                log::warn!("delete voyage request failed: {e}");
                ApiError::Network(e.to_string())
            })?;
        if resp.ok() {
            Ok(())
        } else {
            log::warn!("delete voyage rejected with status {}", resp.status());
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Shared GET-and-decode helper for the three list endpoints.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| {
            log::warn!("GET {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
    if !resp.ok() {
        log::warn!("GET {url} returned status {}", resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: serde::de::DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}
