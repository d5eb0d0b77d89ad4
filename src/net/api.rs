//! HTTP helpers for the image-generation service.
//!
//! Browser builds (`csr`): real requests via `gloo-net`. Non-browser builds:
//! stubs returning degraded values, so the pure state layer stays testable
//! on the host.
//!
//! ERROR HANDLING
//! ==============
//! Health and checkpoint-list failures are swallowed into degraded values
//! (synthetic error health, empty list) — they only ever dim the status
//! indicator. Generate and checkpoint-load failures surface as `Err(String)`
//! with the service's `detail` message when one is present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BackendHealth, CheckpointInfo, GenerationRequest, GenerationResponse, LoadProgress,
};

/// Base URL used when the host page does not configure one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Resolve the service base URL.
///
/// Reads the `data-api-base` attribute from the document root so a deployment
/// can point the client elsewhere without rebuilding; falls back to
/// [`DEFAULT_API_BASE`].
pub fn api_base() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Some(base) = el.get_attribute("data-api-base") {
                let base = base.trim().trim_end_matches('/');
                if !base.is_empty() {
                    return base.to_owned();
                }
            }
        }
    }
    DEFAULT_API_BASE.to_owned()
}

/// Fetch service health from `GET /health`.
///
/// Never fails: transport errors, non-2xx responses, and unparseable bodies
/// all collapse into a synthetic error record.
pub async fn check_health() -> BackendHealth {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/health", api_base());
        match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) if resp.ok() => resp
                .json::<BackendHealth>()
                .await
                .unwrap_or_else(|e| BackendHealth::unreachable(&e.to_string())),
            Ok(resp) => BackendHealth::unreachable(&format!("health returned {}", resp.status())),
            Err(e) => BackendHealth::unreachable(&e.to_string()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        BackendHealth::unreachable("not available outside the browser")
    }
}

/// Fetch the checkpoint list from `GET /checkpoints`.
///
/// Returns an empty list on any failure; the built-in checkpoints are always
/// available regardless.
pub async fn list_checkpoints() -> Vec<CheckpointInfo> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/checkpoints", api_base());
        let Ok(resp) = gloo_net::http::Request::get(&url).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<super::types::CheckpointsResponse>()
            .await
            .map(|r| r.checkpoints)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Ask the service to swap to another checkpoint via `POST /load_checkpoint`.
///
/// The swap continues server-side after this resolves; callers poll
/// [`loading_progress`] concurrently until it reports a terminal status.
///
/// # Errors
///
/// Returns the service's `detail` message on a non-2xx response, or the raw
/// transport error message.
pub async fn load_checkpoint(checkpoint: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/load_checkpoint", api_base());
        let body = serde_json::json!({ "checkpoint": checkpoint });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let fallback = format!("checkpoint load failed ({})", resp.status());
        let text = resp.text().await.unwrap_or_default();
        Err(super::types::error_detail(&text, &fallback))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = checkpoint;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch checkpoint-swap progress from `GET /loading_progress`.
///
/// # Errors
///
/// Returns an error string when the request fails or the body is malformed;
/// the caller treats that as the end of the loading state.
pub async fn loading_progress() -> Result<LoadProgress, String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/loading_progress", api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("progress poll failed ({})", resp.status()));
        }
        resp.json::<LoadProgress>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Submit a generation request via `POST /generate`.
///
/// # Errors
///
/// Non-2xx responses surface the service's `detail` message when the body is
/// a structured error payload; anything else surfaces the raw failure text.
pub async fn generate(request: &GenerationRequest) -> Result<GenerationResponse, String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/generate", api_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = format!("generation failed ({})", resp.status());
            let text = resp.text().await.unwrap_or_default();
            return Err(super::types::error_detail(&text, &fallback));
        }
        resp.json::<GenerationResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}
