//! JSON wire types for the image-generation service.
//!
//! Field names mirror the service's API exactly; everything here is plain
//! serde data with no behavior beyond a few parse helpers.

use serde::{Deserialize, Serialize};

/// Reported service status in a `/health` response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    #[default]
    Error,
}

/// Response body of `GET /health`.
///
/// Also used as a synthetic "unreachable" record when the health request
/// itself fails, so callers never have to handle a transport error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: HealthStatus,
    pub model_loaded: bool,
    #[serde(default)]
    pub current_checkpoint: Option<String>,
    #[serde(default)]
    pub aesthetic_scorer: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendHealth {
    /// Synthetic error record for a failed or unparseable health check.
    pub fn unreachable(message: &str) -> Self {
        Self {
            status: HealthStatus::Error,
            model_loaded: false,
            current_checkpoint: None,
            aesthetic_scorer: false,
            error: Some(message.to_owned()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// One checkpoint listed by `GET /checkpoints`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointInfo {
    pub path: String,
    pub name: String,
}

/// Response body of `GET /checkpoints`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckpointsResponse {
    #[serde(default)]
    pub checkpoints: Vec<CheckpointInfo>,
}

/// Progress status reported by `GET /loading_progress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[serde(rename = "in-progress")]
    InProgress,
    Completed,
    Error,
}

/// Response body of `GET /loading_progress`, polled during a checkpoint swap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress {
    pub progress: f64,
    pub message: String,
    pub status: LoadStatus,
}

impl LoadProgress {
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, LoadStatus::Completed | LoadStatus::Error)
    }
}

/// Request body of `POST /generate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub checkpoint: String,
    pub sampling_method: String,
    pub sampling_steps: u32,
    pub width: u32,
    pub height: u32,
    pub batch_count: u32,
    pub batch_size: u32,
    pub cfg_scale: f64,
    pub seed: i64,
    pub use_aesthetic_scoring: bool,
}

/// Metadata echoed back alongside generated images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub prompt: String,
    pub sampling_steps: u32,
    pub cfg_scale: f64,
    pub width: u32,
    pub height: u32,
    pub seed: i64,
    #[serde(default)]
    pub aesthetic_scores: Option<Vec<f64>>,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Response body of `POST /generate`.
///
/// Each image is an opaque string: either a base64-encoded raster or a URL,
/// depending on how the service is deployed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub images: Vec<String>,
    pub metadata: GenerationMetadata,
}

/// Structured error payload the service returns on a non-2xx generate or
/// checkpoint-load response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Extract the human-readable `detail` from an error response body, falling
/// back to `fallback` when the body is not a structured error payload.
pub fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| fallback.to_owned(), |e| e.detail)
}
