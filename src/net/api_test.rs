use super::*;
use crate::net::types::{
    BackendHealth, GenerationResponse, HealthStatus, LoadProgress, LoadStatus, error_detail,
};

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_extracts_service_message() {
    let body = r#"{"detail":"CUDA out of memory"}"#;
    assert_eq!(error_detail(body, "generation failed"), "CUDA out of memory");
}

#[test]
fn error_detail_falls_back_on_plain_text() {
    assert_eq!(
        error_detail("Internal Server Error", "generation failed (500)"),
        "generation failed (500)"
    );
}

#[test]
fn error_detail_falls_back_on_json_without_detail() {
    assert_eq!(
        error_detail(r#"{"message":"nope"}"#, "fallback"),
        "fallback"
    );
}

// =============================================================
// api_base
// =============================================================

#[test]
fn api_base_defaults_without_a_browser() {
    assert_eq!(api_base(), DEFAULT_API_BASE);
}

// =============================================================
// wire type parsing
// =============================================================

#[test]
fn health_parses_full_payload() {
    let body = r#"{
        "status": "healthy",
        "model_loaded": true,
        "current_checkpoint": "aesthetic",
        "aesthetic_scorer": true
    }"#;
    let health: BackendHealth = serde_json::from_str(body).expect("health");
    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.model_loaded);
    assert_eq!(health.current_checkpoint.as_deref(), Some("aesthetic"));
    assert!(health.aesthetic_scorer);
    assert!(health.error.is_none());
}

#[test]
fn health_parses_minimal_error_payload() {
    let body = r#"{"status":"error","model_loaded":false,"error":"no GPU"}"#;
    let health: BackendHealth = serde_json::from_str(body).expect("health");
    assert_eq!(health.status, HealthStatus::Error);
    assert!(!health.is_healthy());
    assert_eq!(health.error.as_deref(), Some("no GPU"));
}

#[test]
fn unreachable_health_is_error_with_message() {
    let health = BackendHealth::unreachable("connection refused");
    assert!(!health.is_healthy());
    assert!(!health.model_loaded);
    assert_eq!(health.error.as_deref(), Some("connection refused"));
}

#[test]
fn load_progress_parses_in_progress_status() {
    let body = r#"{"progress": 42.5, "message": "loading unet", "status": "in-progress"}"#;
    let progress: LoadProgress = serde_json::from_str(body).expect("progress");
    assert_eq!(progress.status, LoadStatus::InProgress);
    assert!(!progress.is_terminal());
}

#[test]
fn load_progress_terminal_statuses() {
    let done = r#"{"progress": 100, "message": "done", "status": "completed"}"#;
    let progress: LoadProgress = serde_json::from_str(done).expect("progress");
    assert_eq!(progress.status, LoadStatus::Completed);
    assert!(progress.is_terminal());

    let failed = r#"{"progress": 10, "message": "missing file", "status": "error"}"#;
    let progress: LoadProgress = serde_json::from_str(failed).expect("progress");
    assert_eq!(progress.status, LoadStatus::Error);
    assert!(progress.is_terminal());
}

#[test]
fn generation_response_parses_without_optional_fields() {
    let body = r#"{
        "images": ["aGVsbG8="],
        "metadata": {
            "prompt": "a red fox",
            "sampling_steps": 20,
            "cfg_scale": 7.5,
            "width": 512,
            "height": 512,
            "seed": 987654321
        }
    }"#;
    let resp: GenerationResponse = serde_json::from_str(body).expect("response");
    assert_eq!(resp.images.len(), 1);
    assert_eq!(resp.metadata.seed, 987_654_321);
    assert!(resp.metadata.aesthetic_scores.is_none());
    assert!(resp.metadata.model_name.is_none());
}

#[test]
fn generation_response_parses_aesthetic_scores() {
    let body = r#"{
        "images": ["a", "b"],
        "metadata": {
            "prompt": "p",
            "sampling_steps": 30,
            "cfg_scale": 9.0,
            "width": 768,
            "height": 512,
            "seed": 7,
            "aesthetic_scores": [6.21, 5.94]
        }
    }"#;
    let resp: GenerationResponse = serde_json::from_str(body).expect("response");
    let scores = resp.metadata.aesthetic_scores.expect("scores");
    assert_eq!(scores, vec![6.21, 5.94]);
}
