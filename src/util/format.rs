//! Small display formatters shared by the inference view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::GenerationMetadata;

/// Elapsed generation time with one decimal, e.g. `12.3s`.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = elapsed_ms as f64 / 1000.0;
    format!("{seconds:.1}s")
}

/// One-line settings summary for the result metadata strip.
pub fn settings_summary(meta: &GenerationMetadata) -> String {
    format!(
        "Steps: {}, CFG: {}, Size: {}\u{d7}{}, Seed: {}",
        meta.sampling_steps, meta.cfg_scale, meta.width, meta.height, meta.seed
    )
}

/// Aesthetic scores to two decimals, comma separated.
pub fn scores_summary(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| format!("{s:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Short chip label for a preset prompt: everything before the first comma.
pub fn preset_label(preset: &str) -> String {
    let head = preset.split(',').next().unwrap_or(preset);
    format!("{head}...")
}

/// Suggested filename for a downloaded image.
pub fn download_name(now_ms: i64, index: usize) -> String {
    format!("ddpo_generated_{now_ms}_{}.png", index + 1)
}

/// `src` attribute for an image reference. The service returns either URLs
/// or bare base64 payloads depending on deployment; bare payloads get
/// wrapped in a PNG data URL.
pub fn image_src(image: &str) -> String {
    if image.starts_with("data:") || image.starts_with("http") || image.starts_with('/') {
        image.to_owned()
    } else {
        format!("data:image/png;base64,{image}")
    }
}
