//! Generation session state and its pure transition functions.
//!
//! DESIGN
//! ======
//! All mutable session data lives in one [`SessionState`] held in a Leptos
//! signal; components never mutate fields directly but go through the
//! reducer methods here, which keep the phase invariants:
//!
//! - at most one generate OR one checkpoint load is in flight ([`Phase`] is
//!   a single enum, so the two can never overlap);
//! - the seed is always a concrete non-negative value or the −1 sentinel
//!   before submission, and is replaced by the service-resolved seed after
//!   a successful generation;
//! - a failed generation leaves the previous results untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{
    CheckpointInfo, GenerationMetadata, GenerationRequest, GenerationResponse, LoadProgress,
};
use crate::state::history::HistoryEntry;

/// Seed value meaning "let the service pick one".
pub const RANDOM_SEED: i64 = -1;

/// Sampling methods the service accepts, passed through opaquely.
pub const SAMPLING_METHODS: [&str; 8] = [
    "Euler a", "Euler", "LMS", "Heun", "DPM2", "DPM++ 2M", "DDIM", "PLMS",
];

/// Checkpoints that are always offered, before any server-listed ones.
pub const BUILTIN_CHECKPOINTS: [(&str, &str); 3] = [
    ("aesthetic", "Aesthetic DDPO (Recommended)"),
    ("sd15", "Stable Diffusion v1.5"),
    ("sd21", "Stable Diffusion v2.1"),
];

/// One-click starter prompts shown under the prompt field.
pub const PRESET_PROMPTS: [&str; 6] = [
    "A majestic mountain landscape at golden hour, highly detailed, photorealistic",
    "Portrait of a serene woman with flowing hair, artistic, beautiful lighting",
    "Futuristic cityscape with neon lights, cyberpunk aesthetic, high quality",
    "Abstract geometric patterns with vibrant colors, modern art style",
    "A cute puppy playing in a sunny garden, adorable, sharp focus",
    "Elegant architecture with classical columns, professional photography",
];

/// What the session is currently doing. Generate and checkpoint-load are
/// mutually exclusive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    CheckpointLoading,
}

/// Tunable generation parameters, mirroring the `/generate` request fields.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub checkpoint: String,
    pub sampling_method: String,
    pub sampling_steps: u32,
    pub width: u32,
    pub height: u32,
    pub batch_count: u32,
    pub batch_size: u32,
    pub cfg_scale: f64,
    pub seed: i64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            checkpoint: "aesthetic".to_owned(),
            sampling_method: "DDIM".to_owned(),
            sampling_steps: 20,
            width: 512,
            height: 512,
            batch_count: 1,
            batch_size: 1,
            cfg_scale: 7.5,
            seed: 123_456_789,
        }
    }
}

/// All mutable state for one generation session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub params: GenerationParams,
    pub prompt: String,
    pub negative_prompt: String,
    pub images: Vec<String>,
    pub last_metadata: Option<GenerationMetadata>,
    pub error: Option<String>,
    pub phase: Phase,
    /// Server-listed checkpoints, appended after the built-in ones.
    pub listed_checkpoints: Vec<CheckpointInfo>,
    pub load_progress: Option<LoadProgress>,
    started_at_ms: f64,
    pub elapsed_ms: u64,
}

impl SessionState {
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Built-in checkpoints followed by server-listed ones.
    pub fn all_checkpoints(&self) -> Vec<CheckpointInfo> {
        let mut all: Vec<CheckpointInfo> = BUILTIN_CHECKPOINTS
            .iter()
            .map(|&(path, name)| CheckpointInfo {
                path: path.to_owned(),
                name: name.to_owned(),
            })
            .collect();
        all.extend(self.listed_checkpoints.iter().cloned());
        all
    }

    /// Display name of the currently selected checkpoint.
    pub fn checkpoint_display_name(&self) -> String {
        self.all_checkpoints()
            .into_iter()
            .find(|cp| cp.path == self.params.checkpoint)
            .map_or_else(|| self.params.checkpoint.clone(), |cp| cp.name)
    }

    pub fn set_listed_checkpoints(&mut self, checkpoints: Vec<CheckpointInfo>) {
        self.listed_checkpoints = checkpoints;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start a generation. Returns the request to issue, or `None` when the
    /// trimmed prompt is empty or the session is busy — in either case no
    /// transition happens and no request must be sent.
    pub fn begin_generate(&mut self, now_ms: f64) -> Option<GenerationRequest> {
        if self.is_busy() || self.prompt.trim().is_empty() {
            return None;
        }
        self.phase = Phase::Generating;
        self.error = None;
        self.started_at_ms = now_ms;
        self.elapsed_ms = 0;
        Some(GenerationRequest {
            prompt: self.prompt.trim().to_owned(),
            negative_prompt: self.negative_prompt.trim().to_owned(),
            checkpoint: self.params.checkpoint.clone(),
            sampling_method: self.params.sampling_method.clone(),
            sampling_steps: self.params.sampling_steps,
            width: self.params.width,
            height: self.params.height,
            batch_count: self.params.batch_count,
            batch_size: self.params.batch_size,
            cfg_scale: self.params.cfg_scale,
            seed: self.params.seed,
            use_aesthetic_scoring: true,
        })
    }

    /// Apply a successful generation: results and metadata are replaced, the
    /// seed field adopts the service-resolved value, and the entry to prepend
    /// to history is returned.
    pub fn finish_generate(
        &mut self,
        response: GenerationResponse,
        entry_id: i64,
        timestamp: String,
    ) -> HistoryEntry {
        self.phase = Phase::Idle;
        self.images = response.images.clone();
        self.params.seed = response.metadata.seed;
        let model = response
            .metadata
            .model_name
            .clone()
            .unwrap_or_else(|| self.checkpoint_display_name());
        self.last_metadata = Some(response.metadata.clone());
        HistoryEntry {
            id: entry_id,
            timestamp,
            prompt: response.metadata.prompt,
            images: response.images,
            seed: response.metadata.seed,
            model,
            sampling_steps: response.metadata.sampling_steps,
            cfg_scale: response.metadata.cfg_scale,
            width: response.metadata.width,
            height: response.metadata.height,
            aesthetic_scores: response.metadata.aesthetic_scores,
        }
    }

    /// Apply a failed generation: an error message is recorded and the
    /// previous results stay as they were.
    pub fn fail_generate(&mut self, message: String) {
        self.phase = Phase::Idle;
        self.error = Some(message);
    }

    /// Refresh the cosmetic elapsed-time readout while generating.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase == Phase::Generating {
            // Elapsed wall time in a session is far below 2^53 ms.
            let elapsed = (now_ms - self.started_at_ms).max(0.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let elapsed_ms = elapsed as u64;
            self.elapsed_ms = elapsed_ms;
        }
    }

    /// Start a checkpoint swap. The selector keeps pointing at the requested
    /// id even if the load later fails. Returns `false` (no transition) when
    /// the session is busy or the id is already selected.
    pub fn begin_checkpoint_load(&mut self, checkpoint: &str) -> bool {
        if self.is_busy() || self.params.checkpoint == checkpoint {
            return false;
        }
        self.phase = Phase::CheckpointLoading;
        self.error = None;
        self.params.checkpoint = checkpoint.to_owned();
        self.load_progress = None;
        true
    }

    /// Record a progress-poll result while a checkpoint swap is in flight.
    pub fn apply_load_progress(&mut self, progress: LoadProgress) {
        if self.phase == Phase::CheckpointLoading {
            self.load_progress = Some(progress);
        }
    }

    pub fn finish_checkpoint_load(&mut self) {
        if self.phase == Phase::CheckpointLoading {
            self.phase = Phase::Idle;
            self.load_progress = None;
        }
    }

    pub fn fail_checkpoint_load(&mut self, message: String) {
        if self.phase == Phase::CheckpointLoading {
            self.phase = Phase::Idle;
            self.load_progress = None;
            self.error = Some(message);
        }
    }

    /// Remove one image from the current result grid.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }
}
