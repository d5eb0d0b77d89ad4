use super::*;
use crate::net::types::LoadStatus;

fn response(seed: i64, images: &[&str]) -> GenerationResponse {
    GenerationResponse {
        images: images.iter().map(|s| (*s).to_owned()).collect(),
        metadata: GenerationMetadata {
            prompt: "a red fox".to_owned(),
            sampling_steps: 20,
            cfg_scale: 7.5,
            width: 512,
            height: 512,
            seed,
            aesthetic_scores: None,
            model_name: None,
        },
    }
}

fn progress(status: LoadStatus) -> LoadProgress {
    LoadProgress {
        progress: 50.0,
        message: "loading unet".to_owned(),
        status,
    }
}

// =============================================================
// defaults
// =============================================================

#[test]
fn default_params_match_service_defaults() {
    let params = GenerationParams::default();
    assert_eq!(params.checkpoint, "aesthetic");
    assert_eq!(params.sampling_method, "DDIM");
    assert_eq!(params.sampling_steps, 20);
    assert_eq!(params.width, 512);
    assert_eq!(params.height, 512);
    assert_eq!(params.batch_count, 1);
    assert_eq!(params.batch_size, 1);
    assert!((params.cfg_scale - 7.5).abs() < f64::EPSILON);
    assert_eq!(params.seed, 123_456_789);
}

#[test]
fn default_session_is_idle_with_no_results() {
    let state = SessionState::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(!state.is_busy());
    assert!(state.images.is_empty());
    assert!(state.error.is_none());
    assert!(state.last_metadata.is_none());
}

// =============================================================
// begin_generate
// =============================================================

#[test]
fn begin_generate_rejects_empty_prompt() {
    let mut state = SessionState::default();
    state.prompt = "   \n\t ".to_owned();
    assert!(state.begin_generate(1000.0).is_none());
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn begin_generate_trims_prompts_and_enters_generating() {
    let mut state = SessionState::default();
    state.prompt = "  a red fox  ".to_owned();
    state.negative_prompt = " blurry ".to_owned();

    let request = state.begin_generate(1000.0).expect("request");
    assert_eq!(request.prompt, "a red fox");
    assert_eq!(request.negative_prompt, "blurry");
    assert!(request.use_aesthetic_scoring);
    assert_eq!(request.seed, 123_456_789);
    assert_eq!(state.phase, Phase::Generating);
    assert_eq!(state.elapsed_ms, 0);
}

#[test]
fn begin_generate_rejects_duplicate_submission() {
    let mut state = SessionState::default();
    state.prompt = "a red fox".to_owned();
    assert!(state.begin_generate(0.0).is_some());
    assert!(state.begin_generate(10.0).is_none());
}

#[test]
fn begin_generate_clears_previous_error() {
    let mut state = SessionState::default();
    state.error = Some("old".to_owned());
    state.prompt = "p".to_owned();
    assert!(state.begin_generate(0.0).is_some());
    assert!(state.error.is_none());
}

#[test]
fn begin_generate_passes_seed_sentinel_through() {
    let mut state = SessionState::default();
    state.params.seed = RANDOM_SEED;
    state.prompt = "p".to_owned();
    let request = state.begin_generate(0.0).expect("request");
    assert_eq!(request.seed, RANDOM_SEED);
}

// =============================================================
// finish_generate / fail_generate
// =============================================================

#[test]
fn finish_generate_replaces_results_and_adopts_resolved_seed() {
    let mut state = SessionState::default();
    state.prompt = "a red fox".to_owned();
    state.images = vec!["stale".to_owned()];
    let _ = state.begin_generate(0.0);

    let entry = state.finish_generate(
        response(987_654_321, &["img-1"]),
        1_700_000_000_000,
        "2026-08-29T12:00:00.000Z".to_owned(),
    );

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.images, vec!["img-1".to_owned()]);
    assert_eq!(state.params.seed, 987_654_321);
    assert_eq!(entry.id, 1_700_000_000_000);
    assert_eq!(entry.seed, 987_654_321);
    assert_eq!(entry.prompt, "a red fox");
    assert_eq!(entry.images, vec!["img-1".to_owned()]);
    assert_eq!(entry.model, "Aesthetic DDPO (Recommended)");
}

#[test]
fn finish_generate_prefers_service_model_name() {
    let mut state = SessionState::default();
    state.prompt = "p".to_owned();
    let _ = state.begin_generate(0.0);

    let mut resp = response(1, &["i"]);
    resp.metadata.model_name = Some("DDPO Aesthetic v2".to_owned());
    let entry = state.finish_generate(resp, 1, "t".to_owned());
    assert_eq!(entry.model, "DDPO Aesthetic v2");
}

#[test]
fn fail_generate_keeps_prior_results() {
    let mut state = SessionState::default();
    state.prompt = "p".to_owned();
    state.images = vec!["keep-me".to_owned()];
    let _ = state.begin_generate(0.0);

    state.fail_generate("CUDA out of memory".to_owned());
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.images, vec!["keep-me".to_owned()]);
    assert_eq!(state.error.as_deref(), Some("CUDA out of memory"));
}

// =============================================================
// elapsed readout
// =============================================================

#[test]
fn tick_tracks_elapsed_only_while_generating() {
    let mut state = SessionState::default();
    state.prompt = "p".to_owned();
    let _ = state.begin_generate(1000.0);

    state.tick(1500.0);
    assert_eq!(state.elapsed_ms, 500);

    state.fail_generate("boom".to_owned());
    state.tick(9000.0);
    assert_eq!(state.elapsed_ms, 500);
}

// =============================================================
// checkpoint loading
// =============================================================

#[test]
fn begin_checkpoint_load_keeps_requested_id() {
    let mut state = SessionState::default();
    assert!(state.begin_checkpoint_load("sd21"));
    assert_eq!(state.phase, Phase::CheckpointLoading);
    assert_eq!(state.params.checkpoint, "sd21");

    state.fail_checkpoint_load("disk full".to_owned());
    assert_eq!(state.phase, Phase::Idle);
    // Selector still points at the requested (not-yet-loaded) checkpoint.
    assert_eq!(state.params.checkpoint, "sd21");
    assert_eq!(state.error.as_deref(), Some("disk full"));
}

#[test]
fn begin_checkpoint_load_rejects_same_or_busy() {
    let mut state = SessionState::default();
    assert!(!state.begin_checkpoint_load("aesthetic"));

    state.prompt = "p".to_owned();
    let _ = state.begin_generate(0.0);
    assert!(!state.begin_checkpoint_load("sd15"));
    assert_eq!(state.phase, Phase::Generating);
}

#[test]
fn generate_rejected_while_checkpoint_loading() {
    let mut state = SessionState::default();
    state.prompt = "p".to_owned();
    assert!(state.begin_checkpoint_load("sd15"));
    assert!(state.begin_generate(0.0).is_none());
    assert_eq!(state.phase, Phase::CheckpointLoading);
}

#[test]
fn load_progress_only_recorded_while_loading() {
    let mut state = SessionState::default();
    state.apply_load_progress(progress(LoadStatus::InProgress));
    assert!(state.load_progress.is_none());

    let _ = state.begin_checkpoint_load("sd15");
    state.apply_load_progress(progress(LoadStatus::InProgress));
    assert!(state.load_progress.is_some());

    state.finish_checkpoint_load();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.load_progress.is_none());
}

// =============================================================
// checkpoints and gallery
// =============================================================

#[test]
fn all_checkpoints_merge_builtins_with_listed() {
    let mut state = SessionState::default();
    state.set_listed_checkpoints(vec![CheckpointInfo {
        path: "/models/custom.ckpt".to_owned(),
        name: "Custom".to_owned(),
    }]);

    let all = state.all_checkpoints();
    assert_eq!(all.len(), BUILTIN_CHECKPOINTS.len() + 1);
    assert_eq!(all[0].path, "aesthetic");
    assert_eq!(all.last().map(|c| c.name.as_str()), Some("Custom"));
}

#[test]
fn checkpoint_display_name_falls_back_to_path() {
    let mut state = SessionState::default();
    state.params.checkpoint = "/models/unknown.ckpt".to_owned();
    assert_eq!(state.checkpoint_display_name(), "/models/unknown.ckpt");
}

#[test]
fn remove_image_ignores_out_of_range() {
    let mut state = SessionState::default();
    state.images = vec!["a".to_owned(), "b".to_owned()];
    state.remove_image(5);
    assert_eq!(state.images.len(), 2);
    state.remove_image(0);
    assert_eq!(state.images, vec!["b".to_owned()]);
}
