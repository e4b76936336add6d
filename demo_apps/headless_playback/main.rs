//! Headless playback demo.
//!
//! Usage: `headless_playback [config.json]`
//!
//! Loads a two-node "sheep" hierarchy into an in-memory scene, keys the body
//! across the timeline, then plays exactly one loop and logs the body's
//! transform on every tick. Run with `RUST_LOG=debug` to also see the
//! recording and selection events from the core.

use std::f32::consts::FRAC_PI_2;

use anyhow::Context;
use glam::Vec3;
use kinema::animation::{AnimationEditor, NodeTransforms, TickOutcome, Transform};
use kinema::settings::PlaybackConfig;

const NODES: [&str; 2] = ["Body", "Head"];

fn load_config() -> anyhow::Result<PlaybackConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            Ok(PlaybackConfig::from_json_str(&json)?)
        }
        None => Ok(PlaybackConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!("Playback config: {}", serde_json::to_string(&config)?);

    let mut editor = AnimationEditor::new(config)?;
    let mut scene = NodeTransforms::new();

    for name in NODES {
        editor.init_node(name);
        scene.insert(name, Transform::IDENTITY);
    }

    editor.set_selected_node(Some("Body"));

    // Key the body at the start, a quarter, and the second-to-last frame.
    let total = editor.state().total_frames();
    let poses = [
        (0, Transform::IDENTITY),
        (
            total / 4,
            Transform::new(
                Vec3::new(2.0, 1.0, 0.0),
                Vec3::new(0.0, FRAC_PI_2, 0.0),
                Vec3::splat(1.5),
            ),
        ),
        (
            total.saturating_sub(2),
            Transform::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
        ),
    ];
    for (frame, pose) in poses {
        while editor.current_frame() != frame {
            editor.advance_one_frame(&mut scene);
        }
        if let Some(body) = scene.get_mut("Body") {
            *body = pose;
        }
        editor.record_selected(&scene);
    }

    // Back to the first frame and play one full loop.
    while editor.current_frame() != 0 {
        editor.advance_one_frame(&mut scene);
    }
    editor.set_playing(true);

    loop {
        match editor.tick(&mut scene) {
            TickOutcome::Advanced { frame } => {
                if let Some(body) = scene.get("Body") {
                    log::info!(
                        "frame {frame:>4}: position {} rotation {} scale {}",
                        body.position,
                        body.rotation,
                        body.scale
                    );
                }
            }
            TickOutcome::Wrapped | TickOutcome::Paused => break,
        }
    }
    editor.set_playing(false);

    let markers = editor.timeline_markers();
    log::info!(
        "Loop finished after {} redraws; keyframe markers at {:?}",
        scene.redraw_requests(),
        markers.keyframes
    );

    Ok(())
}
