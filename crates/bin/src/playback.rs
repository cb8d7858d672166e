//! Playback demo: loads a sprite manifest through a recording canvas and
//! steps an animated sprite through its tags.

use anyhow::Result;
use canvas::RecordingCanvas;
use sprite::{PlaybackMode, SpriteLoader};
use tracing::info;
use tracing_subscriber::EnvFilter;

const MANIFEST: &str = r#"
    [sprites.runner]
    kind = "animated"
    sheet = "textures/runner.png"
    frames = [
        [0, 0, 32, 32], [32, 0, 32, 32], [64, 0, 32, 32],
        [0, 32, 32, 32], [32, 32, 32, 32], [64, 32, 32, 32],
    ]
    frame_rate = 12.0
    anchor = { x = "center", y = "bottom" }

    [[sprites.runner.tags]]
    name = "idle"
    from = 0
    to = 1

    [[sprites.runner.tags]]
    name = "run"
    from = 2
    to = 5
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut canvas = RecordingCanvas::new(256.0, 256.0);
    canvas.register_texture("textures/runner.png", 96, 64);

    let mut loader = SpriteLoader::new();
    let count = loader.load_manifest_str(MANIFEST, &mut canvas)?;
    info!(count, "manifest loaded");

    let mut runner = loader.make_animated_sprite("runner")?;
    info!(
        tag = runner.current_tag(),
        frames = runner.frame_count(),
        "sprite instantiated"
    );

    let dt = 1.0 / 60.0;
    let mut last_frame = runner.current_frame();
    for step in 0..120 {
        // swap animations halfway through, with a ping-pong finish
        if step == 60 {
            runner.set_tag("run")?;
            runner.playback_mode = PlaybackMode::PingPong;
            info!(tag = runner.current_tag(), "switched tag");
            last_frame = runner.current_frame();
        }

        runner.update(dt);
        runner.render(&mut canvas);

        if runner.current_frame() != last_frame {
            last_frame = runner.current_frame();
            info!(
                step,
                tag = runner.current_tag(),
                frame = last_frame,
                "frame advanced"
            );
        }
    }

    info!(draw_ops = canvas.ops().len(), "playback demo finished");
    Ok(())
}
