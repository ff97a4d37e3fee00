//! Runs the hero scene headless for a fixed number of ticks and reports the
//! per-layer draw workload, standing in for a real canvas host.

use clap::Parser;
use glimmer_engine::{DrawCommand, EngineError, LayerId, Stage, Viewport};

#[derive(Parser, Debug)]
#[command(name = "hero-preview", about = "Headless preview of the Glimmer hero scene")]
struct Args {
    /// Ticks to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Seed for the randomized initial state.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn tally(commands: &[DrawCommand]) -> (usize, usize) {
    let circles = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .count();
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    (circles, lines)
}

fn main() -> Result<(), EngineError> {
    env_logger::init();
    let args = Args::parse();

    let viewport = Viewport::new(args.width, args.height)?;
    let mut stage = Stage::hero_scene(viewport, args.seed)?;
    // Park the pointer mid-viewport so the cursor markers have a target.
    let center = viewport.center();
    stage.pointer_moved(center.x, center.y);

    for frame in 1..=args.frames {
        stage.tick();
        if frame % 120 == 0 {
            for i in 0..stage.layer_count() {
                let (circles, lines) = tally(stage.commands(LayerId(i)));
                log::info!(
                    "tick {}: {} drew {} circles, {} lines",
                    frame,
                    stage.layer_name(LayerId(i)).unwrap_or("?"),
                    circles,
                    lines
                );
            }
        }
    }

    for i in 0..stage.layer_count() {
        let (circles, lines) = tally(stage.commands(LayerId(i)));
        println!(
            "{:<10} {:>5} circles {:>6} lines",
            stage.layer_name(LayerId(i)).unwrap_or("?"),
            circles,
            lines
        );
    }
    println!("ran {} ticks at {}x{}", stage.ticks(), args.width, args.height);
    Ok(())
}
