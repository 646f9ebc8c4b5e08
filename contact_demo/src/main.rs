use contact_engine::{PhysicsWorld, SceneConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Steps a contact scene and logs body state and solver impulses.
///
/// Run with `RUST_LOG=info` for per-step state, `RUST_LOG=trace` to also see
/// every solver sweep.
#[derive(Parser, Debug)]
struct Args {
    /// YAML scene file. Without one, the built-in two-body contact is used.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Number of steps to run.
    #[arg(short = 'n', long, default_value_t = 1)]
    steps: usize,

    /// Time step in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Overrides the scene's solver iteration count.
    #[arg(short, long)]
    iterations: Option<usize>,
}

fn load_world(args: &Args) -> Result<PhysicsWorld> {
    let Some(path) = &args.scene else {
        return Ok(PhysicsWorld::two_body_contact()?);
    };
    let file = File::open(path).with_context(|| format!("opening scene {}", path.display()))?;
    let scene = SceneConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scene {}", path.display()))?;
    Ok(PhysicsWorld::from_scene(&scene)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut world = load_world(&args)?;
    if let Some(iterations) = args.iterations {
        world.config.iterations = iterations;
    }

    info!(
        "{} bodies, {} contacts, dt={:.5}, iterations={}",
        world.bodies.len(),
        world.contacts.len(),
        args.dt,
        world.config.iterations
    );

    for frame in 0..args.steps {
        let report = world.step(args.dt)?;

        for event in &report.events {
            info!(
                "[PGS] contact={} λ={:.4} | Impulse=({:.4}, {:.4})",
                event.constraint.index(),
                event.lambda,
                event.impulse.x,
                event.impulse.y
            );
        }
        for (i, body) in world.bodies.iter().enumerate() {
            info!(
                "frame {} body {}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3})",
                frame, i, body.position.x, body.position.y, body.velocity.x, body.velocity.y
            );
        }
        for (i, contact) in world.contacts.iter().enumerate() {
            info!("frame {} contact {}: λ_accum={:.4}", frame, i, contact.lambda_accum());
        }
    }

    Ok(())
}
