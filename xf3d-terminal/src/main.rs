//! XF3D Terminal Demo
//!
//! Drives the transformation pipeline from the keyboard and rasterizes the
//! result as ASCII.
//!
//! ```bash
//! # Single cube under rotation / axis scaling / projection
//! xf3d-terminal --scene viewer
//!
//! # Central cube with orbiting cubes, reproducible layout
//! xf3d-terminal --scene orbit --seed 7
//!
//! # Cubes spinning along a helix
//! xf3d-terminal --scene helix
//! ```

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use xf3d_core::Mesh;
use xf3d_terminal::{Scene, SceneKind, TerminalApp};

#[derive(Parser, Debug)]
#[command(name = "xf3d-terminal")]
#[command(author, version, about = "Homogeneous transformation demos in the terminal", long_about = None)]
struct Cli {
    /// Which demo to run
    #[arg(short, long, value_enum, default_value = "viewer")]
    scene: SceneKind,

    /// Seed for the orbiting bodies' configuration
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Logging verbosity level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(scene = cli.scene.name(), seed = cli.seed, "Starting terminal renderer");

    let scene = Scene::new(cli.scene, cli.seed);
    let mut app = TerminalApp::new(Mesh::cube(2.0), scene)?;
    app.run()?;

    tracing::info!("Terminal renderer closed");
    Ok(())
}
