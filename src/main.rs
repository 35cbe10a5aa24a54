//! popper-place CLI
//!
//! Usage:
//!   popper-place [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --position <POS>   Preferred position, e.g. bottom-start or bs
//!   -m, --margin <N>       Gap between popper and reference
//!       --padding <N>      Clearance from the container's far edges
//!   -v, --verbose          Log candidate checks to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;

use popper_place::{ConfigError, ConfigOverrides, Position, Scene};

#[derive(Parser)]
#[command(name = "popper-place")]
#[command(about = "Place a floating element next to its reference box")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Preferred position, overriding the scene file
    #[arg(short, long)]
    position: Option<Position>,

    /// Margin, overriding the scene file
    #[arg(short, long)]
    margin: Option<f64>,

    /// Padding, overriding the scene file
    #[arg(long)]
    padding: Option<f64>,

    /// Log candidate checks to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let default = if verbose { "popper_place=trace" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.verbose);

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let scene = match load_scene(&source, &cli) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            return ExitCode::FAILURE;
        }
    };

    let result = scene.place();
    println!("{}", result);
    if result.placement.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn load_scene(source: &str, cli: &Cli) -> Result<Scene, ConfigError> {
    let mut scene = Scene::from_toml(source)?;
    let overrides = ConfigOverrides {
        position: cli.position,
        margin: cli.margin,
        padding: cli.padding,
        ..ConfigOverrides::default()
    };
    scene.config = scene.config.merge(overrides)?;
    Ok(scene)
}
