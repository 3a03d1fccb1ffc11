//! bopjson CLI - generate starter Bopimo levels.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bopjson::prelude::*;

/// Verbosity chosen on the command line.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// RUST_LOG wins over the command line flags.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `<config dir>/bopjson/export.json`, if the platform has a config dir.
fn options_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bopjson").join("export.json"))
}

fn load_options() -> ExportOptions {
    let Some(path) = options_path() else {
        return ExportOptions::default();
    };
    if !path.exists() {
        return ExportOptions::default();
    }
    match ExportOptions::load(&path) {
        Ok(opts) => {
            debug!(path = %path.display(), "loaded export options");
            opts
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring export options");
            ExportOptions::default()
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut verbosity = Verbosity::Info;
    let mut pretty = false;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbosity = Verbosity::Debug,
            "-vv" | "--trace" => verbosity = Verbosity::Trace,
            "-q" | "--quiet" => verbosity = Verbosity::Quiet,
            "-p" | "--pretty" => pretty = true,
            _ => filtered_args.push(arg),
        }
    }

    if filtered_args.is_empty() {
        print_help();
        return;
    }
    init_logging(verbosity);

    let mut options = load_options();
    options.pretty |= pretty;

    let result = match filtered_args[0] {
        "t" | "template" => match filtered_args.get(1) {
            Some(out) => cmd_template(out, &options),
            None => usage("template <out>"),
        },
        "k" | "kinematics" => match filtered_args.get(1) {
            Some(out) => cmd_kinematics(out, &options),
            None => usage("kinematics <out>"),
        },
        "version" | "--version" => {
            cmd_version();
            Ok(())
        }
        "h" | "help" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'bopjson help' for usage");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn usage(form: &str) -> anyhow::Result<()> {
    bail!("missing output path\nUsage: bopjson {}", form)
}

/// One large cylinder to stand on.
fn cmd_template(out: &str, options: &ExportOptions) -> anyhow::Result<()> {
    let mut level = Level::new("Bopimo Template", "A flat starting point");
    level.settings.death_plane = -100.0;
    level.settings.sky = Sky::Sunset.code();
    level
        .settings
        .set_music([Music::Serene, Music::Peaceful, Music::FrivolousFlutes])?;

    let baseplate = Primitive::shaped(Shape::Cylinder)
        .with_name("Baseplate")
        .with_position((0.0, -6.0, 0.0))
        .with_scale((250.0, 6.0, 250.0));
    level.add_object(baseplate)?;
    level.add_object(Spawn::new().with_position((0.0, 2.0, 0.0)))?;

    let path = level
        .export_with(out, options)
        .with_context(|| format!("writing template to {}", out))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Moving platforms, one speed-driven and one timed, next to a spinning rose.
fn cmd_kinematics(out: &str, options: &ExportOptions) -> anyhow::Result<()> {
    let mut level = Level::new("Bopimo Kinematics", "Moving and spinning blocks");

    let glider = Primitive::new()
        .with_name("Glider")
        .with_position((0.0, 5.0, 0.0))
        .with_scale((6.0, 1.0, 6.0));
    {
        let mut track = glider.base.positions_mut();
        *track = PositionKinematics::with_speed(8.0)?;
        track.extend_points([
            Vector3::ZERO,
            Vector3::new(20.0, 0.0, 0.0),
            Vector3::new(20.0, 10.0, 0.0),
        ])?;
        debug!(loop_seconds = track.loop_duration(), "glider track");
    }

    let lift = Primitive::shaped(Shape::Cylinder)
        .with_name("Lift")
        .with_position((-12.0, 0.0, 0.0))
        .with_scale((4.0, 1.0, 4.0));
    {
        let mut track = lift.base.positions_mut();
        *track = PositionKinematics::timed();
        track.extend_timed([(Vector3::ZERO, 3.0), (Vector3::new(0.0, 15.0, 0.0), 0.0)])?;
    }

    let mut rose = Rose::new().with_position((8.0, 1.0, 8.0));
    rose.base.rotation_kinematics = RotationKinematics::spinning(Vector3::new(0.0, 1.0, 0.0), 45.0);

    level.add_object(glider)?;
    level.add_object(lift)?;
    level.add_object(rose)?;

    let path = level
        .export_with(out, options)
        .with_context(|| format!("writing kinematics demo to {}", out))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn cmd_version() {
    println!(
        "bopjson {} (built {}, targets game {})",
        env!("CARGO_PKG_VERSION"),
        env!("BOPJSON_BUILD_DATE"),
        GameVersion::LATEST
    );
}

fn print_help() {
    println!("bopjson - Bopimo level generator");
    println!();
    println!("USAGE:");
    println!("    bopjson [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    t, template   <out>     Write a baseplate level to <out>.bopjson");
    println!("    k, kinematics <out>     Write a moving-platform demo level");
    println!("    version                 Show version and build info");
    println!("    h, help                 Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Only show errors");
    println!("    -p, --pretty     Indent the written JSON");
    println!();
    println!("EXAMPLES:");
    println!("    bopjson template my_level           # Writes my_level.bopjson");
    println!("    bopjson -p kinematics demo          # Readable output");
    println!("    RUST_LOG=bopjson=trace bopjson t x  # Per-block tracing");
    println!();
    println!("NOTES:");
    if let Some(path) = options_path() {
        println!("    - Export options are read from {}", path.display());
    }
    println!("    - Levels over {} blocks cannot be published online", bopjson::level::SERVER_BLOCK_LIMIT);
}
