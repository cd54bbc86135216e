use anyhow::Context;
use clap::Parser;
use rasterpad::export::{ExportConfig, file::expand_tilde};
use rasterpad::{Config, PaintEngine, script};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rasterpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RASTERPAD_GIT_HASH"), ")"),
    about = "Raster paint engine with brush, shape, text, eraser and flood-fill tools"
)]
struct Cli {
    /// Replay a paint script and export the result as PNG
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory exported images are written to (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<String>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Read configuration from this file instead of ~/.config/rasterpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("rasterpad: Raster paint engine");
        println!();
        println!("Usage:");
        println!("  rasterpad --script <FILE> [--output <DIR>] [--width W --height H]");
        println!("  rasterpad --help      Show help");
        println!();
        println!("Script commands (one per line, # starts a comment):");
        println!("  tool <brush|eraser|fill|rectangle|circle|triangle|line|text>");
        println!("  color <name|#rrggbb>   size <pixels>");
        println!("  down|move|up|leave <x> <y>");
        println!("  type <text>            key <enter|backspace|escape>");
        println!("  undo   clear   save");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config, using defaults: {err:#}");
            Config::default()
        }),
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let export = match &cli.output {
        Some(dir) => ExportConfig {
            save_directory: expand_tilde(dir),
        },
        None => config.export_config(),
    };

    let commands = script::load(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let mut engine =
        PaintEngine::new(config.engine_settings()).context("Failed to create canvas")?;
    let report = script::run(&mut engine, &commands, &export);

    if report.failed_saves > 0 {
        log::warn!("{} save(s) failed", report.failed_saves);
    }

    Ok(())
}
