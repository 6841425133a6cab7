use anyhow::Context;
use clap::{ArgAction, Parser};
use happy_little_pixels::export::{self, ExportOptions};
use happy_little_pixels::session::Script;
use happy_little_pixels::{Config, EditorSession};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HAPPY_PIXELS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "happy-little-pixels")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Raster paint engine: replay edit scripts and export PNG images"
)]
struct Cli {
    /// Edit script to replay (TOML, or JSON when the file ends in .json)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG file to write (defaults to the configured export directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "N")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "N")]
    height: Option<u32>,

    /// Config file to use instead of ~/.config/happy-little-pixels/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    if cli.script.is_none() && cli.output.is_none() {
        print_usage();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let mut session = EditorSession::from_config(&config);

    if let Some(path) = &cli.script {
        let script = Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?;
        session.run_script(&script);
        log::info!("Replayed {} steps: {}", script.steps.len(), session.status());
    }

    let saved = match &cli.output {
        Some(path) => {
            export::write_png(session.buffer(), path)?;
            path.clone()
        }
        None => export::save_png(session.buffer(), &ExportOptions::from(&config.export))?,
    };
    println!("Saved {}", saved.display());

    Ok(())
}

fn print_usage() {
    println!("happy-little-pixels: Raster paint engine");
    println!();
    println!("Usage:");
    println!("  happy-little-pixels --script edit.toml --output out.png");
    println!("  happy-little-pixels --script edit.toml        Save into the export directory");
    println!("  happy-little-pixels --init-config             Write the default config file");
    println!("  happy-little-pixels --help                    Show help");
    println!();
    println!("Script steps (one [[step]] table each, `op` selects the action):");
    println!("  tool, color, thickness, begin, move, end, leave, wheel,");
    println!("  zoom-in, zoom-out, pan, undo, redo, clear, grid");
}
