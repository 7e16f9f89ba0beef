use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dye_engine::{parse_palettes, Channel, Rgb};
use manadye::models::{AppConfig, PaletteMapView};
use manadye::services::{DyePipeline, DyeSource};

#[derive(Parser)]
#[command(name = "manadye")]
#[command(about = "ManaDye - recolor channel-coded sprites with gradient palettes")]
struct Cli {
    /// YAML configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a PNG image
    Apply {
        /// Image path, optionally followed by a channel spec (e.g. "hair.png|W;R")
        image: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Dye descriptor (e.g. "R:#ff0000,#880000;G:#00ff00")
        #[arg(short, long, conflicts_with = "preset")]
        dye: Option<String>,

        /// Name of a preset from the configuration file
        #[arg(short, long)]
        preset: Option<String>,

        /// Integer upscaling factor for previews
        #[arg(short, long, default_value_t = 1)]
        scale: usize,
    },
    /// Parse a dye descriptor and print its channel palettes
    Parse {
        /// Dye descriptor
        descriptor: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the channel and intensity of hex colors
    Classify {
        /// Colors such as "#ff8800" or "00ff00"
        #[arg(required = true)]
        colors: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "manadye=debug,dye_engine=debug"
    } else {
        "manadye=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Apply {
            image,
            output,
            dye,
            preset,
            scale,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let source = match (dye, preset) {
                (Some(desc), _) => DyeSource::Descriptor(desc),
                (None, Some(name)) => DyeSource::Preset(name),
                (None, None) => DyeSource::None,
            };
            run_apply_command(config, &image, &source, &output, scale)
        }
        Some(Commands::Parse { descriptor, json }) => run_parse_command(&descriptor, json),
        Some(Commands::Classify { colors }) => run_classify_command(&colors),
        None => {
            let config = load_config(cli.config.as_deref())?;
            run_status_command(&config);
            Ok(())
        }
    }
}

/// An explicit `--config` must exist; `CONFIG_FILE` falls back to defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AppConfig::load_from_env()),
    }
}

fn run_apply_command(
    config: AppConfig,
    image: &str,
    source: &DyeSource,
    output: &Path,
    scale: usize,
) -> anyhow::Result<()> {
    let pipeline = DyePipeline::new(config);
    let report = pipeline
        .apply_file(image, source, output, scale)
        .with_context(|| format!("Failed to dye {image}"))?;

    println!(
        "Wrote {} ({}x{}, {} channel palettes) from {}",
        output.display(),
        report.width,
        report.height,
        report.dye.palettes().len(),
        report.name
    );
    Ok(())
}

fn run_parse_command(descriptor: &str, json: bool) -> anyhow::Result<()> {
    let palettes = parse_palettes(descriptor).context("Invalid dye descriptor")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&PaletteMapView(&palettes))?);
        return Ok(());
    }

    if palettes.is_empty() {
        println!("(no palettes)");
    }
    for (channel, palette) in &palettes {
        println!("{channel:<4} {palette}");
    }
    Ok(())
}

fn run_classify_command(colors: &[String]) -> anyhow::Result<()> {
    for token in colors {
        let color: Rgb = token
            .parse()
            .with_context(|| format!("Invalid color {token:?}"))?;
        let (channel, intensity) = Channel::classify(color);
        println!("{color}  {channel:<4} {intensity:>3}");
    }
    Ok(())
}

fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("ManaDye v{VERSION}");
    println!("Palette recoloring for channel-coded sprites\n");

    println!("Config:");
    match &config.source {
        Some(path) => println!("  file        = {}", path.display()),
        None => println!("  file        = (defaults)"),
    }
    println!("  compression = {:?}", config.compression);

    println!("\nPresets:");
    if config.presets.is_empty() {
        println!("  (none)");
    }
    for (name, descriptor) in &config.presets {
        println!("  {name:<12} {descriptor}");
    }

    println!("\nRun 'manadye --help' for usage.");
}
