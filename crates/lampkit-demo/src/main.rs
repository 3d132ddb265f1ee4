//! `lamp-demo`: render the lamp demo page headlessly or play scripted
//! sessions against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lampkit_core::Widget;
use lampkit_demo::{DemoConfig, DemoHost, DemoScript, RecordingSurface, Session, StepReport};
use lampkit_widgets::LampSize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Seconds a rendered frame is advanced so every transition has finished.
const SETTLE_SECONDS: f64 = 1.5;

#[derive(Parser)]
#[command(name = "lamp-demo")]
#[command(about = "Hanging-lamp theme toggle demo")]
#[command(version)]
struct Cli {
    /// TOML file with the initial demo state and viewport
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one settled frame of the demo page
    Render {
        /// Start in the dark theme
        #[arg(long)]
        dark: bool,

        /// Size of the main lamp (small, medium, large)
        #[arg(short, long)]
        size: Option<LampSize>,

        /// Base animation duration in seconds (0.1 to 1.0)
        #[arg(long)]
        speed: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Play a TOML script of clicks, size and speed changes and time steps
    Play {
        /// Path to the script
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn mount(config: &DemoConfig) -> DemoHost {
    let mut host = DemoHost::new(config.initial_state(), RecordingSurface::new());
    host.layout(config.viewport.rect());
    host
}

fn cmd_render(
    mut config: DemoConfig,
    dark: bool,
    size: Option<LampSize>,
    speed: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    config.demo.is_dark |= dark;
    if let Some(size) = size {
        config.demo.size = size;
    }
    if let Some(speed) = speed {
        config.demo.animation_duration = speed;
    }
    config.validate().context("invalid render options")?;

    let mut session = Session::new(mount(&config));
    session.advance(SETTLE_SECONDS);
    let host = session.host();

    let output = match format {
        OutputFormat::Text => host.summary().to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&host.summary())
            .context("failed to encode frame as JSON")?,
        OutputFormat::Html => host.to_html(),
    };
    print!("{output}");
    Ok(())
}

fn cmd_play(config: &DemoConfig, script: &Path, format: OutputFormat) -> Result<()> {
    let script = DemoScript::load(script)
        .with_context(|| format!("failed to load script {}", script.display()))?;
    tracing::info!(steps = script.steps.len(), "playing script");

    let mut session = Session::new(mount(config));
    let reports = session.run(&script).context("script failed")?;

    match format {
        OutputFormat::Text => {
            for report in &reports {
                print_report(report);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports)
                .context("failed to encode reports as JSON")?;
            println!("{json}");
        }
        OutputFormat::Html => print!("{}", session.host().to_html()),
    }
    Ok(())
}

fn print_report(report: &StepReport) {
    let frame = &report.frame;
    println!(
        "step {:>2} {:<20} t={:.2}s theme={} size={} speed={}s{}",
        report.index,
        report.action,
        report.elapsed,
        frame.theme,
        frame.state.selected_size,
        frame.state.animation_duration,
        if frame.animating { " (animating)" } else { "" }
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            dark,
            size,
            speed,
            format,
        } => cmd_render(config, dark, size, speed, format),
        Commands::Play { script, format } => cmd_play(&config, &script, format),
    }
}
