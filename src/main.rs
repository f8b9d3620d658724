use anyhow::{Context, Result};
use clap::Parser;
use lcd_sens::config::AppConfig;
use lcd_sens::core::{FrameRenderer, LayoutTable, RunOutcome, Scheduler, StatusDisplay, TokioClock};
use lcd_sens::display::PanelDevice;
use lcd_sens_core::{DisplayDevice, MetricCollector, MetricKey};
use lcd_sens_render::load_font_set;
use lcd_sens_sources::SystemCollectors;
use log::{info, warn};
use std::path::PathBuf;
use tokio::sync::watch;

/// lcd-Sens - host status on a small SPI panel
#[derive(Parser, Debug)]
#[command(name = "lcd-sens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render a single frame and exit
    #[arg(long = "once")]
    once: bool,

    /// Print every metric to stdout and exit without touching the display
    #[arg(long = "print", conflicts_with = "once")]
    print: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting lcd-Sens v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let collectors = SystemCollectors::new(config.collectors.clone());

    if cli.print {
        print_metrics(&collectors).await;
        return Ok(());
    }

    let font_dir = config.fonts.resolve_directory()?;
    let fonts = load_font_set(&font_dir, &config.fonts.specs)
        .with_context(|| format!("loading fonts from {}", font_dir.display()))?;

    let mut device = PanelDevice::open(&config.display)?;
    device
        .set_backlight(config.display.backlight)
        .context("setting backlight")?;

    let mut display = StatusDisplay::new(
        collectors,
        device,
        LayoutTable::default(),
        fonts,
        FrameRenderer::default(),
    );

    if cli.once {
        return display.refresh().await;
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let mut scheduler = Scheduler::new(
        TokioClock,
        config.schedule.warm_up(),
        config.schedule.interval(),
    );
    let outcome = scheduler.run(&mut display, shutdown_rx, None).await;
    if outcome == RunOutcome::Shutdown {
        info!("Stopped after {} frames", scheduler.cycles());
    }
    Ok(())
}

/// Collect every metric once and print it, one per line
async fn print_metrics(collectors: &SystemCollectors) {
    for key in MetricKey::ALL {
        let value = collectors.collect_value(key).await;
        println!("{:<12} {:<24} {}", key.id(), value.as_display(), key.description());
    }
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
