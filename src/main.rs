//! Noughts - desktop tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::gui::NoughtsApp;
use noughts::{AppConfig, Cli, Diagnostics, TurnController};
use noughts_core::Solver;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = AppConfig::load_or_default(&cli.config)?.merge_cli(&cli);
    info!(?config, "Starting noughts");

    let diagnostics = create_diagnostics(&config);
    let mut controller =
        TurnController::new(config.ai_settings(), Solver::new(), diagnostics.clone());

    if let Some(state) = &cli.state
        && let Err(e) = controller.load_state(state)
    {
        diagnostics.error(format!("Ignoring --state {:?}: {}", state, e));
    }

    run_gui(controller, config.restore_state)
}

/// Builds the diagnostics sink, falling back to memory-only logging when the
/// log file cannot be opened.
#[instrument(skip(config))]
fn create_diagnostics(config: &AppConfig) -> Diagnostics {
    let diagnostics = Diagnostics::new(config.max_log_entries);
    if config.file_logging {
        if let Err(e) = diagnostics.set_log_file(&config.log_file) {
            diagnostics.warning(e.to_string());
        }
    } else {
        info!("File logging disabled");
    }
    diagnostics
}

/// Opens the window and blocks until it closes.
#[instrument(skip(controller))]
fn run_gui(controller: TurnController, restore_state: bool) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Noughts"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    let result = eframe::run_native(
        "noughts",
        options,
        Box::new(move |cc| Ok(Box::new(NoughtsApp::new(cc, controller, restore_state)))),
    );

    match result {
        Ok(()) => {
            info!("Window closed");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "GUI exited with an error");
            Err(anyhow::anyhow!("GUI error: {}", e))
        }
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,noughts=debug,noughts_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Tracing initialized");
}
