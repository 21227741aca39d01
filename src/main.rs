//! Agent Dashboard - Desktop reporting dashboard for agent attendance.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use agent_dashboard as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::db;
use app::ui::App;

/// Desktop reporting dashboard for agent attendance and late-login tracking.
#[derive(Parser)]
#[command(name = "agent-dashboard")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging();

    tracing::info!("Agent Dashboard starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            run_app(config)
        }
        ConfigLoadResult::Missing => {
            let template = AppConfig::default();
            match template.save(&config_path) {
                Ok(()) => tracing::error!(
                    "No config found; wrote a template to {:?}. Edit it and restart.",
                    config_path
                ),
                Err(e) => tracing::error!("No config found and failed to write a template: {}", e),
            }
            std::process::exit(1);
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing to stdout and a daily-rolling log file.
///
/// The returned guard must be held for the process lifetime so buffered
/// log lines are flushed on exit.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let file_writer = directories::ProjectDirs::from("", "", "agent-dashboard").and_then(|dirs| {
        let log_dir = dirs.data_local_dir().join("logs");
        std::fs::create_dir_all(&log_dir).ok()?;
        let appender = tracing_appender::rolling::daily(log_dir, "agent-dashboard.log");
        Some(tracing_appender::non_blocking(appender))
    });

    match file_writer {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
            None
        }
    }
}

/// Run the main application.
fn run_app(config: AppConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent Dashboard")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    // Connect to database
    let pool = match rt.block_on(db::connect(&config.database.connection_string())) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Verify the connection and log store info
    rt.block_on(async {
        if let Err(e) = db::test_connection(&pool).await {
            tracing::error!("Database connection check failed: {}", e);
            std::process::exit(1);
        }

        if let Ok(version) = db::get_version(&pool).await {
            tracing::info!("PostgreSQL: {}", version);
        }

        if let Ok(counts) = db::get_table_counts(&pool).await {
            tracing::info!(
                "Tables: {} agents, {} attendance logs, {} attendance targets",
                counts.agents,
                counts.attendance_logs,
                counts.attendance_targets
            );
        }
    });

    eframe::run_native(
        "Agent Dashboard",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(pool, config, rt)))
        }),
    )
}
