use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::log::{error, info};
use clap::{Parser, Subcommand};

use tilemap_maker::config::{AppConfig, load_config, save_config};
use tilemap_maker::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use tilemap_maker::project::{self, Legend, Project, ProjectError};
use tilemap_maker::{assets, paths};

#[derive(Parser)]
#[command(name = "tilemap-maker", version, about = "Layered tile map projects")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new project directory with an empty "Background" layer
    New {
        name: String,
        #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
        height: u32,
        /// Directory to create the project in (defaults to the remembered one, then ".")
        #[arg(long)]
        parent: Option<PathBuf>,
    },
    /// Show a project's layers and tile counts
    Info { path: PathBuf },
    /// Write the legend and per-layer grids into the project directory
    Export { path: PathBuf },
    /// Load and re-save a project, converting a legacy tile map into layers
    Migrate { path: PathBuf },
    /// List the tile images found under a project directory
    Assets { path: PathBuf },
    /// List recently used projects
    Recent,
}

/// Set up logging: stderr always, plus a log file in debug builds
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;

    // Use env filter to control log levels (default to info, debug for tilemap_maker)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tilemap_maker=debug"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let (file_layer, guard) = match file_log_writer() {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(debug_assertions)]
fn file_log_writer() -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    use std::fs::OpenOptions;
    use std::io::Write;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("tilemap_maker.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "tilemap_maker.log");
    Some(tracing_appender::non_blocking(file_appender))
}

#[cfg(not(debug_assertions))]
fn file_log_writer() -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    None
}

fn main() -> ExitCode {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), ProjectError> {
    match command {
        Command::New {
            name,
            width,
            height,
            parent,
        } => {
            let mut config = open_config();
            let parent = parent
                .or_else(|| config.data.default_parent_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let created = project::create_project(&name, width, height, &parent)?;
            if let Some(root) = &created.root_path {
                println!("Created {}", root.display());
                if let Some(parent) = root.parent() {
                    config.data.default_parent_dir = Some(parent.to_path_buf());
                }
                remember(&mut config, root);
            }
        }
        Command::Info { path } => {
            let loaded = project::load_project(&path)?;
            print_info(&loaded);
            let mut config = open_config();
            if let Some(root) = &loaded.root_path {
                remember(&mut config, root);
            }
        }
        Command::Export { path } => {
            let loaded = project::load_project(&path)?;
            let summary = project::export_flat_text(&loaded)?;
            println!("{}", summary.legend_path.display());
            for layer_path in &summary.layer_paths {
                println!("{}", layer_path.display());
            }
        }
        Command::Migrate { path } => {
            let loaded = project::load_project(&path)?;
            let written = project::save_project(&loaded)?;
            info!("Rewrote {:?} with {} layers", written, loaded.layer_count());
            println!("{}", written.display());
        }
        Command::Assets { path } => {
            let files = assets::list_image_files(&path).map_err(|e| ProjectError::Io {
                path: path.clone(),
                source: e,
            })?;
            for file in files {
                println!("{}", file.display());
            }
        }
        Command::Recent => {
            let config = open_config();
            for path in &config.data.recent_projects {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn print_info(project: &Project) {
    println!(
        "{} ({}x{}, {} tiles, {} distinct images)",
        project.name,
        project.width(),
        project.height(),
        project.tile_count(),
        Legend::from_project(project).len()
    );
    for (index, layer) in project.layers().iter().enumerate() {
        println!(
            "  [{}] {}{} - {} tiles",
            index,
            layer.name,
            if layer.visible { "" } else { " (hidden)" },
            layer.tile_count()
        );
    }
}

fn open_config() -> AppConfig {
    let config_path = paths::settings_file();
    let result = load_config(&config_path);
    if let Some(reason) = result.reset_reason {
        eprintln!("Settings were reset: {}", reason);
    }
    AppConfig {
        data: result.data,
        config_path,
        dirty: false,
    }
}

fn remember(config: &mut AppConfig, root: &Path) {
    config.data.remember_project(root);
    if let Err(e) = paths::ensure_directories() {
        error!("Failed to create settings directory: {}", e);
        return;
    }
    save_config(config);
}
