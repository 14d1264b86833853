use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::remove_color_tags;

const LOG_FILE_NAME: &str = "decanter.log";

pub fn init_logger() -> Result<()> {
    let log_dir = get_log_dir();

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Console and file output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(false)
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
        )
        .init();

    tracing::info!("Logger initialized, writing to {:?}", log_dir.join(LOG_FILE_NAME));
    Ok(())
}

fn get_log_dir() -> PathBuf {
    // Logs go next to the executable
    match std::env::current_exe() {
        Ok(exe_path) => {
            exe_path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| {
                    eprintln!("Warning: Could not get parent directory of executable, using current directory");
                    PathBuf::from(".")
                })
        }
        Err(e) => {
            eprintln!("Warning: Could not get executable path ({}), using current directory", e);
            PathBuf::from(".")
        }
    }
}

/// Show a game message to the player on the console
pub fn print_chat(message: &str) {
    let clean = remove_color_tags(message);
    tracing::info!("[Chat] {}", clean);
}
