mod config;

pub use config::Config;

use std::path::PathBuf;

/// Returns `~/.config/tabata[-dev]/` based on TABATA_ENV.
///
/// Set TABATA_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TABATA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tabata-dev")
    } else {
        base_dir.join("tabata")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
