//! File saving for exported canvases.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory exported images are written to.
    pub save_directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Rasterpad"),
        }
    }
}

/// Milliseconds since the Unix epoch, used to name exports.
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Builds the export filename for a timestamp: `paint-<epoch_ms>.png`.
pub fn generate_filename(epoch_ms: i64) -> String {
    format!("paint-{epoch_ms}.png")
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded PNG bytes into the configured directory.
///
/// # Arguments
/// * `image_data` - PNG bytes from [`super::encode_png`]
/// * `config` - Export configuration
///
/// # Returns
/// Path to the saved file
pub fn save_png(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(generate_filename(epoch_millis()));

    log::info!(
        "Saving canvas to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
