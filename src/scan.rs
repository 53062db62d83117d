//! Desktop directory scanning.

use crate::classify::is_image_file;
use crate::config::Config;

/// List the image file names in the managed desktop directory.
///
/// Fail-soft: if the directory cannot be enumerated (missing, permission
/// denied), the error is logged and an empty list is returned. Callers see
/// "zero images found" rather than an error. Results are in filesystem
/// enumeration order; do not rely on them being sorted.
pub fn list_image_files(config: &Config) -> Vec<String> {
    let entries = match std::fs::read_dir(&config.desktop_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                dir = %config.desktop_dir.display(),
                error = %err,
                "failed to read desktop directory"
            );
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        // stat (follows symlinks): only regular files count
        let is_file = std::fs::metadata(&path).map(|meta| meta.is_file()).unwrap_or(false);
        if is_file && is_image_file(&path) {
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                files.push(name.to_string());
            }
        }
    }
    files
}
