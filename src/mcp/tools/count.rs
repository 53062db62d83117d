//! MCP count-desktop-images tool — report how many images are on the desktop.

use crate::config::Config;
use crate::scan::list_image_files;

/// Execute the count tool logic.
///
/// Scanning is fail-soft, so a missing desktop folder reads as zero images
/// rather than an error.
pub fn run_count(config: &Config) -> Result<String, String> {
    let images = list_image_files(config);
    Ok(format!("There are {} image files on the desktop.", images.len()))
}
