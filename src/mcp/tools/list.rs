//! MCP list-desktop-images tool — enumerate desktop image file names.

use crate::config::Config;
use crate::scan::list_image_files;

/// Execute the list tool logic.
///
/// Names are reported 1-indexed in filesystem enumeration order.
pub fn run_list(config: &Config) -> Result<String, String> {
    let images = list_image_files(config);
    if images.is_empty() {
        return Ok("No image files found on the desktop.".to_string());
    }
    let listing = images
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{}. {}", idx + 1, name))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!("Image files on the desktop:\n{listing}"))
}
