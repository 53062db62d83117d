//! Image classification by file extension.
//!
//! The extension set below is authoritative for scanning and for output-name
//! suffix decisions; it is a closed set, matched case-insensitively.

use std::path::Path;

/// Extensions recognized as image files (without the leading dot).
pub const IMAGE_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "svg"];

/// Whether the path names an image file, judged purely by extension.
///
/// Pure predicate: no filesystem access, no side effects.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}
