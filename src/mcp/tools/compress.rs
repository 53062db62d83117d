//! MCP compress-image tool — re-encode a desktop image at a given quality.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::compress::{compress, DEFAULT_QUALITY};
use crate::config::Config;

/// Input parameters for the compress-image tool.
///
/// Field names are the wire contract; they must stay camelCase.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompressInput {
    /// Name of the image file to compress.
    #[schemars(description = "Name of the image file to compress")]
    pub file_name: String,

    /// Compression quality (1-100, default 80).
    #[serde(default = "default_quality")]
    #[schemars(description = "Compression quality (1-100)", range(min = 1, max = 100))]
    pub quality: u8,

    /// Output file name (optional).
    #[schemars(description = "Output file name (optional)")]
    pub output_name: Option<String>,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

/// Execute the compress tool logic.
///
/// Any failure is rendered into the error message that ends up in the
/// `isError` envelope; nothing propagates past the dispatch boundary.
pub fn run_compress(config: &Config, input: CompressInput) -> Result<String, String> {
    let result =
        compress(config, &input.file_name, input.quality, input.output_name.as_deref())
            .map_err(|err| format!("Error compressing image: {err}"))?;

    Ok(format!(
        "Image compressed successfully!\n\
         Original file: {} ({} bytes)\n\
         Compressed file: {} ({} bytes)\n\
         Space saved: {:.2}%",
        result.original_file_name,
        result.original_size_bytes,
        result.output_file_name,
        result.compressed_size_bytes,
        result.savings_percent
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(file_name: &str, quality: Option<u8>, output_name: Option<&str>) -> CompressInput {
        CompressInput {
            file_name: file_name.to_string(),
            quality: quality.unwrap_or_else(default_quality),
            output_name: output_name.map(str::to_string),
        }
    }

    fn write_test_png(dir: &std::path::Path) {
        let img = image::RgbaImage::from_fn(16, 16, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 16) as u8, 0, 255])
        });
        img.save(dir.join("photo.png")).unwrap();
    }

    #[test]
    fn test_compress_success_summary() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(dir.path());

        let config = Config::with_desktop_dir(dir.path().to_path_buf());
        let text = run_compress(&config, input("photo.png", None, None)).unwrap();
        assert!(text.starts_with("Image compressed successfully!"));
        assert!(text.contains("Original file: photo.png"));
        assert!(text.contains("Compressed file: photo-compressed.png"));
        assert!(text.contains("Space saved: "));
        assert!(text.contains('%'));
    }

    #[test]
    fn test_compress_missing_file_message() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_desktop_dir(dir.path().to_path_buf());
        let err = run_compress(&config, input("ghost.png", None, None)).unwrap_err();
        assert!(err.starts_with("Error compressing image:"));
        assert!(err.contains("ghost.png"));
    }

    #[test]
    fn test_compress_unsupported_file_message() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
        let config = Config::with_desktop_dir(dir.path().to_path_buf());
        let err = run_compress(&config, input("notes.txt", None, None)).unwrap_err();
        assert!(err.contains("not a supported image format"));
    }

    #[test]
    fn test_input_deserializes_wire_names() {
        let input: CompressInput = serde_json::from_value(serde_json::json!({
            "fileName": "photo.png",
            "quality": 55,
            "outputName": "small"
        }))
        .unwrap();
        assert_eq!(input.file_name, "photo.png");
        assert_eq!(input.quality, 55);
        assert_eq!(input.output_name.as_deref(), Some("small"));
    }

    #[test]
    fn test_input_quality_defaults_to_80() {
        let input: CompressInput =
            serde_json::from_value(serde_json::json!({ "fileName": "photo.png" })).unwrap();
        assert_eq!(input.quality, 80);
        assert!(input.output_name.is_none());
    }
}
