//! Image compression: re-encode a desktop image at a given quality.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::{WebPEncoder, WebPQuality};
use image::ImageEncoder;
use thiserror::Error;

use crate::classify::is_image_file;
use crate::config::Config;

/// Default compression quality when the caller does not supply one.
pub const DEFAULT_QUALITY: u8 = 80;

/// Compression failure
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompressError {
    /// The source file does not exist under the desktop directory.
    #[error("File \"{0}\" does not exist.")]
    NotFound(String),
    /// The source file's extension is outside the supported image set.
    #[error("File \"{0}\" is not a supported image format.")]
    UnsupportedFormat(String),
    /// Decode or encode failure from the underlying codec.
    #[error("Image codec error: {0}")]
    Encoding(#[from] image::error::ImageError),
    /// Read/write failure on the source or output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The encoder used to write the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Jpeg,
    Png,
    WebP,
}

impl Codec {
    /// Select the encoder from the source file's extension (lower-cased).
    ///
    /// Recognized image types without a matching lossy encoder here
    /// (gif, bmp, tiff, svg) are normalized to JPEG, since quality is only
    /// meaningful for lossy output. The output file's extension plays no
    /// part in this choice.
    pub fn for_source_extension(ext: &str) -> Codec {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Codec::Jpeg,
            "png" => Codec::Png,
            "webp" => Codec::WebP,
            _ => Codec::Jpeg,
        }
    }
}

/// Outcome of a single compression request. Computed once, never persisted;
/// the written file is the durable artifact.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompressionResult {
    pub original_file_name: String,
    pub output_file_name: String,
    pub original_size_bytes: u64,
    pub compressed_size_bytes: u64,
    /// Space saved, rounded to 2 decimals. Negative means the file grew.
    pub savings_percent: f64,
}

/// Split `name` into (base, extension-with-dot), Node `path.extname` style:
/// the extension starts at the last dot, except a dot in the first position
/// (hidden file) which yields no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Resolve the output file name for a compression of `file_name`.
///
/// Without an explicit `output_name` the result is
/// `<base>-compressed<ext>`. An explicit name that already carries a
/// recognized image extension is used as-is; otherwise the source's
/// extension is appended.
pub fn resolve_output_name(file_name: &str, output_name: Option<&str>) -> String {
    let (base, ext) = split_extension(file_name);
    let chosen = match output_name {
        Some(name) => name.to_string(),
        None => format!("{base}-compressed{ext}"),
    };
    if is_image_file(Path::new(&chosen)) {
        chosen
    } else {
        format!("{chosen}{ext}")
    }
}

/// Percentage of bytes saved, rounded to 2 decimals.
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let raw = (original as f64 - compressed as f64) / original as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Re-encode `file_name` from the desktop directory at `quality` (clamped
/// into 1-100) and write the result next to it, overwriting any existing
/// output file. Returns the before/after byte accounting.
///
/// `file_name` and `output_name` are joined onto the desktop path as given;
/// traversal components are not rejected here.
pub fn compress(
    config: &Config,
    file_name: &str,
    quality: u8,
    output_name: Option<&str>,
) -> Result<CompressionResult, CompressError> {
    let quality = quality.clamp(1, 100);
    let input_path = config.desktop_dir.join(file_name);

    if !input_path.exists() {
        return Err(CompressError::NotFound(file_name.to_string()));
    }
    if !is_image_file(&input_path) {
        return Err(CompressError::UnsupportedFormat(file_name.to_string()));
    }

    let output_file_name = resolve_output_name(file_name, output_name);
    let output_path = config.desktop_dir.join(&output_file_name);

    let (_, ext) = split_extension(file_name);
    let codec = Codec::for_source_extension(ext.trim_start_matches('.'));

    let img = image::open(&input_path)?;
    let mut writer = BufWriter::new(fs::File::create(&output_path)?);
    match codec {
        Codec::Jpeg => {
            // JPEG has no alpha channel; flatten before encoding.
            let rgb = img.to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), image::ColorType::Rgb8)?;
        }
        Codec::Png => {
            // PNG is lossless; quality selects compression effort.
            let compression = match quality {
                0..=33 => CompressionType::Fast,
                34..=66 => CompressionType::Default,
                _ => CompressionType::Best,
            };
            let rgba = img.to_rgba8();
            let encoder =
                PngEncoder::new_with_quality(&mut writer, compression, FilterType::Adaptive);
            encoder.write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                image::ColorType::Rgba8,
            )?;
        }
        Codec::WebP => {
            let rgba = img.to_rgba8();
            #[allow(deprecated)]
            let encoder = WebPEncoder::new_with_quality(&mut writer, WebPQuality::lossy(quality));
            encoder.write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                image::ColorType::Rgba8,
            )?;
        }
    }
    drop(writer);

    let original_size_bytes = fs::metadata(&input_path)?.len();
    let compressed_size_bytes = fs::metadata(&output_path)?.len();

    Ok(CompressionResult {
        original_file_name: file_name.to_string(),
        output_file_name,
        original_size_bytes,
        compressed_size_bytes,
        savings_percent: savings_percent(original_size_bytes, compressed_size_bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_for(dir: &Path) -> Config {
        Config::with_desktop_dir(dir.to_path_buf())
    }

    fn write_test_png(path: &PathBuf) {
        let img = image::RgbaImage::from_fn(32, 32, |x, y| {
            image::Rgba([(x * 8) as u8, (y * 8) as u8, 128, 255])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn test_resolve_output_name_default() {
        assert_eq!(resolve_output_name("photo.png", None), "photo-compressed.png");
        assert_eq!(resolve_output_name("cat.JPEG", None), "cat-compressed.JPEG");
    }

    #[test]
    fn test_resolve_output_name_without_extension() {
        assert_eq!(resolve_output_name("photo.png", Some("small")), "small.png");
    }

    #[test]
    fn test_resolve_output_name_with_recognized_extension() {
        // Kept untouched even though the encoder follows the source extension.
        assert_eq!(resolve_output_name("photo.png", Some("small.jpg")), "small.jpg");
    }

    #[test]
    fn test_resolve_output_name_unrecognized_extension() {
        assert_eq!(resolve_output_name("photo.png", Some("small.txt")), "small.txt.png");
    }

    #[test]
    fn test_codec_selection() {
        assert_eq!(Codec::for_source_extension("jpg"), Codec::Jpeg);
        assert_eq!(Codec::for_source_extension("JPEG"), Codec::Jpeg);
        assert_eq!(Codec::for_source_extension("png"), Codec::Png);
        assert_eq!(Codec::for_source_extension("webp"), Codec::WebP);
        // Recognized-but-uncovered formats normalize to JPEG.
        assert_eq!(Codec::for_source_extension("gif"), Codec::Jpeg);
        assert_eq!(Codec::for_source_extension("bmp"), Codec::Jpeg);
        assert_eq!(Codec::for_source_extension("tiff"), Codec::Jpeg);
        assert_eq!(Codec::for_source_extension("svg"), Codec::Jpeg);
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(1000, 750), 25.0);
        assert_eq!(format!("{:.2}", savings_percent(1000, 750)), "25.00");
        assert_eq!(savings_percent(3, 2), 33.33);
        // Growth is reported as a negative percentage, not an error.
        assert_eq!(savings_percent(100, 150), -50.0);
        assert_eq!(savings_percent(0, 10), 0.0);
    }

    #[test]
    fn test_compress_png() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("photo.png"));

        let result = compress(&config_for(dir.path()), "photo.png", 80, None).unwrap();
        assert_eq!(result.original_file_name, "photo.png");
        assert_eq!(result.output_file_name, "photo-compressed.png");
        assert!(dir.path().join("photo-compressed.png").is_file());
        assert!(result.original_size_bytes > 0);
        assert!(result.compressed_size_bytes > 0);
    }

    #[test]
    fn test_compress_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("photo.png"));
        let config = config_for(dir.path());

        let first = compress(&config, "photo.png", 60, Some("a.png")).unwrap();
        let second = compress(&config, "photo.png", 60, Some("b.png")).unwrap();
        assert_eq!(first.compressed_size_bytes, second.compressed_size_bytes);
    }

    #[test]
    fn test_compress_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("photo.png"));
        std::fs::write(dir.path().join("out.png"), b"stale").unwrap();

        let result = compress(&config_for(dir.path()), "photo.png", 80, Some("out.png")).unwrap();
        assert_eq!(result.output_file_name, "out.png");
        assert_ne!(std::fs::read(dir.path().join("out.png")).unwrap(), b"stale");
    }

    #[test]
    fn test_compress_png_to_jpeg_named_output() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("photo.png"));

        // Output name says .jpg, but the encoder still follows the source:
        // the bytes written are PNG.
        let result = compress(&config_for(dir.path()), "photo.png", 80, Some("small.jpg")).unwrap();
        assert_eq!(result.output_file_name, "small.jpg");
        let bytes = std::fs::read(dir.path().join("small.jpg")).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_compress_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = compress(&config_for(dir.path()), "ghost.png", 80, None).unwrap_err();
        assert!(matches!(err, CompressError::NotFound(_)));
        assert!(err.to_string().contains("ghost.png"));
    }

    #[test]
    fn test_compress_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        let err = compress(&config_for(dir.path()), "notes.txt", 80, None).unwrap_err();
        assert!(matches!(err, CompressError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("not a supported image format"));
    }

    #[test]
    fn test_compress_corrupt_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png at all").unwrap();
        let err = compress(&config_for(dir.path()), "broken.png", 80, None).unwrap_err();
        assert!(matches!(err, CompressError::Encoding(_)));
    }

    #[test]
    fn test_quality_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("photo.png"));
        let config = config_for(dir.path());

        // 0 clamps to 1, 255 clamps to 100; both must succeed.
        compress(&config, "photo.png", 0, Some("low.png")).unwrap();
        compress(&config, "photo.png", 255, Some("high.png")).unwrap();
    }

    #[test]
    fn test_compress_jpeg_source() {
        let dir = tempfile::tempdir().unwrap();
        let img = image::RgbImage::from_fn(32, 32, |x, y| {
            image::Rgb([(x * 8) as u8, (y * 8) as u8, 64])
        });
        img.save(dir.path().join("photo.jpg")).unwrap();

        let result = compress(&config_for(dir.path()), "photo.jpg", 50, None).unwrap();
        assert_eq!(result.output_file_name, "photo-compressed.jpg");
        let bytes = std::fs::read(dir.path().join("photo-compressed.jpg")).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]); // JPEG SOI marker
    }
}
