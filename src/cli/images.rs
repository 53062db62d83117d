//! Execute the count, list, and compress CLI commands.

use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::compress::compress;
use crate::config::Config;
use crate::scan::list_image_files;

/// Execute the count command
pub fn run_count(config: &Config) -> ExitCode {
    println!("{}", list_image_files(config).len());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the list command
pub fn run_list(config: &Config) -> ExitCode {
    let images = list_image_files(config);
    if images.is_empty() {
        eprintln!("No image files found on the desktop.");
        return ExitCode::from(EXIT_SUCCESS);
    }
    for name in images {
        println!("{name}");
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the compress command
pub fn run_compress(
    config: &Config,
    file_name: &str,
    quality: u8,
    output: Option<&str>,
) -> ExitCode {
    match compress(config, file_name, quality, output) {
        Ok(result) => {
            println!(
                "{} ({} bytes) -> {} ({} bytes), saved {:.2}%",
                result.original_file_name,
                result.original_size_bytes,
                result.output_file_name,
                result.compressed_size_bytes,
                result.savings_percent
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
