//! Command-line interface for deskimg.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::Config;

mod images;
mod serve;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "deskimg", version, about = "Inspect and compress images on the desktop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the image files on the desktop
    Count,

    /// List the image files on the desktop
    List,

    /// Compress a desktop image at a given quality
    Compress {
        /// Name of the image file to compress
        file_name: String,

        /// Compression quality (1-100)
        #[arg(long, default_value_t = crate::compress::DEFAULT_QUALITY)]
        quality: u8,

        /// Output file name (default: <name>-compressed.<ext>)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start the MCP (Model Context Protocol) server (for AI tool integration)
    Mcp,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Missing home directory is fatal at startup, never a per-request error.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command {
        Commands::Count => images::run_count(&config),
        Commands::List => images::run_list(&config),
        Commands::Compress { file_name, quality, output } => {
            images::run_compress(&config, &file_name, quality, output.as_deref())
        }
        Commands::Mcp => serve::run_mcp(config),
    }
}
