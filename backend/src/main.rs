//! ClearX CLI - enhancement endpoint and tools
//!
//! ```bash
//! clearx serve                            # Start HTTP server (port 8000)
//! clearx enhance tile.png -o tile_x4.png  # Enhance a file locally
//! clearx request tile.png                 # Send a file to a running endpoint
//! ```

use clap::{Parser, Subcommand};
use clearx::{enhance_bytes, EnhanceClient, ServerConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clearx")]
#[command(about = "ClearX satellite image enhancement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: CLEARX_PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Upscaling factor (default: CLEARX_SCALE or 4)
        #[arg(short, long)]
        scale: Option<u32>,

        /// Serve a built frontend from this directory
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Enhance a local image without a server
    Enhance {
        /// Input image
        input: PathBuf,

        /// Output PNG (default: <input>_enhanced.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Upscaling factor (default: CLEARX_SCALE or 4)
        #[arg(short, long)]
        scale: Option<u32>,
    },

    /// Send an image to a running enhancement endpoint
    Request {
        /// Input image
        input: PathBuf,

        /// Endpoint base URL
        #[arg(short, long, env = "CLEARX_ENDPOINT", default_value = "http://localhost:8000")]
        endpoint: String,

        /// Output file (default: ClearX_enhanced_satellite.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, scale, static_dir } => cmd_serve(port, scale, static_dir).await,

        Commands::Enhance { input, output, scale } => cmd_enhance(&input, output.as_deref(), scale).await,

        Commands::Request { input, endpoint, output } => {
            cmd_request(&input, &endpoint, output.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Environment configuration with CLI overrides applied.
fn load_config(
    port: Option<u16>,
    scale: Option<u32>,
    static_dir: Option<PathBuf>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(scale) = scale {
        config.enhance.scale = scale;
    }
    if static_dir.is_some() {
        config.static_dir = static_dir;
    }
    config.validate()?;
    Ok(config)
}

async fn cmd_serve(
    port: Option<u16>,
    scale: Option<u32>,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(port, scale, static_dir)?;
    clearx::server::start_server(config).await
}

async fn cmd_enhance(
    input: &Path,
    output: Option<&Path>,
    scale: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(None, scale, None)?;
    eprintln!("🛰️  Enhancing: {}", input.display());

    let bytes = fs::read(input)?;
    let options = config.enhance;
    let result = tokio::task::spawn_blocking(move || enhance_bytes(&bytes, &options)).await??;

    eprintln!(
        "   {}x{} → {}x{} (x{})",
        result.source_width, result.source_height, result.width, result.height, options.scale
    );

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_enhance_output(input));
    fs::write(&output, &result.png)?;
    eprintln!("💾 Output written to: {}", output.display());

    Ok(())
}

async fn cmd_request(input: &Path, endpoint: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📤 Sending {} to {}", input.display(), endpoint);

    let client = EnhanceClient::new(endpoint);
    let result = client.enhance_file(input).await?;

    eprintln!("✅ Received {}x{} {} ({} bytes)", result.width, result.height, result.mime, result.bytes.len());

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(result.file_name()));
    fs::write(&output, &result.bytes)?;
    eprintln!("💾 Output written to: {}", output.display());

    Ok(())
}

fn default_enhance_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{}_enhanced.png", stem))
}
