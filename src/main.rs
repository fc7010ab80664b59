use anyhow::Result;
use clap::Parser;
use showcase::commands::{self, StreaksOptions};
use std::path::PathBuf;

/// showcase - App showcase tooling
///
/// Resolves the latest GitHub release for the showcased apps and renders
/// the circuit-trace background animation.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   showcase apps                  # List the showcased apps
///   showcase download sajda        # Show the download control for an app
///   showcase download owner/repo   # ...or for any repository
///   showcase streaks -o bg.svg     # Render an animation snapshot
#[derive(Parser, Debug)]
#[command(author, version = env!("SHOWCASE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Release cache directory (also via SHOWCASE_CACHE_DIR)
    #[arg(
        long = "cache-dir",
        env = "SHOWCASE_CACHE_DIR",
        value_name = "PATH",
        global = true
    )]
    pub cache_dir: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the showcased apps
    Apps(AppsArgs),

    /// Resolve the latest release and show the download options
    Download(DownloadArgs),

    /// Render the background animation to SVG
    Streaks(StreaksArgs),
}

#[derive(clap::Args, Debug)]
pub struct AppsArgs {
    /// Keep refreshing launch countdowns every second
    #[arg(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// An app id from `showcase apps`, or a repository as "owner/repo"
    #[arg(value_name = "APP|OWNER/REPO")]
    pub target: String,
}

#[derive(clap::Args, Debug)]
pub struct StreaksArgs {
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Number of frames to simulate before taking the snapshot
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Milliseconds between frames
    #[arg(long = "frame-ms", default_value_t = 16)]
    pub frame_ms: u64,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the SVG here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Run the frame loop in real time instead of simulating
    #[arg(long)]
    pub realtime: bool,
}

impl From<StreaksArgs> for StreaksOptions {
    fn from(args: StreaksArgs) -> Self {
        StreaksOptions {
            width: args.width,
            height: args.height,
            frames: args.frames,
            frame_ms: args.frame_ms,
            seed: args.seed,
            output: args.output,
            realtime: args.realtime,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = showcase::runtime::RealRuntime;

    match cli.command {
        Commands::Apps(args) => commands::apps(args.watch).await?,
        Commands::Download(args) => {
            commands::download(runtime, &args.target, cli.api_url, cli.cache_dir).await?
        }
        Commands::Streaks(args) => commands::streaks(runtime, args.into()).await?,
    }
    Ok(())
}
