/// Lilt - play through a playlist from the terminal
use clap::Parser;
use lilt_console::{ConsoleConfig, Overrides, Session};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lilt")]
#[command(about = "Lilt playlist player (simulated transport)", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./lilt.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so it does not mix with the player output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lilt_console=info,lilt_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = ConsoleConfig::load(cli.config.as_deref())?;
    config.apply(&cli.overrides);
    config.validate()?;

    let playlist = config.load_playlist()?;
    tracing::info!(
        playlist = %config.playlist.display(),
        tracks = playlist.len(),
        "Playlist loaded"
    );

    println!("Type 'help' for commands.");
    let stdout = io::stdout();
    let mut session = Session::new(&config, playlist, stdout.lock())?;

    let stdin = io::stdin();
    session.run(stdin.lock())?;

    Ok(())
}
