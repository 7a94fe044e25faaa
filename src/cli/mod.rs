use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    bridge::Bridge,
    clock::{Shutdown, ThreadSleeper},
    config::{self, LastFmConfig},
    domain::track::Track,
    lastfm::{client::LastFmClient, resolver::ArtworkResolver},
    osc::client::OscClient,
    player::{
        bus::{PlayerBus, SessionBus},
        locator::{PLAYER_PREFIX, PlayerLocator, find_player},
        snapshot::extract,
    },
};

#[derive(Parser)]
#[command(name = "squeaknp")]
#[command(version)]
#[command(about = "Forwards the media player's now playing track over OSC")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forward the playing track until interrupted (default)
    Run,
    /// List media players registered on the session bus
    Players,
    /// Print the currently playing track once
    NowPlaying,
    /// Look up artwork for a track on last.fm
    Lookup {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        artist: String,
        #[arg(short = 'b', long, default_value = "")]
        album: String,
    },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Starting squeaknp on {}", std::env::consts::OS);
    let cfg = config::Config::load(&cli.config)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bridge(cfg),

        Commands::Players => {
            let bus = SessionBus::connect().context("Failed to connect to the session bus")?;
            let names = bus.list_names().context("Failed to list d-bus names")?;
            let players: Vec<_> = names
                .iter()
                .filter(|name| name.starts_with(PLAYER_PREFIX))
                .collect();

            if players.is_empty() {
                println!("No media players found");
            }
            for player in players {
                println!("{player}");
            }
            Ok(())
        }

        Commands::NowPlaying => {
            let bus = SessionBus::connect().context("Failed to connect to the session bus")?;
            let names = bus.list_names().context("Failed to list d-bus names")?;
            let Some(player) = find_player(&names) else {
                bail!("no media player found");
            };

            let mut track = extract(&bus, player)?;
            if let Some(resolver) = artwork_resolver(&cfg.lastfm)? {
                let resolved = resolver.resolve(&track.title, &track.album, &track.artist);
                track.artwork_url = resolved.artwork_url;
                track.track_url = resolved.track_url;
            }

            println!("Player: {player}");
            print_track(&track);
            Ok(())
        }

        Commands::Lookup {
            title,
            artist,
            album,
        } => {
            let client = LastFmClient::new(&cfg.lastfm)
                .context("Lookup needs lastfm.api_key in the config")?;
            let resolved = ArtworkResolver::new(client).resolve(&title, &album, &artist);

            if resolved.is_empty() {
                println!("Nothing found for {title} by {artist}");
            } else {
                println!("Artwork: {}", resolved.artwork_url);
                println!("Url:     {}", resolved.track_url);
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_bridge(cfg: config::Config) -> anyhow::Result<()> {
    let shutdown = Shutdown::new();
    let on_signal = shutdown.clone();
    ctrlc::set_handler(move || {
        log::info!("Interrupted, stopping");
        on_signal.trigger();
    })
    .context("Failed to install the Ctrl-C handler")?;

    let bus = SessionBus::connect().context("Failed to connect to the session bus")?;
    let sink = OscClient::new(&cfg.osc.target())
        .with_context(|| format!("Failed to set up OSC client for {}", cfg.osc.target()))?;
    log::info!("Sending OSC messages to {}", sink.target());

    let mut bridge = Bridge::new(
        bus,
        artwork_resolver(&cfg.lastfm)?,
        sink,
        ThreadSleeper::new(shutdown.clone()),
        PlayerLocator::new(cfg.player.retry_interval()),
        cfg.player.update_rate(),
    );

    bridge.run(&shutdown)?;
    Ok(())
}

/// `None` when lookup is switched off or cannot run without an api key
fn artwork_resolver(
    config: &LastFmConfig,
) -> anyhow::Result<Option<ArtworkResolver<LastFmClient>>> {
    if !config.enabled {
        log::info!("Last.fm lookup disabled");
        return Ok(None);
    }
    if !config.lookup_enabled() {
        log::warn!("Last.fm lookup enabled but no api key configured, disabling it");
        return Ok(None);
    }

    let client = LastFmClient::new(config).context("Failed to create last.fm client")?;
    Ok(Some(ArtworkResolver::new(client)))
}

fn print_track(track: &Track) {
    println!("Title:    {}", track.title);
    println!("Album:    {}", track.album);
    println!("Artist:   {}", track.artist);
    println!("Duration: {} ms", track.duration_ms);
    println!("Position: {} ms", track.position_ms);
    if !track.artwork_url.is_empty() {
        println!("Artwork:  {}", track.artwork_url);
    }
    if !track.track_url.is_empty() {
        println!("Url:      {}", track.track_url);
    }
}
