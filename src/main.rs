//! Pixel Sprites - animation preview
//!
//! Loads an asset directory, plays one animation for a fixed number of
//! ticks and prints where the player is after every tick.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use pixel_sprites::animation::PlaybackState;
use pixel_sprites::assets::{AssetRegistry, FileTextureStore};
use pixel_sprites::core::config::SpriteConfig;
use pixel_sprites::core::error::{Result, SpriteError};
use pixel_sprites::core::types::Rect;
use pixel_sprites::sprites::Sprite;

/// Step through a sprite animation and print each tick
#[derive(Parser, Debug)]
#[command(name = "pixel-sprites")]
#[command(about = "Preview sprite animation playback from an asset directory")]
struct Args {
    /// Directory of prefixed image assets (overrides the config file)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Directory of definition files (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the animation to play (file stem without the anim_ prefix)
    #[arg(long)]
    animation: String,

    /// Section to play; the whole animation when omitted
    #[arg(long)]
    section: Option<String>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Milliseconds per tick
    #[arg(long, default_value_t = 16.0)]
    tick_ms: f64,

    /// Playback speed multiplier
    #[arg(long)]
    speed: Option<f64>,

    /// Play once and stop at the end of the cycle
    #[arg(long)]
    no_loop: bool,

    /// Print one JSON object per tick
    #[arg(long)]
    json: bool,
}

/// One line of output
#[derive(Serialize)]
struct TickReport<'a> {
    tick: u32,
    elapsed_ms: f64,
    section: &'a str,
    frame_index: usize,
    frame_progress: f64,
    source: Rect,
    state: PlaybackState,
    changed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let mut store = FileTextureStore::new();
    let (registry, report) = AssetRegistry::load(&mut store, &config)?;
    if !report.is_clean() {
        tracing::warn!("{} asset(s) failed to load", report.failed.len());
    }

    let mut sprite = registry
        .get_animation(&args.animation)
        .ok_or_else(|| SpriteError::not_found("Animation", args.animation.as_str()))?;
    sprite.player_mut().play(args.section.as_deref())?;

    if !args.json {
        println!(
            "Playing '{}' section '{}' ({} frames, {} ms per cycle)",
            args.animation,
            sprite.player().active_section().name,
            sprite.player().active_section().frame_count(),
            sprite
                .player()
                .definition()
                .section_duration_ms(&sprite.player().active_section().name)?
        );
    }

    let mut elapsed_ms = 0.0;
    for tick in 1..=args.ticks {
        let changed = sprite.update(args.tick_ms);
        elapsed_ms += args.tick_ms;

        let player = sprite.player();
        let line = TickReport {
            tick,
            elapsed_ms,
            section: &player.active_section().name,
            frame_index: player.frame_index(),
            frame_progress: player.frame_progress(),
            source: sprite.source_region(),
            state: player.state(),
            changed,
        };

        if args.json {
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!(
                "tick {:>4} {:>8.1}ms  frame {:>3}  progress {:>7.2}  {:?}{}",
                line.tick,
                line.elapsed_ms,
                line.frame_index,
                line.frame_progress,
                line.state,
                if line.changed { "  *" } else { "" }
            );
        }

        if player.is_finished() {
            tracing::info!("Animation finished after {} ticks", tick);
            break;
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<SpriteConfig> {
    let mut config = match &args.config {
        Some(path) => SpriteConfig::load(path)?,
        None => SpriteConfig::default(),
    };

    if let Some(dir) = &args.assets {
        config.assets.asset_dir = dir.clone();
    }
    if let Some(dir) = &args.data {
        config.assets.data_dir = dir.clone();
    }
    if let Some(speed) = args.speed {
        config.playback.default_speed = speed;
    }
    if args.no_loop {
        config.playback.looping = false;
    }

    config.validate().map_err(SpriteError::InvalidArgument)?;
    Ok(config)
}
