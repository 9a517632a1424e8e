//! # Moodmix
//!
//! Reads song files, sorts the songs into Hype, Chill and Mixed playlists
//! according to a listening profile, and prints playlists, statistics, search
//! results or a random pick as JSON.
//!
//! ## Usage
//!
//! ```bash
//! moodmix build songs.json
//! moodmix stats songs.json
//! moodmix merge monday.json tuesday.json
//! moodmix search songs.json "miles" --field artist
//! moodmix pick songs.json --mode hype --seed 4
//! moodmix history played.json
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodmix::cli::{self, Command};
use moodmix::config::{self, RuntimeConfig};
use moodmix::playlist::{build_playlists, merge_playlists, Playlists};
use moodmix::profile::Profile;
use moodmix::query::{lucky_pick, lucky_pick_with, search_songs, PickMode};
use moodmix::song::Song;
use moodmix::{completion, history, stats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;

/// Main entry point for the Moodmix application.
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodmix stats songs.json` - Grouping summaries
/// - `RUST_LOG=moodmix::playlist=trace moodmix build songs.json` - Every classification
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let runtime = args
        .profile
        .map_or_else(RuntimeConfig::default, RuntimeConfig::with_profile_path);

    match args.command {
        Command::Build { songs } => {
            let playlists = group_file(&songs, &runtime.profile()?)?;
            print_json(&playlists)?;
        }
        Command::Stats { songs } => {
            let playlists = group_file(&songs, &runtime.profile()?)?;
            print_json(&stats::compute_playlist_stats(&playlists))?;
        }
        Command::Merge { first, second } => {
            let profile = runtime.profile()?;
            let a = group_file(&first, &profile)?;
            let b = group_file(&second, &profile)?;
            print_json(&merge_playlists(&a, &b))?;
        }
        Command::Search { songs, query, field } => {
            let playlists = group_file(&songs, &runtime.profile()?)?;
            let all: Vec<Song> = playlists.iter().cloned().collect();
            let hits = search_songs(&all, &query, &field);
            info!("Search for `{query}' in {field} matched {} of {} songs", hits.len(), all.len());
            print_json(&hits)?;
        }
        Command::Pick { songs, mode, seed } => {
            let playlists = group_file(&songs, &runtime.profile()?)?;
            let mode = PickMode::from_name(&mode);
            let pick = match seed {
                Some(seed) => lucky_pick_with(&playlists, mode, &mut StdRng::seed_from_u64(seed)),
                None => lucky_pick(&playlists, mode),
            };
            print_json(&pick)?;
        }
        Command::History { songs } => {
            let history = config::load_songs(&songs)?;
            print_json(&history::raw_history_summary(&history))?;
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(shell),
                &mut cmd,
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

fn group_file(path: &Path, profile: &Profile) -> Result<Playlists> {
    let songs = config::load_songs(path)?;
    debug!("Classifying {} songs from {}", songs.len(), path.display());
    Ok(build_playlists(&songs, profile))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
