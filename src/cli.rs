//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Moodmix using Clap derive
//! macros. Every command reads song files, runs one step of the playlist
//! pipeline and prints the result as JSON on stdout.
//!
//! ## Commands
//!
//! - `build`: Group a song file into Hype, Chill and Mixed playlists
//! - `stats`: Print counts, ratios and the top artist of a grouping
//! - `merge`: Group two song files and merge the playlists
//! - `search`: Find songs by a field, ignoring case
//! - `pick`: Pick a random Hype and/or Chill song
//! - `history`: Count the moods recorded in a listening history
//!
//! ## Examples
//!
//! ```bash
//! moodmix build songs.json
//! moodmix --profile night.json stats songs.json
//! moodmix search songs.json "daft" --field artist
//! moodmix pick songs.json --mode chill
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodmix")]
#[command(about = "Moodmix: sort songs into Hype, Chill and Mixed playlists")]
#[command(version)]
pub struct Args {
    /// Profile JSON file with classification thresholds
    ///
    /// Defaults to `profile.json` in the moodmix config directory, or the
    /// built-in profile (hype at energy 7+, chill at 3 or less) if that file
    /// does not exist.
    #[arg(long, global = true, env = "MOODMIX_PROFILE")]
    pub profile: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
///
/// Every `SONGS` argument is a JSON file holding an array of song objects with
/// any of the keys `title`, `artist`, `genre`, `energy`, `tags` and `mood`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Group songs into playlists
    Build {
        /// Song file to classify
        songs: PathBuf,
    },

    /// Show statistics for the grouped songs
    ///
    /// Prints total and per-playlist counts, the hype ratio, average energy
    /// and the most frequent artist.
    Stats {
        /// Song file to classify
        songs: PathBuf,
    },

    /// Group two song files and merge the results
    ///
    /// Each playlist of the first file is followed by the same playlist of
    /// the second. Duplicates are kept.
    Merge {
        /// First song file
        first: PathBuf,
        /// Second song file
        second: PathBuf,
    },

    /// Search the grouped songs
    Search {
        /// Song file to classify
        songs: PathBuf,

        /// Text to look for (case-insensitive substring)
        ///
        /// An empty query returns every song.
        query: String,

        /// Field to search: title, artist, genre, energy, tags or mood
        #[arg(short, long, default_value = crate::query::DEFAULT_SEARCH_FIELD)]
        field: String,
    },

    /// Pick a random song
    ///
    /// Mixed songs are never picked. Prints `null` when nothing is eligible.
    Pick {
        /// Song file to classify
        songs: PathBuf,

        /// "hype", "chill", or anything else for both
        #[arg(short, long, default_value = "any")]
        mode: String,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Count moods in a listening history
    ///
    /// Reads the `mood` field of each entry as-is; entries without a
    /// recognized mood count as Mixed.
    History {
        /// History file (song objects with a `mood` key)
        songs: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Usage: moodmix completion bash > ~/.local/share/bash-completion/completions/moodmix
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
