//! Sorts songs into Hype, Chill and Mixed playlists from a listening profile.
//!
//! Core modules, in pipeline order:
//! - [`song`] - Raw and normalized song records, normalization
//! - [`classify`] - Rule-based mood classification
//! - [`playlist`] - Grouping into playlists and merging groupings
//! - [`stats`] - Counts, ratios, average energy and top artist
//! - [`query`] - Search and lucky pick
//! - [`history`] - Mood tallies over listening history
//!
//! ### Supporting Modules
//!
//! - [`profile`] - Classification thresholds
//! - [`config`] - Profile and song file loading
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use moodmix::{playlist, profile::Profile, query, song::RawSong, stats};
//! use serde_json::json;
//!
//! let songs: Vec<RawSong> = serde_json::from_value(json!([
//!     { "title": "Smells Like Teen Spirit", "artist": "Nirvana", "genre": "rock", "energy": 5 },
//!     { "title": "Snowfall", "artist": "Øneheart", "genre": "lofi", "energy": 1 },
//!     { "title": "So What", "artist": "Miles Davis", "genre": "jazz", "energy": 5 },
//! ]))?;
//!
//! let playlists = playlist::build_playlists(&songs, &Profile::default());
//! let stats = stats::compute_playlist_stats(&playlists);
//! assert_eq!(stats.total_songs, 3);
//! assert_eq!(stats.hype_count, 1);
//!
//! let pick = query::lucky_pick(&playlists, query::PickMode::Chill);
//! assert_eq!(pick.map(|s| s.title.as_str()), Some("Snowfall"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! The pipeline itself never fails: malformed song fields degrade to empty
//! text, zero energy or no tags, and empty groupings produce zeroed
//! statistics. Only file loading in [`config`] and
//! [`profile::Profile::from_json_value`] return `Result<T, anyhow::Error>`.
//!
//! ## Logging
//!
//! Library code logs through the `log` facade: `debug` for grouping and
//! merge summaries, `trace` for each classified song, `warn` for skipped or
//! mistyped input.

pub mod classify;
pub mod cli;
pub mod completion;
pub mod config;
pub mod history;
pub mod playlist;
pub mod profile;
pub mod query;
pub mod song;
pub mod stats;
