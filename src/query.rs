//! # Query Helpers
//!
//! Search and random selection over grouped songs.
//!
//! - [`search_songs`] - case-insensitive substring match on one field
//! - [`lucky_pick`] - uniform random pick from the Hype and/or Chill playlist
//!
//! The Mixed playlist is never a lucky-pick candidate.

use crate::playlist::Playlists;
use crate::song::Song;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// Field searched when the caller does not name one.
pub const DEFAULT_SEARCH_FIELD: &str = "artist";

/// Which playlists a lucky pick may draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    Hype,
    Chill,
    /// Hype and Chill together.
    #[default]
    Any,
}

impl PickMode {
    /// `"hype"` and `"chill"` select their playlist; any other text means
    /// [`PickMode::Any`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "hype" => PickMode::Hype,
            "chill" => PickMode::Chill,
            _ => PickMode::Any,
        }
    }
}

impl Song {
    /// Text of a named field, as used by [`search_songs`].
    ///
    /// Tags are joined with `", "`; an unknown field name reads as empty text.
    #[must_use]
    pub fn field_text(&self, field: &str) -> String {
        match field {
            "title" => self.title.clone(),
            "artist" => self.artist.clone(),
            "genre" => self.genre.clone(),
            "energy" => self.energy.to_string(),
            "tags" => self.tags.join(", "),
            "mood" => self.mood.map(|mood| mood.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// Songs whose `field` contains `query`, ignoring case.
///
/// An empty query returns every song. Otherwise the query is trimmed, and
/// songs whose field is empty never match. Input order is kept.
///
/// # Examples
///
/// ```
/// use moodmix::query::{search_songs, DEFAULT_SEARCH_FIELD};
/// use moodmix::song::Song;
///
/// let songs = vec![
///     Song { artist: "Daft Punk".into(), ..Song::default() },
///     Song { artist: "Air".into(), ..Song::default() },
/// ];
///
/// let hits = search_songs(&songs, "PUNK", DEFAULT_SEARCH_FIELD);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(search_songs(&songs, "", "artist"), songs);
/// ```
#[must_use]
pub fn search_songs(songs: &[Song], query: &str, field: &str) -> Vec<Song> {
    if query.is_empty() {
        return songs.to_vec();
    }

    let needle = query.trim().to_lowercase();
    songs
        .iter()
        .filter(|song| {
            let haystack = song.field_text(field).to_lowercase();
            !haystack.is_empty() && haystack.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Pick a random song for `mode` using the thread-local generator.
///
/// Returns `None` when the eligible playlists are empty.
#[must_use]
pub fn lucky_pick(playlists: &Playlists, mode: PickMode) -> Option<&Song> {
    lucky_pick_with(playlists, mode, &mut thread_rng())
}

/// [`lucky_pick`] with a caller-supplied generator, for reproducible picks.
pub fn lucky_pick_with<'a, R: Rng + ?Sized>(
    playlists: &'a Playlists,
    mode: PickMode,
    rng: &mut R,
) -> Option<&'a Song> {
    match mode {
        PickMode::Hype => playlists.hype.choose(rng),
        PickMode::Chill => playlists.chill.choose(rng),
        PickMode::Any => {
            let (hype, chill) = (&playlists.hype, &playlists.chill);
            let total = hype.len() + chill.len();
            if total == 0 {
                return None;
            }
            let index = rng.gen_range(0..total);
            hype.get(index).or_else(|| chill.get(index - hype.len()))
        }
    }
}
