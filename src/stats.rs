//! Descriptive statistics over a playlist grouping.

use crate::playlist::Playlists;
use crate::song::Song;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of a grouping. Computed on demand and never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistStats {
    pub total_songs: usize,
    pub hype_count: usize,
    pub chill_count: usize,
    pub mixed_count: usize,
    /// `hype_count / total_songs`, `0.0` for an empty grouping.
    pub hype_ratio: f64,
    /// Mean energy over every song, `0.0` for an empty grouping.
    pub avg_energy: f64,
    /// Empty when no song has an artist.
    pub top_artist: String,
    pub top_artist_count: usize,
}

/// Count, ratio and average across all three playlists.
///
/// # Examples
///
/// ```
/// use moodmix::playlist::Playlists;
/// use moodmix::stats::compute_playlist_stats;
///
/// let stats = compute_playlist_stats(&Playlists::default());
/// assert_eq!(stats.total_songs, 0);
/// assert_eq!(stats.hype_ratio, 0.0);
/// assert_eq!(stats.avg_energy, 0.0);
/// assert_eq!((stats.top_artist.as_str(), stats.top_artist_count), ("", 0));
/// ```
#[must_use]
pub fn compute_playlist_stats(playlists: &Playlists) -> PlaylistStats {
    let total = playlists.len();
    let hype_count = playlists.hype.len();

    #[allow(clippy::cast_precision_loss)]
    let (hype_ratio, avg_energy) = match total {
        0 => (0.0, 0.0),
        n => {
            let total_energy: f64 = playlists.iter().map(|song| song.energy.as_f64()).sum();
            (hype_count as f64 / n as f64, total_energy / n as f64)
        }
    };

    let (top_artist, top_artist_count) = most_common_artist(playlists.iter());

    PlaylistStats {
        total_songs: total,
        hype_count,
        chill_count: playlists.chill.len(),
        mixed_count: playlists.mixed.len(),
        hype_ratio,
        avg_energy,
        top_artist,
        top_artist_count,
    }
}

/// Most frequent non-empty artist and how often it appears.
///
/// On a tie the artist seen first wins. Returns `("", 0)` when no song has an
/// artist.
#[must_use]
pub fn most_common_artist<'a>(songs: impl IntoIterator<Item = &'a Song>) -> (String, usize) {
    // artist -> (count, first position)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, song) in songs.into_iter().enumerate() {
        if song.artist.is_empty() {
            continue;
        }
        tally.entry(song.artist.as_str()).or_insert((0, position)).0 += 1;
    }

    tally
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(artist, (count, _))| (artist.to_string(), count))
        .unwrap_or_default()
}
