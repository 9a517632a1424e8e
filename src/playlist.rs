//! # Playlist Grouping
//!
//! Sorts songs into the three fixed playlists and merges groupings.
//!
//! A [`Playlists`] value always has all three buckets, even when every one of
//! them is empty. Grouping and merging build fresh values; nothing here
//! mutates its inputs.

use crate::classify::classify_song;
use crate::profile::Profile;
use crate::song::{normalize_song, Mood, RawSong, Song};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Songs split by mood. Order within each bucket follows input order.
///
/// Serialized as `{"Hype": [...], "Chill": [...], "Mixed": [...]}`. When
/// deserializing, a missing bucket is empty and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlists {
    #[serde(rename = "Hype")]
    pub hype: Vec<Song>,
    #[serde(rename = "Chill")]
    pub chill: Vec<Song>,
    #[serde(rename = "Mixed")]
    pub mixed: Vec<Song>,
}

impl Playlists {
    /// Songs in the bucket for `mood`.
    #[must_use]
    pub fn get(&self, mood: Mood) -> &[Song] {
        match mood {
            Mood::Hype => &self.hype,
            Mood::Chill => &self.chill,
            Mood::Mixed => &self.mixed,
        }
    }

    fn bucket_mut(&mut self, mood: Mood) -> &mut Vec<Song> {
        match mood {
            Mood::Hype => &mut self.hype,
            Mood::Chill => &mut self.chill,
            Mood::Mixed => &mut self.mixed,
        }
    }

    /// Number of songs across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hype.len() + self.chill.len() + self.mixed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every song, Hype first, then Chill, then Mixed.
    pub fn iter(&self) -> impl Iterator<Item = &Song> + '_ {
        self.hype.iter().chain(&self.chill).chain(&self.mixed)
    }

    fn push(&mut self, mut song: Song, mood: Mood) {
        song.mood = Some(mood);
        self.bucket_mut(mood).push(song);
    }
}

/// Normalize, classify and group raw songs.
///
/// # Examples
///
/// ```
/// use moodmix::playlist::build_playlists;
/// use moodmix::profile::Profile;
/// use moodmix::song::{Mood, RawSong};
/// use serde_json::json;
///
/// let songs: Vec<RawSong> = serde_json::from_value(json!([
///     { "title": "Song A", "genre": "rock", "energy": 5 },
///     { "title": "Song B", "genre": "lofi", "energy": 1 },
///     { "title": "Song C", "genre": "jazz", "energy": 5 },
/// ]))?;
///
/// let playlists = build_playlists(&songs, &Profile::default());
/// assert_eq!(playlists.hype[0].title, "Song A");
/// assert_eq!(playlists.chill[0].title, "Song B");
/// assert_eq!(playlists.mixed[0].mood, Some(Mood::Mixed));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn build_playlists(songs: &[RawSong], profile: &Profile) -> Playlists {
    group(songs.iter().map(normalize_song), profile)
}

/// Regroup songs that are already normalized, e.g. under a different profile.
///
/// Any mood the songs carry is discarded and recomputed.
#[must_use]
pub fn classify_songs(songs: &[Song], profile: &Profile) -> Playlists {
    group(songs.iter().cloned(), profile)
}

fn group(songs: impl Iterator<Item = Song>, profile: &Profile) -> Playlists {
    let mut playlists = Playlists::default();

    for song in songs {
        let mood = classify_song(&song, profile);
        trace!("Classified `{}' ({}, energy {}) as {mood}", song.title, song.genre, song.energy);
        playlists.push(song, mood);
    }

    debug!(
        "Grouped {} songs: {} hype, {} chill, {} mixed",
        playlists.len(),
        playlists.hype.len(),
        playlists.chill.len(),
        playlists.mixed.len()
    );
    playlists
}

/// Concatenate two groupings bucket by bucket, `a` before `b`.
///
/// Duplicates are kept.
#[must_use]
pub fn merge_playlists(a: &Playlists, b: &Playlists) -> Playlists {
    let concat = |mood: Mood| [a.get(mood), b.get(mood)].concat();

    let merged = Playlists {
        hype: concat(Mood::Hype),
        chill: concat(Mood::Chill),
        mixed: concat(Mood::Mixed),
    };
    debug!("Merged {} + {} songs into {}", a.len(), b.len(), merged.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_songs(value: serde_json::Value) -> Vec<RawSong> {
        serde_json::from_value(value).expect("test songs should deserialize")
    }

    fn sample() -> Vec<RawSong> {
        raw_songs(json!([
            { "title": "Riot", "artist": "The Loud", "genre": "Punk", "energy": 9 },
            { "title": "Drift", "artist": "Haze", "genre": "ambient", "energy": "2" },
            { "title": "Swing", "artist": "Trio", "genre": "jazz", "energy": 5 },
            { "title": "Anthem", "artist": "The Loud", "genre": "pop", "energy": 8 },
        ]))
    }

    #[test]
    fn test_empty_input_has_three_empty_buckets() {
        let playlists = build_playlists(&[], &Profile::default());

        assert!(playlists.is_empty());
        for mood in Mood::ALL {
            assert!(playlists.get(mood).is_empty());
        }

        let json = serde_json::to_value(&playlists).unwrap();
        assert_eq!(json, json!({ "Hype": [], "Chill": [], "Mixed": [] }));
    }

    #[test]
    fn test_grouping_preserves_input_order() {
        let playlists = build_playlists(&sample(), &Profile::default());

        let hype: Vec<_> = playlists.hype.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(hype, ["Riot", "Anthem"]);
        assert_eq!(playlists.chill[0].title, "Drift");
        assert_eq!(playlists.mixed[0].title, "Swing");
    }

    #[test]
    fn test_every_song_lands_in_exactly_one_bucket() {
        let songs = sample();
        let playlists = build_playlists(&songs, &Profile::default());

        assert_eq!(playlists.len(), songs.len());
        for mood in Mood::ALL {
            assert!(playlists.get(mood).iter().all(|s| s.mood == Some(mood)));
        }
    }

    #[test]
    fn test_songs_are_normalized_when_grouped() {
        let playlists = build_playlists(&sample(), &Profile::default());

        assert_eq!(playlists.hype[0].genre, "punk");
        assert_eq!(playlists.chill[0].energy.as_i64(), Some(2));
    }

    #[test]
    fn test_fractional_energy_is_grouped_as_given() {
        let songs = raw_songs(json!([{ "title": "Half", "genre": "jazz", "energy": 3.5 }]));
        let playlists = build_playlists(&songs, &Profile::default());

        assert_eq!(playlists.mixed.len(), 1);
        assert_eq!(playlists.mixed[0].energy.as_f64(), 3.5);
        assert_eq!(serde_json::to_value(&playlists).unwrap()["Mixed"][0]["energy"], json!(3.5));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let songs = sample();
        let before = songs.clone();
        let _ = build_playlists(&songs, &Profile::default());
        assert_eq!(songs, before);
    }

    #[test]
    fn test_reclassification_recomputes_mood() {
        let playlists = build_playlists(&sample(), &Profile::default());
        let all: Vec<Song> = playlists.iter().cloned().collect();

        let jazz_fan = Profile::with_favorite_genre("jazz");
        let regrouped = classify_songs(&all, &jazz_fan);

        assert!(regrouped.mixed.is_empty());
        let swing = regrouped.hype.iter().find(|s| s.title == "Swing").unwrap();
        assert_eq!(swing.mood, Some(Mood::Hype));
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let profile = Profile::default();
        let a = build_playlists(&sample(), &profile);
        let b = build_playlists(
            &raw_songs(json!([{ "title": "Late", "genre": "rock", "energy": 1 }])),
            &profile,
        );

        let merged = merge_playlists(&a, &b);

        for mood in Mood::ALL {
            assert_eq!(merged.get(mood).len(), a.get(mood).len() + b.get(mood).len());
        }
        assert_eq!(merged.hype.last().unwrap().title, "Late");
        assert_eq!(merged.hype[0].title, "Riot");
    }

    #[test]
    fn test_merge_keeps_duplicates_and_inputs() {
        let a = build_playlists(&sample(), &Profile::default());
        let before = a.clone();

        let merged = merge_playlists(&a, &a);

        assert_eq!(merged.len(), a.len() * 2);
        assert_eq!(a, before);
    }

    #[test]
    fn test_deserialize_tolerates_missing_and_extra_keys() {
        let playlists: Playlists = serde_json::from_value(json!({
            "Hype": [{ "title": "x", "artist": "", "genre": "rock", "energy": 9, "tags": [] }],
            "Bonus": [],
        }))
        .unwrap();

        assert_eq!(playlists.hype.len(), 1);
        assert!(playlists.chill.is_empty());
        assert!(playlists.mixed.is_empty());
    }
}
