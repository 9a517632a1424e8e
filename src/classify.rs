//! Rule-based mood classification.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. **Hype** - favorite genre, energy at or above `hype_min_energy`, or a
//!    hype keyword inside the genre
//! 2. **Chill** - energy at or below `chill_max_energy`, or a chill keyword
//!    inside the genre
//! 3. **Mixed** - everything else
//!
//! A song that satisfies both a Hype and a Chill rule is always Hype.

use crate::profile::Profile;
use crate::song::{Mood, Song};

/// Genre substrings that make a song Hype.
pub const HYPE_KEYWORDS: &[&str] = &["rock", "punk", "party"];

/// Genre substrings that make a song Chill.
pub const CHILL_KEYWORDS: &[&str] = &["lofi", "ambient", "sleep"];

/// Pick the mood of a normalized song under `profile`.
///
/// Keyword matching is plain substring containment, so `"post-punk"` counts
/// as punk and `"rockabilly"` as rock.
///
/// # Examples
///
/// ```
/// use moodmix::classify::classify_song;
/// use moodmix::profile::Profile;
/// use moodmix::song::{Energy, Mood, Song};
///
/// let song = Song {
///     genre: "lofi".into(),
///     energy: Energy::from(8_i64),
///     ..Song::default()
/// };
///
/// // High energy beats the chill keyword.
/// assert_eq!(classify_song(&song, &Profile::default()), Mood::Hype);
/// ```
#[must_use]
pub fn classify_song(song: &Song, profile: &Profile) -> Mood {
    let genre = song.genre.as_str();

    let is_favorite = profile
        .favorite_genre
        .as_deref()
        .is_some_and(|favorite| genre == favorite.to_lowercase());

    if is_favorite
        || song.energy.at_least(profile.hype_min_energy)
        || contains_any(genre, HYPE_KEYWORDS)
    {
        return Mood::Hype;
    }
    if song.energy.at_most(profile.chill_max_energy) || contains_any(genre, CHILL_KEYWORDS) {
        return Mood::Chill;
    }
    Mood::Mixed
}

fn contains_any(genre: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| genre.contains(keyword))
}
