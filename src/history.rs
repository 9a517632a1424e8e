//! Mood tallies over listening history.

use crate::song::{value_to_text, Mood, RawSong, Song};
use serde::{Deserialize, Serialize};

/// How many songs of each mood were seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    #[serde(rename = "Hype")]
    pub hype: usize,
    #[serde(rename = "Chill")]
    pub chill: usize,
    #[serde(rename = "Mixed")]
    pub mixed: usize,
}

impl MoodCounts {
    fn record(&mut self, mood: Mood) {
        match mood {
            Mood::Hype => self.hype += 1,
            Mood::Chill => self.chill += 1,
            Mood::Mixed => self.mixed += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.hype + self.chill + self.mixed
    }
}

/// Tally classified songs; a song without a mood counts as Mixed.
#[must_use]
pub fn history_summary(history: &[Song]) -> MoodCounts {
    history.iter().fold(MoodCounts::default(), |mut counts, song| {
        counts.record(song.mood.unwrap_or(Mood::Mixed));
        counts
    })
}

/// Tally raw records by their free-form `mood` field.
///
/// Only the exact names `Hype`, `Chill` and `Mixed` are recognized; a missing
/// or unrecognized mood counts as Mixed.
///
/// ```
/// use moodmix::history::raw_history_summary;
/// use moodmix::song::RawSong;
/// use serde_json::json;
///
/// let history: Vec<RawSong> =
///     serde_json::from_value(json!([{ "mood": "Hype" }, { "mood": "Unknown" }]))?;
///
/// let counts = raw_history_summary(&history);
/// assert_eq!((counts.hype, counts.chill, counts.mixed), (1, 0, 1));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn raw_history_summary(history: &[RawSong]) -> MoodCounts {
    history.iter().fold(MoodCounts::default(), |mut counts, song| {
        let mood = Mood::from_label(&value_to_text(&song.mood)).unwrap_or(Mood::Mixed);
        counts.record(mood);
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_history_starts_at_zero() {
        assert_eq!(history_summary(&[]), MoodCounts::default());
        assert_eq!(raw_history_summary(&[]), MoodCounts::default());

        let json = serde_json::to_value(MoodCounts::default()).unwrap();
        assert_eq!(json, json!({ "Hype": 0, "Chill": 0, "Mixed": 0 }));
    }

    #[test]
    fn test_classified_songs_are_tallied() {
        let history: Vec<Song> = [Some(Mood::Hype), Some(Mood::Chill), Some(Mood::Hype), None]
            .into_iter()
            .map(|mood| Song { mood, ..Song::default() })
            .collect();

        let counts = history_summary(&history);

        assert_eq!(counts, MoodCounts { hype: 2, chill: 1, mixed: 1 });
        assert_eq!(counts.total(), history.len());
    }

    #[test]
    fn test_unknown_raw_moods_count_as_mixed() {
        let history: Vec<RawSong> = serde_json::from_value(json!([
            { "mood": "Chill" },
            { "mood": "hype" },
            { "mood": 3 },
            { "title": "no mood" },
        ]))
        .unwrap();

        assert_eq!(raw_history_summary(&history), MoodCounts { hype: 0, chill: 1, mixed: 3 });
    }
}
