//! # Song Records
//!
//! Two shapes of song live in this crate:
//!
//! - [`RawSong`] - whatever the caller handed us. Every field is an arbitrary
//!   JSON value and may be missing, mistyped or padded with whitespace.
//! - [`Song`] - the canonical record the rest of the pipeline works with.
//!
//! [`normalize_song`] is the only bridge between them. It never fails: a field
//! that cannot be understood degrades to a neutral value (empty text, zero
//! energy, no tags) instead of rejecting the record.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::fmt;

/// One of the three playlist buckets a song can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Hype,
    Chill,
    Mixed,
}

impl Mood {
    /// Every mood, in playlist order.
    pub const ALL: [Mood; 3] = [Mood::Hype, Mood::Chill, Mood::Mixed];

    /// Playlist name as shown to users and written to JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mood::Hype => "Hype",
            Mood::Chill => "Chill",
            Mood::Mixed => "Mixed",
        }
    }

    /// Exact, case-sensitive lookup of a playlist name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == label)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A song's energy, kept exactly as given: integers stay integers, `3.5` stays
/// `3.5`, and nothing is clamped.
///
/// Thresholds are integers, so comparisons go through [`Energy::at_least`]
/// and [`Energy::at_most`] rather than a lossy conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Energy(Number);

impl Energy {
    /// Exact integer value, if the energy is an integer that fits `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Value as a float, for averaging.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    /// `self >= threshold`
    #[must_use]
    pub fn at_least(&self, threshold: i64) -> bool {
        self.cmp_threshold(threshold).is_ge()
    }

    /// `self <= threshold`
    #[must_use]
    pub fn at_most(&self, threshold: i64) -> bool {
        self.cmp_threshold(threshold).is_le()
    }

    fn cmp_threshold(&self, threshold: i64) -> Ordering {
        if let Some(value) = self.0.as_i64() {
            value.cmp(&threshold)
        } else if self.0.is_u64() {
            // Only unsigned integers above i64::MAX get here.
            Ordering::Greater
        } else {
            #[allow(clippy::cast_precision_loss)]
            let threshold = threshold as f64;
            self.as_f64().partial_cmp(&threshold).unwrap_or(Ordering::Equal)
        }
    }
}

impl Default for Energy {
    fn default() -> Self {
        Self(Number::from(0_i64))
    }
}

impl From<i64> for Energy {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl From<Number> for Energy {
    fn from(number: Number) -> Self {
        Self(number)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A song exactly as it arrived, before any coercion.
///
/// Unknown keys are ignored when deserializing and absent keys become
/// [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSong {
    pub title: Value,
    pub artist: Value,
    pub genre: Value,
    pub energy: Value,
    pub tags: Value,
    /// Only read by [`crate::history::raw_history_summary`].
    pub mood: Value,
}

/// A normalized song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Always trimmed and lower-cased.
    pub genre: String,
    /// Passed through from the input without clamping or rounding.
    pub energy: Energy,
    pub tags: Vec<String>,
    /// Set by [`crate::playlist::build_playlists`]; `None` until classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Coerce a raw song record into canonical form.
///
/// # Coercion Rules
///
/// - `title`, `artist`: text, trimmed, case kept
/// - `genre`: text, trimmed, lower-cased
/// - `energy`: numbers pass through untouched, floats included; text is parsed
///   as an integer, `0` on failure; anything else is `0`
/// - `tags`: one string becomes a one-element list, a list is kept in order,
///   anything else is an empty list
///
/// The returned song has no mood; classification happens later.
///
/// # Examples
///
/// ```
/// use moodmix::song::{normalize_song, RawSong};
/// use serde_json::json;
///
/// let raw: RawSong = serde_json::from_value(json!({
///     "title": "  Nightcall ",
///     "genre": " SynthWave",
///     "energy": "6",
///     "tags": "night",
/// }))?;
///
/// let song = normalize_song(&raw);
/// assert_eq!(song.title, "Nightcall");
/// assert_eq!(song.genre, "synthwave");
/// assert_eq!(song.energy.as_i64(), Some(6));
/// assert_eq!(song.tags, vec!["night".to_string()]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn normalize_song(raw: &RawSong) -> Song {
    Song {
        title: value_to_text(&raw.title).trim().to_string(),
        artist: value_to_text(&raw.artist).trim().to_string(),
        genre: value_to_text(&raw.genre).trim().to_lowercase(),
        energy: coerce_energy(&raw.energy),
        tags: coerce_tags(&raw.tags),
        mood: None,
    }
}

/// Render any JSON value as text.
///
/// Strings are returned verbatim, `null` is empty, numbers and booleans use
/// their usual spelling, and arrays/objects fall back to compact JSON.
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn coerce_energy(value: &Value) -> Energy {
    match value {
        Value::Number(number) => Energy::from(number.clone()),
        Value::String(text) => parse_energy(text.trim()).unwrap_or_else(|| {
            log::trace!("Energy `{text}' is not an integer, using 0");
            Energy::default()
        }),
        _ => Energy::default(),
    }
}

fn parse_energy(text: &str) -> Option<Energy> {
    text.parse::<i64>()
        .map(Number::from)
        .or_else(|_| text.parse::<u64>().map(Number::from))
        .ok()
        .map(Energy::from)
}

fn coerce_tags(value: &Value) -> Vec<String> {
    match value {
        Value::String(tag) => vec![tag.clone()],
        Value::Array(items) => items.iter().map(value_to_text).collect(),
        _ => Vec::new(),
    }
}
