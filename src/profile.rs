//! # Listening Profile
//!
//! A [`Profile`] holds the user-tunable thresholds that drive
//! [`crate::classify::classify_song`]. Thresholds are deliberately not
//! validated: a profile whose `hype_min_energy` is at or below
//! `chill_max_energy` is accepted as-is and the Hype rule simply wins.

use anyhow::{bail, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::song::value_to_text;

/// Energy at or above which a song is Hype.
pub const DEFAULT_HYPE_MIN_ENERGY: i64 = 7;

/// Energy at or below which a song is Chill.
pub const DEFAULT_CHILL_MAX_ENERGY: i64 = 3;

/// Classification parameters for one listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name. Not used by classification.
    pub name: Option<String>,
    pub hype_min_energy: i64,
    pub chill_max_energy: i64,
    /// Compared against the lower-cased genre; `None` disables the rule.
    pub favorite_genre: Option<String>,
    /// Reserved; not used by classification.
    pub include_mixed: Option<bool>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: None,
            hype_min_energy: DEFAULT_HYPE_MIN_ENERGY,
            chill_max_energy: DEFAULT_CHILL_MAX_ENERGY,
            favorite_genre: None,
            include_mixed: None,
        }
    }
}

impl Profile {
    /// Default thresholds with a favorite genre.
    #[must_use]
    pub fn with_favorite_genre(genre: impl Into<String>) -> Self {
        Self {
            favorite_genre: Some(genre.into()),
            ..Self::default()
        }
    }

    /// Build a profile from a loosely-typed JSON value.
    ///
    /// The value itself must be an object; anything else is a caller error.
    /// Inside the object, a recognized key holding the wrong type is logged
    /// and replaced by its default, and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodmix::profile::Profile;
    /// use serde_json::json;
    ///
    /// let profile = Profile::from_json_value(&json!({
    ///     "hype_min_energy": 8,
    ///     "favorite_genre": "Jazz",
    /// }))?;
    /// assert_eq!(profile.hype_min_energy, 8);
    /// assert_eq!(profile.chill_max_energy, 3);
    ///
    /// assert!(Profile::from_json_value(&json!(["not", "a", "profile"])).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            bail!("Profile must be a JSON object, got {}", json_kind(value));
        };

        let defaults = Self::default();
        Ok(Self {
            name: text_field(map, "name"),
            hype_min_energy: int_field(map, "hype_min_energy", defaults.hype_min_energy),
            chill_max_energy: int_field(map, "chill_max_energy", defaults.chill_max_energy),
            favorite_genre: text_field(map, "favorite_genre"),
            include_mixed: bool_field(map, "include_mixed"),
        })
    }
}

fn int_field(map: &Map<String, Value>, key: &str, default: i64) -> i64 {
    match map.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => value.as_i64().unwrap_or_else(|| {
            warn!(
                "Profile field `{key}' should be an integer, got {}; using {default}",
                json_kind(value)
            );
            default
        }),
    }
}

/// Text fields take any non-null value, rendered the same way song fields are.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            debug!("Profile field `{key}' is {}, reading it as text", json_kind(other));
            Some(value_to_text(other))
        }
    }
}

fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
    match map.get(key) {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
