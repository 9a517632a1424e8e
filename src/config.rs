//! # Configuration Module
//!
//! This module locates and loads the inputs Moodmix works on: the listening
//! profile and song files. Loading happens only here; the rest of the crate
//! works on in-memory values and never touches the filesystem.
//!
//! ## Profile Location
//!
//! Without an explicit `--profile`, Moodmix looks for `profile.json` in the
//! platform-standard config directory:
//! - Linux: `~/.config/moodmix/profile.json`
//! - macOS: `~/Library/Application Support/moodmix/profile.json`
//! - Windows: `%APPDATA%\moodmix\profile.json`
//!
//! If that file does not exist the built-in [`Profile::default`] is used.

use crate::profile::Profile;
use crate::song::RawSong;
use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform-appropriate config directory for Moodmix.
///
/// The directory is not created; Moodmix only ever reads from it.
///
/// # Errors
///
/// Returns an error if the system config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow!(
            "Could not determine system config directory. Please pass --profile explicitly."
        )
    })?;

    Ok(config_dir.join("moodmix"))
}

/// Returns the default profile file path, `<config dir>/moodmix/profile.json`.
///
/// # Errors
///
/// Same as [`get_config_dir`].
pub fn get_profile_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("profile.json"))
}

/// Load a profile.
///
/// An explicit `path` must exist and hold a JSON object. Without one, the
/// default location is tried and a missing file yields [`Profile::default`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or does not
/// contain a JSON object.
pub fn load_profile(path: Option<&Path>) -> Result<Profile> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match get_profile_path() {
            Ok(default_path) if default_path.exists() => default_path,
            _ => {
                debug!("No profile file found, using defaults");
                return Ok(Profile::default());
            }
        },
    };

    let value = read_json(&path)?;
    let profile = Profile::from_json_value(&value)
        .with_context(|| format!("Invalid profile in {}", path.display()))?;

    info!("Loaded profile from {}", path.display());
    Ok(profile)
}

/// Load raw songs from a JSON array file.
///
/// Entries that are not JSON objects are skipped with a warning. Objects are
/// accepted whatever their field types; coercion happens during grouping.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or its top
/// level is not an array.
pub fn load_songs(path: &Path) -> Result<Vec<RawSong>> {
    let Value::Array(entries) = read_json(path)? else {
        bail!("Expected a JSON array of songs in {}", path.display());
    };

    let mut songs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!("Skipping entry {index} in {}: not a JSON object", path.display());
            continue;
        }
        // Every RawSong field is a Value with a default, so objects always fit.
        let song = serde_json::from_value(entry)
            .with_context(|| format!("Failed to read song entry {index} in {}", path.display()))?;
        songs.push(song);
    }

    debug!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Explicit profile file; `None` means the default location.
    pub profile_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Create configuration with an explicit profile path
    pub fn with_profile_path(profile_path: PathBuf) -> Self {
        Self {
            profile_path: Some(profile_path),
        }
    }

    /// Resolve the profile this configuration points at.
    ///
    /// # Errors
    ///
    /// See [`load_profile`].
    pub fn profile(&self) -> Result<Profile> {
        load_profile(self.profile_path.as_deref())
    }
}
