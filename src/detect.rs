//! Game detection
//!
//! Finds which supported game lives in the game directory.

use crate::config::GameProfile;
use crate::error::{LauncherError, LauncherResult};
use crate::fileops::list_dir_names;

use std::collections::HashSet;
use std::path::Path;

/// Pick the first profile, in table order, whose binary is among `entries`
pub fn match_profile<'a>(entries: &[String], profiles: &'a [GameProfile]) -> Option<&'a GameProfile> {
    let names: HashSet<&str> = entries.iter().map(String::as_str).collect();
    profiles.iter().find(|p| names.contains(p.binary.as_str()))
}

/// Scan `dir` (non-recursively) for a known game binary
pub fn detect_game(dir: &Path, profiles: &[GameProfile]) -> LauncherResult<GameProfile> {
    let entries = list_dir_names(dir)?;

    match match_profile(&entries, profiles) {
        Some(profile) => {
            tracing::info!("Detected game {}", profile.binary);
            Ok(profile.clone())
        }
        None => Err(LauncherError::GameNotFound(dir.to_path_buf())),
    }
}
