use crate::paths::{PATH_CRASHLOGS, PATH_DDRAWS, PATH_PROCDUMP, STAGED_SHIM_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{default_env, default_games, default_shims};

/// A supported game: the binary we look for and the files that make up its saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    pub binary: String,
    /// Glob patterns relative to the game directory (e.g. "common/save/*")
    #[serde(default)]
    pub save_files: Vec<String>,
}

impl GameProfile {
    pub fn new(binary: &str, save_files: &[&str]) -> Self {
        Self {
            binary: binary.to_string(),
            save_files: save_files.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A DirectDraw replacement library. Table order is trial order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityShim {
    pub filename: String,
    /// Values of `std::env::consts::OS` this shim can be tried on
    pub platforms: Vec<String>,
}

impl CompatibilityShim {
    pub fn new(filename: &str, platforms: &[&str]) -> Self {
        Self {
            filename: filename.to_string(),
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn supports(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

/// Filesystem layout used by a launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the game binary; shims are staged and saves resolved here
    pub game_dir: PathBuf,
    pub crash_logs: PathBuf,
    pub shims_dir: PathBuf,
    pub wrapper: PathBuf,
    pub staged_shim: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            game_dir: PathBuf::from("."),
            crash_logs: PATH_CRASHLOGS.clone(),
            shims_dir: PATH_DDRAWS.clone(),
            wrapper: PATH_PROCDUMP.clone(),
            staged_shim: STAGED_SHIM_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Knobs for the dump-capturing wrapper process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Injected on top of the inherited environment, in order
    pub env: Vec<EnvVar>,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self { env: default_env() }
    }
}

/// Main launcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default = "default_games")]
    pub games: Vec<GameProfile>,
    #[serde(default = "default_shims")]
    pub shims: Vec<CompatibilityShim>,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub wrapper: WrapperConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfig {
            games: default_games(),
            shims: default_shims(),
            paths: PathsConfig::default(),
            wrapper: WrapperConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Reject configurations that can never launch anything
    pub fn validate(&self) -> Result<(), String> {
        if self.games.is_empty() {
            return Err("no game profiles configured".to_string());
        }
        if self.shims.is_empty() {
            return Err("no compatibility shims configured".to_string());
        }
        if let Some(game) = self.games.iter().find(|g| g.binary.trim().is_empty()) {
            return Err(format!("game profile with empty binary name ({:?})", game.save_files));
        }
        if let Some(shim) = self.shims.iter().find(|s| s.platforms.is_empty()) {
            return Err(format!("shim {} lists no platforms", shim.filename));
        }
        Ok(())
    }
}
