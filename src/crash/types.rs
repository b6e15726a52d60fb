//! Crash archive type definitions

use crate::config::{CompatibilityShim, GameProfile};
use crate::error::LauncherResult;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the manifest stored at the root of every crash archive
pub const REPORT_ENTRY: &str = "report.json";

/// Prefix for save files inside the archive
pub const SAVES_PREFIX: &str = "saves";

/// Extension procdump gives its dumps
pub const DUMP_EXTENSION: &str = ".dmp";

/// Manifest describing one crash. Field names are what the bug tracker tooling reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashReport {
    #[serde(rename = "ddraw")]
    pub shim: String,
    #[serde(rename = "Game")]
    pub game: String,
    pub platform: String,
    #[serde(rename = "skippedFiles", default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_files: Vec<String>,
}

/// What ended up in a finished archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub path: PathBuf,
    /// Entry names written, in order, excluding the report
    pub entries: Vec<String>,
    /// Candidates that existed but couldn't be read into the archive
    pub skipped_files: Vec<String>,
}

/// Destination for crash evidence produced by a failed trial
pub trait CrashSink {
    fn archive(
        &mut self,
        profile: &GameProfile,
        shim: &CompatibilityShim,
        platform: &str,
        crash_files: &[String],
    ) -> LauncherResult<ArchiveOutcome>;
}
