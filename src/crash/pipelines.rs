//! Crash archival pipeline

use crate::config::{CompatibilityShim, GameProfile};
use crate::error::{LauncherError, LauncherResult};
use crate::fileops::{resolve_glob, to_slash_path};

use std::path::PathBuf;
use zip::ZipWriter;

use super::operations::{add_bytes_to_zip, add_file_to_zip, create_archive_file};
use super::types::{ArchiveOutcome, CrashReport, CrashSink, REPORT_ENTRY, SAVES_PREFIX};

/// Packs crash dumps and save files into a zip next to the dumps
#[derive(Debug, Clone)]
pub struct CrashArchiver {
    /// Where procdump writes dumps and where archives are created
    pub crash_dir: PathBuf,
    /// Save-file globs are resolved relative to this directory
    pub save_root: PathBuf,
}

impl CrashArchiver {
    pub fn new(crash_dir: PathBuf, save_root: PathBuf) -> Self {
        Self { crash_dir, save_root }
    }

    /// Archive `crash_files` (names inside the crash directory) plus the profile's saves.
    ///
    /// Dumps are deleted afterwards whether or not they made it into the
    /// archive. Individual files that can't be read end up in the report's
    /// skipped list; only failures of the archive itself are returned as errors.
    pub fn archive_crash(
        &self,
        profile: &GameProfile,
        shim_name: &str,
        platform: &str,
        crash_files: &[String],
    ) -> LauncherResult<ArchiveOutcome> {
        let (path, file) = create_archive_file(&self.crash_dir)?;
        tracing::debug!("Writing crash archive {}", path.display());

        let mut zip = ZipWriter::new(file);
        let mut entries = Vec::new();
        let mut skipped_files = Vec::new();

        for crash_filename in crash_files {
            let crash_path = self.crash_dir.join(crash_filename);
            match add_file_to_zip(&mut zip, &crash_path, crash_filename) {
                Ok(()) => entries.push(crash_filename.clone()),
                Err(e) => {
                    tracing::warn!("Skipped file {}: {}", crash_path.display(), e);
                    skipped_files.push(to_slash_path(&crash_path));
                }
            }
            let _ = std::fs::remove_file(&crash_path);
        }

        for pattern in &profile.save_files {
            let matches = match resolve_glob(&self.save_root, pattern) {
                Ok(matches) => matches,
                Err(e) => {
                    tracing::debug!("Ignoring save pattern {}: {}", pattern, e);
                    continue;
                }
            };

            for rel_path in matches {
                let rel = to_slash_path(&rel_path);
                let target = format!("{}/{}", SAVES_PREFIX, rel);
                match add_file_to_zip(&mut zip, &self.save_root.join(&rel_path), &target) {
                    Ok(()) => entries.push(target),
                    Err(e) => {
                        tracing::warn!("Skipped file {}: {}", rel, e);
                        skipped_files.push(rel);
                    }
                }
            }
        }

        let report = CrashReport {
            shim: shim_name.to_string(),
            game: profile.binary.clone(),
            platform: platform.to_string(),
            skipped_files,
        };
        let report_json = serde_json::to_vec_pretty(&report)?;
        add_bytes_to_zip(&mut zip, REPORT_ENTRY, &report_json)?;

        zip.finish()
            .map_err(|e| LauncherError::Archive(format!("failed to finalize {}: {}", path.display(), e)))?;

        Ok(ArchiveOutcome {
            path,
            entries,
            skipped_files: report.skipped_files,
        })
    }
}

impl CrashSink for CrashArchiver {
    fn archive(
        &mut self,
        profile: &GameProfile,
        shim: &CompatibilityShim,
        platform: &str,
        crash_files: &[String],
    ) -> LauncherResult<ArchiveOutcome> {
        self.archive_crash(profile, &shim.filename, platform, crash_files)
    }
}
