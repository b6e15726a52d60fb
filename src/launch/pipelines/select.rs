//! Shim selection pipeline

use crate::config::{CompatibilityShim, GameProfile, PathsConfig};
use crate::crash::{ArchiveOutcome, CrashSink, DUMP_EXTENSION};
use crate::fileops::find_files_modified_after;

use std::time::SystemTime;

use super::super::operations::stage_shim;
use super::super::types::{
    GameWrapper, RunOutcome, Selection, TrialOutcome, TrialRecord, WrapperVerdict,
};

/// Tries shims one after another until the game survives a run
pub struct CompatibilityRunner<'a, W: GameWrapper, S: CrashSink> {
    paths: &'a PathsConfig,
    wrapper: W,
    sink: S,
}

impl<'a, W: GameWrapper, S: CrashSink> CompatibilityRunner<'a, W, S> {
    pub fn new(paths: &'a PathsConfig, wrapper: W, sink: S) -> Self {
        Self {
            paths,
            wrapper,
            sink,
        }
    }

    #[cfg(test)]
    pub fn wrapper(&self) -> &W {
        &self.wrapper
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `profile` with each candidate applicable to `platform`, in order.
    ///
    /// Stops at the first shim whose trial doesn't crash. `Selection::working`
    /// is `None` when every applicable shim failed or none applied.
    pub fn select_working_shim(
        &mut self,
        profile: &GameProfile,
        candidates: &[CompatibilityShim],
        platform: &str,
    ) -> Selection {
        let mut selection = Selection::default();

        for shim in candidates.iter().filter(|s| s.supports(platform)) {
            let record = self.run_trial(profile, shim, platform);
            let passed = record.outcome == TrialOutcome::Passed;
            selection.trials.push(record);

            if passed {
                tracing::info!("{} runs fine with {}", profile.binary, shim.filename);
                selection.working = Some(shim.clone());
                break;
            }
        }

        if selection.trials.is_empty() {
            tracing::warn!("No compatibility shim applies to platform {}", platform);
        }

        selection
    }

    fn run_trial(
        &mut self,
        profile: &GameProfile,
        shim: &CompatibilityShim,
        platform: &str,
    ) -> TrialRecord {
        tracing::info!("Running with ddraw variant {}...", shim.filename);

        if let Err(e) = stage_shim(self.paths, shim) {
            tracing::warn!("{}", e);
            return TrialRecord {
                shim: shim.clone(),
                outcome: TrialOutcome::StagingFailed(e.to_string()),
            };
        }

        let started = SystemTime::now();
        let verdict = self.wrapper.run(profile);
        let run = self.collect_run_outcome(&verdict, started);

        let outcome = if run.success {
            TrialOutcome::Passed
        } else {
            let archive = self.report_crash(profile, shim, platform, &run, &verdict);
            TrialOutcome::Crashed {
                run,
                verdict,
                archive,
            }
        };

        self.wrapper.terminate(profile);

        TrialRecord {
            shim: shim.clone(),
            outcome,
        }
    }

    fn collect_run_outcome(&self, verdict: &WrapperVerdict, started: SystemTime) -> RunOutcome {
        if !verdict.crashed() {
            return RunOutcome {
                success: true,
                dumps: Vec::new(),
            };
        }

        RunOutcome {
            success: false,
            dumps: find_files_modified_after(&self.paths.crash_logs, DUMP_EXTENSION, started),
        }
    }

    fn report_crash(
        &mut self,
        profile: &GameProfile,
        shim: &CompatibilityShim,
        platform: &str,
        run: &RunOutcome,
        verdict: &WrapperVerdict,
    ) -> Result<ArchiveOutcome, String> {
        tracing::info!("=== Crash detected ===");
        tracing::info!("Game path: {}", profile.binary);
        tracing::info!("Variant filename: {}", shim.filename);
        tracing::info!("Crash filenames: {:?}", run.dumps);
        tracing::debug!("Wrapper verdict: {:?}", verdict);

        match self.sink.archive(profile, shim, platform, &run.dumps) {
            Ok(outcome) => {
                tracing::info!(
                    "Crash archived to {} ({} files, {} skipped)",
                    outcome.path.display(),
                    outcome.entries.len(),
                    outcome.skipped_files.len()
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!("Failed to archive crash: {}", e);
                Err(e.to_string())
            }
        }
    }
}
