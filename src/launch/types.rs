//! Launch type definitions

use crate::config::{CompatibilityShim, GameProfile};
use crate::crash::ArchiveOutcome;

/// Marker procdump prints in front of the monitored process' exit code
pub const EXIT_CODE_MARKER: &str = "Exit Code";

/// What the exit-code parser found in the wrapper's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCodeReading {
    /// No marker at all; the wrapper didn't report an exit
    NoMarker,
    Code(u32),
    /// Marker present but not followed by a readable code
    Malformed,
}

impl ExitCodeReading {
    pub fn is_crash(&self) -> bool {
        match self {
            ExitCodeReading::NoMarker => false,
            ExitCodeReading::Code(code) => *code != 0,
            ExitCodeReading::Malformed => true,
        }
    }
}

/// Result of one wrapped game run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperVerdict {
    /// The wrapper ran to completion; its output was parsed
    Exited(ExitCodeReading),
    /// The wrapper couldn't be started or exited unsuccessfully itself
    Failed(String),
}

impl WrapperVerdict {
    pub fn crashed(&self) -> bool {
        match self {
            WrapperVerdict::Exited(reading) => reading.is_crash(),
            WrapperVerdict::Failed(_) => true,
        }
    }
}

/// Runs the game under the dump-capturing monitor
pub trait GameWrapper {
    /// Run `game` to completion. Blocks until the monitor exits.
    fn run(&mut self, game: &GameProfile) -> WrapperVerdict;

    /// Kill any instance of `game` still alive. Best effort.
    fn terminate(&mut self, game: &GameProfile);
}

/// Outcome of one trial, as seen by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    /// Dump files (names inside the crash-log directory) created during the run
    pub dumps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    Passed,
    /// The shim couldn't be copied into place; the game was not started
    StagingFailed(String),
    Crashed {
        run: RunOutcome,
        verdict: WrapperVerdict,
        /// Archival result. Diagnostics only, it never changes the verdict.
        archive: Result<ArchiveOutcome, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecord {
    pub shim: CompatibilityShim,
    pub outcome: TrialOutcome,
}

impl TrialRecord {
    /// One-line summary for the log
    pub fn describe(&self) -> String {
        let shim = &self.shim.filename;
        match &self.outcome {
            TrialOutcome::Passed => format!("{}: ok", shim),
            TrialOutcome::StagingFailed(reason) => format!("{}: not staged ({})", shim, reason),
            TrialOutcome::Crashed {
                run,
                verdict,
                archive,
            } => {
                let cause = match verdict {
                    WrapperVerdict::Exited(ExitCodeReading::Code(code)) => {
                        format!("exit code {:08X}", code)
                    }
                    WrapperVerdict::Exited(reading) => format!("{:?}", reading),
                    WrapperVerdict::Failed(reason) => reason.clone(),
                };
                let archive = match archive {
                    Ok(outcome) => outcome.path.display().to_string(),
                    Err(e) => format!("not archived: {}", e),
                };
                format!(
                    "{}: crashed ({}), {} dump(s), {}",
                    shim,
                    cause,
                    run.dumps.len(),
                    archive
                )
            }
        }
    }
}

/// Everything `select_working_shim` learned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub working: Option<CompatibilityShim>,
    pub trials: Vec<TrialRecord>,
}

impl Selection {
    /// Number of trials in which the game was actually started
    pub fn launches(&self) -> usize {
        self.trials
            .iter()
            .filter(|t| !matches!(t.outcome, TrialOutcome::StagingFailed(_)))
            .count()
    }

    pub fn crashes(&self) -> usize {
        self.trials
            .iter()
            .filter(|t| matches!(t.outcome, TrialOutcome::Crashed { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_nonzero_or_malformed_codes_are_crashes() {
        assert!(!ExitCodeReading::NoMarker.is_crash());
        assert!(!ExitCodeReading::Code(0).is_crash());
        assert!(ExitCodeReading::Code(0x2A).is_crash());
        assert!(ExitCodeReading::Malformed.is_crash());
    }

    #[test]
    fn describe_names_shim_cause_and_archive() {
        let record = TrialRecord {
            shim: CompatibilityShim::new("cnc_ddraw_71.dll", &["linux"]),
            outcome: TrialOutcome::Crashed {
                run: RunOutcome {
                    success: false,
                    dumps: vec!["Nemo.exe_1.dmp".to_string()],
                },
                verdict: WrapperVerdict::Exited(ExitCodeReading::Code(0xC0000005)),
                archive: Err("Archive error: disk full".to_string()),
            },
        };
        assert_eq!(
            record.describe(),
            "cnc_ddraw_71.dll: crashed (exit code C0000005), 1 dump(s), not archived: Archive error: disk full"
        );

        let staged = TrialRecord {
            shim: CompatibilityShim::new("ddraw_compat.dll", &["windows"]),
            outcome: TrialOutcome::StagingFailed("missing".to_string()),
        };
        assert_eq!(staged.describe(), "ddraw_compat.dll: not staged (missing)");
    }

    #[test]
    fn wrapper_failure_is_a_crash() {
        assert!(WrapperVerdict::Failed("not found".to_string()).crashed());
        assert!(!WrapperVerdict::Exited(ExitCodeReading::NoMarker).crashed());
    }
}
