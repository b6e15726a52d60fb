//! procdump-backed game wrapper

use crate::config::{GameProfile, PathsConfig, WrapperConfig};

use std::path::{Path, PathBuf};

use super::super::pure::{
    ExitCodeParser, ProcdumpExitParser, build_kill_cmd, build_wrapper_cmd, format_wrapper_cmd,
};
use super::super::types::{GameWrapper, WrapperVerdict};

/// Runs games under Sysinternals procdump and reads the exit code from its output
pub struct ProcdumpWrapper {
    paths: PathsConfig,
    cfg: WrapperConfig,
    platform: String,
    parser: Box<dyn ExitCodeParser>,
}

impl ProcdumpWrapper {
    pub fn new(paths: PathsConfig, cfg: WrapperConfig, platform: &str) -> Self {
        Self {
            paths,
            cfg,
            platform: platform.to_string(),
            parser: Box::new(ProcdumpExitParser),
        }
    }

    /// Swap the output parser, e.g. for a procdump build that formats its exit line differently
    #[allow(dead_code)] // Only the stock parser is wired up from the CLI
    pub fn with_parser(mut self, parser: Box<dyn ExitCodeParser>) -> Self {
        self.parser = parser;
        self
    }
}

// The child runs from the game directory, so relative layout paths must not be
// reinterpreted against it.
fn absolute_or_same(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl GameWrapper for ProcdumpWrapper {
    fn run(&mut self, game: &GameProfile) -> WrapperVerdict {
        let _ = std::fs::create_dir_all(&self.paths.crash_logs);

        let wrapper = absolute_or_same(&self.paths.wrapper);
        let crash_dir = absolute_or_same(&self.paths.crash_logs);
        let mut cmd = build_wrapper_cmd(
            &wrapper,
            &crash_dir,
            &self.paths.game_dir,
            &game.binary,
            &self.cfg,
        );
        tracing::debug!("Wrapper command:\n{}", format_wrapper_cmd(&cmd));

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                return WrapperVerdict::Failed(format!(
                    "failed to start {}: {}",
                    wrapper.display(),
                    e
                ));
            }
        };

        if !output.status.success() {
            return WrapperVerdict::Failed(format!(
                "{} exited with {}",
                wrapper.display(),
                output.status
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        WrapperVerdict::Exited(self.parser.parse(&stdout))
    }

    fn terminate(&mut self, game: &GameProfile) {
        // procdump can leave the target suspended or orphaned when it dies abnormally
        let _ = build_kill_cmd(&game.binary, &self.platform).status();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::launch::types::ExitCodeReading;

    struct AlwaysCode(u32);

    impl ExitCodeParser for AlwaysCode {
        fn parse(&self, _output: &str) -> ExitCodeReading {
            ExitCodeReading::Code(self.0)
        }
    }

    fn paths_with_wrapper(root: &Path, wrapper: &str) -> PathsConfig {
        PathsConfig {
            game_dir: root.to_path_buf(),
            crash_logs: root.join("compatibility/crashlogs"),
            shims_dir: root.join("compatibility/ddraws"),
            wrapper: PathBuf::from(wrapper),
            ..Default::default()
        }
    }

    #[test]
    fn missing_wrapper_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_with_wrapper(dir.path(), "/nonexistent/procdump.exe");
        let mut wrapper = ProcdumpWrapper::new(paths, WrapperConfig::default(), "linux");

        let verdict = wrapper.run(&GameProfile::new("Nemo.exe", &[]));
        assert!(matches!(verdict, WrapperVerdict::Failed(_)));
        assert!(verdict.crashed());
    }

    #[test]
    fn unsuccessful_wrapper_exit_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_with_wrapper(dir.path(), "/bin/false");
        let mut wrapper = ProcdumpWrapper::new(paths, WrapperConfig::default(), "linux");

        assert!(wrapper.run(&GameProfile::new("Nemo.exe", &[])).crashed());
    }

    #[test]
    fn output_without_marker_is_clean_and_crash_dir_exists() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_with_wrapper(dir.path(), "/bin/echo");
        let crash_logs = paths.crash_logs.clone();
        let mut wrapper = ProcdumpWrapper::new(paths, WrapperConfig::default(), "linux");

        let verdict = wrapper.run(&GameProfile::new("Nemo.exe", &[]));
        assert_eq!(verdict, WrapperVerdict::Exited(ExitCodeReading::NoMarker));
        assert!(crash_logs.is_dir());
    }

    #[test]
    fn custom_parser_decides_the_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_with_wrapper(dir.path(), "/bin/echo");
        let mut wrapper = ProcdumpWrapper::new(paths, WrapperConfig::default(), "linux")
            .with_parser(Box::new(AlwaysCode(0xC0000005)));

        let verdict = wrapper.run(&GameProfile::new("Nemo.exe", &[]));
        assert_eq!(verdict, WrapperVerdict::Exited(ExitCodeReading::Code(0xC0000005)));
        assert!(verdict.crashed());
    }
}
