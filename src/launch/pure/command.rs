// Pure command building functions (no I/O)

use crate::config::WrapperConfig;

use std::path::Path;
use std::process::{Command, Stdio};

/// Flags passed to procdump: accept the EULA, dump on unhandled exceptions and hung
/// windows, then `-x <dump dir> <image>` launches the target
pub const PROCDUMP_FLAGS: [&str; 4] = ["-accepteula", "-e", "-h", "-x"];

/// Build the procdump invocation that launches `binary` from `game_dir`.
///
/// stdout is piped so the exit code marker can be read back.
pub fn build_wrapper_cmd(
    wrapper: &Path,
    crash_dir: &Path,
    game_dir: &Path,
    binary: &str,
    cfg: &WrapperConfig,
) -> Command {
    let mut cmd = Command::new(wrapper);
    cmd.current_dir(game_dir);
    cmd.args(PROCDUMP_FLAGS);
    cmd.arg(crash_dir);
    cmd.arg(binary);

    for var in &cfg.env {
        cmd.env(&var.name, &var.value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd
}

/// Build the command that force-kills every process named `binary` on this platform
pub fn build_kill_cmd(binary: &str, platform: &str) -> Command {
    let mut cmd = if platform == "windows" {
        let mut cmd = Command::new("taskkill");
        cmd.args(["/IM", binary, "/T", "/F"]);
        cmd
    } else {
        // Under Wine the game shows up with its .exe name in the command line
        let mut cmd = Command::new("pkill");
        cmd.args(["-9", "-f", binary]);
        cmd
    };
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());
    cmd
}

/// Format a wrapper command for debug logging (pure string building).
///
/// Returns the formatted string. Caller is responsible for printing.
pub fn format_wrapper_cmd(cmd: &Command) -> String {
    let mut output = String::new();

    let cwd = cmd.get_current_dir().unwrap_or_else(|| Path::new(""));
    output.push_str(&format!("CWD={}\n", cwd.display()));

    for (key, value) in cmd.get_envs() {
        let value = value.map(|v| v.to_string_lossy()).unwrap_or_default();
        output.push_str(&format!("{}={}\n", key.to_string_lossy(), value));
    }

    output.push_str(&format!("\"{}\"", cmd.get_program().to_string_lossy()));
    for arg in cmd.get_args() {
        output.push_str(&format!(" \"{}\"", arg.to_string_lossy()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use std::ffi::OsStr;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn wrapper_cmd_has_procdump_flags_then_output_dir_then_target() {
        let cfg = LauncherConfig::default();
        let cmd = build_wrapper_cmd(
            Path::new("./compatibility/procdump.exe"),
            Path::new("./compatibility/crashlogs"),
            Path::new("."),
            "ReksioUfo.exe",
            &cfg.wrapper,
        );

        assert_eq!(cmd.get_program(), "./compatibility/procdump.exe");
        assert_eq!(
            args_of(&cmd),
            vec![
                "-accepteula",
                "-e",
                "-h",
                "-x",
                "./compatibility/crashlogs",
                "ReksioUfo.exe",
            ]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new(".")));
    }

    #[test]
    fn wrapper_cmd_injects_compat_environment() {
        let cfg = LauncherConfig::default();
        let cmd = build_wrapper_cmd(
            Path::new("procdump.exe"),
            Path::new("crashlogs"),
            Path::new("."),
            "Nemo.exe",
            &cfg.wrapper,
        );

        let envs: Vec<(&OsStr, Option<&OsStr>)> = cmd.get_envs().collect();
        assert!(envs.contains(&(
            OsStr::new("__COMPAT_LAYER"),
            Some(OsStr::new("WinXP,RUNASINVOKER,DisableWER"))
        )));
        assert!(envs.contains(&(OsStr::new("WINEDLLOVERRIDES"), Some(OsStr::new("ddraw=n,b")))));
    }

    #[test]
    fn kill_cmd_per_platform() {
        let win = build_kill_cmd("Rex5.exe", "windows");
        assert_eq!(win.get_program(), "taskkill");
        assert_eq!(args_of(&win), vec!["/IM", "Rex5.exe", "/T", "/F"]);

        let linux = build_kill_cmd("Rex5.exe", "linux");
        assert_eq!(linux.get_program(), "pkill");
        assert_eq!(args_of(&linux), vec!["-9", "-f", "Rex5.exe"]);
    }

    #[test]
    fn format_lists_env_and_args() {
        let cfg = LauncherConfig::default();
        let cmd = build_wrapper_cmd(
            Path::new("procdump.exe"),
            Path::new("crashlogs"),
            Path::new("game"),
            "Wehikul.exe",
            &cfg.wrapper,
        );
        let text = format_wrapper_cmd(&cmd);

        assert!(text.starts_with("CWD=game\n"));
        assert!(text.contains("WINEDLLOVERRIDES=ddraw=n,b\n"));
        assert!(text.ends_with("\"procdump.exe\" \"-accepteula\" \"-e\" \"-h\" \"-x\" \"crashlogs\" \"Wehikul.exe\""));
    }
}
