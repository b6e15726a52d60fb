//! Pure functions (command building, output parsing)

pub mod command;
pub mod exit_code;

pub use command::{build_kill_cmd, build_wrapper_cmd, format_wrapper_cmd};
pub use exit_code::{ExitCodeParser, ProcdumpExitParser};
