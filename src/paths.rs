use std::path::PathBuf;
use std::sync::LazyLock;

/// Everything the launcher ships with lives under this directory, next to the game binary.
pub static PATH_COMPAT: LazyLock<PathBuf> = LazyLock::new(|| PathBuf::from("./compatibility"));

pub static PATH_CRASHLOGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_COMPAT.join("crashlogs"));

pub static PATH_DDRAWS: LazyLock<PathBuf> = LazyLock::new(|| PATH_COMPAT.join("ddraws"));

pub static PATH_PROCDUMP: LazyLock<PathBuf> = LazyLock::new(|| PATH_COMPAT.join("procdump.exe"));

/// Optional override for the built-in game and shim tables
pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| PATH_COMPAT.join("launcher.yaml"));

/// Name the game engines load their DirectDraw implementation from
pub const STAGED_SHIM_NAME: &str = "ddraw.dll";
