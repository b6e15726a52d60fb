use crate::config::types::LauncherConfig;
use crate::error::{LauncherError, LauncherResult};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the launcher configuration.
///
/// A missing file means the built-in tables are used. A file that exists but
/// doesn't parse or validate is an error.
pub fn load_cfg(path: &Path) -> LauncherResult<LauncherConfig> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using built-in tables", path.display());
            return Ok(LauncherConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: LauncherConfig = serde_yaml::from_reader(BufReader::new(file))?;
    config
        .validate()
        .map_err(|e| LauncherError::Config(format!("{}: {}", path.display(), e)))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Render a configuration the way `load_cfg` reads it back
pub fn render_cfg(config: &LauncherConfig) -> LauncherResult<String> {
    Ok(serde_yaml::to_string(config)?)
}
