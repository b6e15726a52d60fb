//! Shim staging

use crate::config::{CompatibilityShim, PathsConfig};
use crate::error::{LauncherError, LauncherResult};
use crate::fileops::copy_file;

use std::path::PathBuf;

/// Copy the shim library over the DLL name the game loads. Returns the staged path.
pub fn stage_shim(paths: &PathsConfig, shim: &CompatibilityShim) -> LauncherResult<PathBuf> {
    let src = paths.shims_dir.join(&shim.filename);
    let dst = paths.game_dir.join(&paths.staged_shim);

    copy_file(&src, &dst).map_err(|source| LauncherError::ShimStaging {
        shim: shim.filename.clone(),
        source,
    })?;

    Ok(dst)
}
