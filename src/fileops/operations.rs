// Filesystem primitives shared by detection, staging and archival

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use super::pure::{GlobPattern, to_slash_path};

fn with_context(e: io::Error, what: &str, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("failed to {} {}: {}", what, path.display(), e))
}

/// Copy `src` over `dst` and flush it to disk before returning.
///
/// The game loads the destination right after this returns, so a plain
/// buffered write is not enough.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    let mut source = File::open(src).map_err(|e| with_context(e, "open source file", src))?;
    let mut destination =
        File::create(dst).map_err(|e| with_context(e, "create destination file", dst))?;

    io::copy(&mut source, &mut destination).map_err(|e| with_context(e, "copy file to", dst))?;
    destination
        .sync_all()
        .map_err(|e| with_context(e, "sync destination file", dst))?;

    Ok(())
}

/// Names of the entries directly inside `dir`
pub fn list_dir_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Resolve a save-file glob against `root`.
///
/// Returns paths relative to `root`, sorted. An error means the pattern itself
/// is malformed; unreadable directories simply produce no matches.
pub fn resolve_glob(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, String> {
    let glob = GlobPattern::new(pattern)?;

    let walk = WalkDir::new(root)
        .min_depth(1)
        .max_depth(glob.depth())
        .follow_links(false)
        .sort_by_file_name();

    let mut matches = Vec::new();
    for entry in walk.into_iter().filter_map(|e| e.ok()) {
        if entry.depth() != glob.depth() {
            continue;
        }
        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };
        if glob.matches(&to_slash_path(rel_path)) {
            matches.push(rel_path.to_path_buf());
        }
    }

    Ok(matches)
}

/// Files in `dir` with the given extension modified strictly after `after`, sorted by name.
///
/// A missing or unreadable directory yields nothing.
pub fn find_files_modified_after(dir: &Path, extension: &str, after: SystemTime) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(extension) {
                return None;
            }
            let modified = entry.metadata().and_then(|m| m.modified()).ok()?;
            (modified > after).then_some(name)
        })
        .collect();

    names.sort();
    names
}
