// Atomic archive operations

use crate::error::{LauncherError, LauncherResult};

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

static ARCHIVE_COUNTER: AtomicU64 = AtomicU64::new(0);

const MAX_NAME_ATTEMPTS: usize = 16;

/// Candidate archive name. Timestamp for humans, counter and random suffix for uniqueness.
pub fn archive_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = ARCHIVE_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("crashlog_{}_{}_{:04x}.zip", nanos, seq, fastrand::u16(..))
}

/// Create a fresh archive file in `dir`, never reusing an existing name
pub fn create_archive_file(dir: &Path) -> LauncherResult<(PathBuf, File)> {
    std::fs::create_dir_all(dir)?;

    for _ in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(archive_name());
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(LauncherError::Archive(format!(
        "could not find a free archive name in {}",
        dir.display()
    )))
}

/// Stream `src` into the archive as `dst`.
///
/// The source is opened before the entry is started, and a read error midway
/// aborts the entry, so a failed file never leaves a partial entry behind.
pub fn add_file_to_zip<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    src: &Path,
    dst: &str,
) -> LauncherResult<()> {
    let mut file = File::open(src)?;
    if file.metadata()?.is_dir() {
        return Err(LauncherError::Archive(format!("{} is a directory", src.display())));
    }

    zip.start_file(dst, SimpleFileOptions::default())?;
    if let Err(e) = io::copy(&mut file, zip) {
        let _ = zip.abort_file();
        return Err(e.into());
    }
    Ok(())
}

/// Write an in-memory blob as a new entry
pub fn add_bytes_to_zip<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    dst: &str,
    bytes: &[u8],
) -> LauncherResult<()> {
    zip.start_file(dst, SimpleFileOptions::default())?;
    zip.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn archive_names_do_not_repeat() {
        let a = archive_name();
        let b = archive_name();
        assert_ne!(a, b);
        assert!(a.starts_with("crashlog_"));
        assert!(a.ends_with(".zip"));
    }

    #[test]
    fn create_archive_file_makes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let crashlogs = dir.path().join("compatibility/crashlogs");

        let (first, _) = create_archive_file(&crashlogs).unwrap();
        let (second, _) = create_archive_file(&crashlogs).unwrap();

        assert!(first.exists());
        assert!(second.exists());
        assert_ne!(first, second);
    }

    #[test]
    fn directories_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let err = add_file_to_zip(&mut zip, dir.path(), "saves/dir").unwrap_err();
        assert!(matches!(err, LauncherError::Archive(_)));

        let archive = zip.finish().unwrap();
        let reader = zip::ZipArchive::new(archive).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_error_midway_leaves_no_entry() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        // Opens fine, but reading from offset 0 fails with EIO
        let err = add_file_to_zip(&mut zip, Path::new("/proc/self/mem"), "game.dmp");
        assert!(err.is_err());
        add_bytes_to_zip(&mut zip, "report.json", b"{}").unwrap();

        let reader = zip::ZipArchive::new(zip.finish().unwrap()).unwrap();
        let names: Vec<&str> = reader.file_names().collect();
        assert_eq!(names, vec!["report.json"]);
    }

    #[test]
    fn missing_file_leaves_no_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        assert!(add_file_to_zip(&mut zip, &dir.path().join("gone.dmp"), "gone.dmp").is_err());

        let reader = zip::ZipArchive::new(zip.finish().unwrap()).unwrap();
        assert_eq!(reader.len(), 0);
    }
}
