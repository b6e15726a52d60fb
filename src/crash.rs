//! Crash evidence collection
//!
//! When a trial crashes, the dumps procdump wrote plus the game's save files
//! are packed into a zip in the crash-log directory, together with a
//! `report.json` manifest.
//!
//! ## Module Structure
//! - `types.rs`: Report/outcome types and the `CrashSink` seam
//! - `operations.rs`: Archive creation and zip entry writes
//! - `pipelines.rs`: `CrashArchiver`, the full archival routine

mod operations;
mod pipelines;
mod types;

pub use pipelines::CrashArchiver;
pub use types::{ArchiveOutcome, CrashSink, DUMP_EXTENSION};
