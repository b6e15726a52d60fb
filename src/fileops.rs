//! File primitives used by detection, shim staging and crash archival
//!
//! ## Module Structure
//! - `pure.rs`: Glob compilation and path formatting
//! - `operations.rs`: Copy, listing and lookup against the real filesystem

mod operations;
mod pure;

pub use operations::{copy_file, find_files_modified_after, list_dir_names, resolve_glob};
pub use pure::to_slash_path;
