//! Launch module - running the game under procdump with a compatibility shim
//!
//! This module provides:
//! - Shim staging into the game directory
//! - The procdump wrapper and its exit-code parsing
//! - The trial loop that picks the first shim the game survives
//!
//! ## Module Structure
//! - `types.rs`: Verdicts, trial records and the `GameWrapper` seam
//! - `pure/`: Pure functions (command building, exit-code parsing)
//! - `operations/`: Atomic side effects (staging, running procdump)
//! - `pipelines/`: High-level orchestration (shim selection)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use operations::ProcdumpWrapper;
pub use pipelines::CompatibilityRunner;
pub use types::Selection;
