//! Operations module (atomic side effects)

pub mod staging;
pub mod wrapper;

pub use staging::stage_shim;
pub use wrapper::ProcdumpWrapper;
