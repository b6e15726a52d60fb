mod defaults;
pub mod operations;
pub mod types;

// Re-export types
pub use types::{CompatibilityShim, GameProfile, LauncherConfig, PathsConfig, WrapperConfig};

// Re-export operations
pub use operations::{load_cfg, render_cfg};
