pub mod loader;
pub mod materializer;

pub use loader::{EnvProfile, load_profile};
pub use materializer::{check_config_dir, copy_profile, ensure_config_dir, unexpected_entries};
