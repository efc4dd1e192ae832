//! Configuration resolution and normalization.
//!
//! Handles locating the rc file across the search path, parsing it,
//! and normalizing the accepted input shapes into the canonical
//! list of module entries.

pub mod loader;
pub mod normalize;

pub use loader::{ConfigError, load_config, load_config_cwd};
pub use normalize::{ModuleEntry, RawConfig, normalize};
