//! App-wide constants.
//!
//! Centralises the tool name and rc-file names so a rename only
//! requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "lank";

/// Script-style rc filename. Searched for precedence fidelity, but no
/// longer loadable — see [`crate::config::loader::ConfigError::ScriptConfig`].
pub const RC_SCRIPT_FILENAME: &str = ".lankrc.js";

/// JSON rc filename (e.g. `.lankrc.json` in the working directory).
pub const RC_JSON_FILENAME: &str = ".lankrc.json";
