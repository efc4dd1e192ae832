//! Terminal line formatter.
//!
//! Renders structured `{ color, key, msg }` payloads as display lines,
//! with the key column padded to the longest configured module name so
//! per-module output stays aligned.

use colored::Colorize;

use crate::config::ModuleEntry;
use crate::constants::APP_NAME;

/// Colors accepted for the key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Cyan,
    Green,
    Yellow,
    Red,
}

/// Display-line renderer derived from a canonical configuration.
pub struct Formatter {
    key_width: usize,
}

impl Formatter {
    /// Build a formatter sized to `cfg`'s module names.
    pub fn new(cfg: &[ModuleEntry]) -> Self {
        let key_width = cfg
            .iter()
            .map(|e| e.module.len())
            .chain([APP_NAME.len()])
            .max()
            .unwrap_or(0);
        Self { key_width }
    }

    /// Render one display line.
    pub fn line(&self, color: LineColor, key: &str, msg: &str) -> String {
        let padded = format!("{key:<width$}", width = self.key_width);
        let painted = match color {
            LineColor::Cyan => padded.cyan(),
            LineColor::Green => padded.green(),
            LineColor::Yellow => padded.yellow(),
            LineColor::Red => padded.red(),
        };
        format!(" {} {}  {msg}", APP_NAME.dimmed(), painted.bold())
    }
}
