//! Raw rc-file shapes and normalization into canonical module entries.
//!
//! An rc file may contain any of three shapes:
//! 1. An array of module names: `["one", "two"]`
//! 2. Object shorthand: `{"one": {}, "two": {"tags": ["foo"]}}`
//! 3. An array of full records: `[{"module": "one"}, {"module": "two", "tags": ["foo"]}]`
//!
//! All three normalize to an ordered list of [`ModuleEntry`] values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One configured module and its tags (canonical form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Module identifier. Opaque to the config subsystem.
    pub module: String,

    /// Tags attached to the module. Always present after normalization,
    /// defaulting to empty when the rc file omits the field.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Per-module options in the object-shorthand shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The three accepted raw rc-file shapes, classified at deserialization.
///
/// Variant order matters: serde tries them top to bottom, so an empty
/// array lands in `Names` and an array mixing strings and records fails
/// classification outright rather than being coerced either way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawConfig {
    /// Array of module names, no tags.
    Names(Vec<String>),

    /// Array of full records, missing `tags` defaulted.
    Records(Vec<ModuleEntry>),

    /// Mapping from module name to options. `IndexMap` keeps entries in
    /// document order so normalization is deterministic.
    Map(IndexMap<String, ModuleOptions>),
}

impl RawConfig {
    /// Returns `true` for the object-shorthand shape.
    ///
    /// The loader rejects this shape at its validation gate even though
    /// `normalize` accepts it — see [`crate::config::loader`].
    pub fn is_map(&self) -> bool {
        matches!(self, RawConfig::Map(_))
    }
}

/// Convert a raw rc-file value into the canonical list of module entries.
///
/// Pure and total: absent or empty input yields an empty list, and input
/// order is preserved for every shape.
pub fn normalize(raw: Option<RawConfig>) -> Vec<ModuleEntry> {
    match raw {
        None => Vec::new(),
        Some(RawConfig::Names(names)) => names
            .into_iter()
            .map(|module| ModuleEntry {
                module,
                tags: Vec::new(),
            })
            .collect(),
        Some(RawConfig::Records(entries)) => entries,
        Some(RawConfig::Map(map)) => map
            .into_iter()
            .map(|(module, opts)| ModuleEntry {
                module,
                tags: opts.tags,
            })
            .collect(),
    }
}
