//! Tooltip name lookup
//!
//! Event sources identify the tooltip they target either directly
//! (`{name}`) or through an event payload (`{payload: {name}}`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "default";

/// One name or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Names {
    One(String),
    Many(Vec<String>),
}

impl Names {
    // An empty string counts as no name at all.
    fn present(&self) -> bool {
        !matches!(self, Names::One(name) if name.is_empty())
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Names::One(name) => vec![name],
            Names::Many(names) => names,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub name: Option<Names>,
}

/// Anything carrying a tooltip name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSource {
    pub payload: Option<Payload>,
    pub name: Option<Names>,
}

/// Tooltip names addressed by `source`
///
/// Prefers `payload.name`, then `name`, then `["default"]`.
pub fn resolve(source: &NameSource) -> Vec<String> {
    source
        .payload
        .as_ref()
        .and_then(|payload| payload.name.as_ref())
        .filter(|names| names.present())
        .or_else(|| source.name.as_ref().filter(|names| names.present()))
        .cloned()
        .map(Names::into_vec)
        .unwrap_or_else(|| vec![DEFAULT_NAME.to_string()])
}
