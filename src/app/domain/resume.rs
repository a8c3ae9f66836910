use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::Result;

/// One skill bar: a label and a CSS-style width value such as `"80%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percent: String,
}

/// One job entry in the experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub desc: String,
}

/// The résumé record as it is persisted and exchanged.
///
/// Scalar fields default to `""` when missing from incoming JSON. List fields
/// are `Option` so that an absent key and an empty list stay distinguishable:
/// renderers leave sections alone for `None` but clear and rebuild them for
/// `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,

    #[serde(default)]
    pub education: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certs: Option<Vec<String>>,
}

impl ResumeData {
    /// Parse a record from JSON text. Callers match on the result; this never
    /// panics on malformed input.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed form used for export files.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Avatar initials derived from a full name: first character of the first two
/// whitespace-separated tokens, with `'T'` and `'A'` standing in for missing
/// tokens. An entirely empty name yields `"TA"`.
pub fn initials(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let first = tokens.next();
    if first.is_none() {
        return "TA".to_string();
    }
    let a = first.and_then(|t| t.chars().next()).unwrap_or('T');
    let b = tokens.next().and_then(|t| t.chars().next()).unwrap_or('A');
    format!("{}{}", a, b)
}
