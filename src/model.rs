//! Response shapes of the OpenAntrag API.
//!
//! These are defined by the remote service; the crate only reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parliament descriptor as returned by `representation/GetByKey`.
#[derive(Debug, Clone, Deserialize)]
pub struct Parliament {
    /// Human-readable name of the parliament.
    #[serde(rename = "Name2")]
    pub name2: String,
}

/// One stage of a parliament's proposal workflow. Kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessStep(pub Value);

/// A proposal record from `proposal/{parliament}/GetTop/{count}`.
///
/// Only the fields the renderer needs are typed; everything else the API
/// sends is kept in `extra` so the record serializes back unchanged. A typed
/// field that is `null` or missing reads as empty and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "FullUrl", default)]
    pub full_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Proposal {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn full_url(&self) -> &str {
        self.full_url.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}
