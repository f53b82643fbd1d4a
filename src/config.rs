//! Optional JSON configuration file.
//!
//! ```json
//! {
//!   "planner":  { "tile_width": 25, "tile_height": 25,
//!                 "default_scale": { "x": 25, "y": 25, "z": 25 } },
//!   "showcase": { "columns": 15, "rows": 8 },
//!   "catalog":  { "extension": "prefab",
//!                 "categories": [ { "folder": "Roads", "role": "road" },
//!                                 { "folder": "Grasses" } ] }
//! }
//! ```
//!
//! Every section and field may be left out.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::processor::{CatalogConfig, PlannerConfig, ShowcaseConfig};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub planner: PlannerConfig,
    pub showcase: ShowcaseConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `path`, or fall back to the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Parsing config {}", path.display()))
    }
}
