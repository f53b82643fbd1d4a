//! Prefab folder catalog.
//!
//! Assets live in `<root>/<category folder>/<prefix><id>.<extension>`.
//! Categories are probed in configured order and the first folder holding
//! the file wins, so a road tile never gets picked up as grass. A category
//! with an empty folder name reads straight from the root.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::trace;

use super::planner::{Resolution, Resolver};
use crate::model::{Role, Vec3};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub folder: String,
    #[serde(default)]
    pub role: Role,
    /// Overrides the planner's default scale for every asset in the folder.
    #[serde(default)]
    pub scale: Option<Vec3>,
}

impl Category {
    pub fn new(folder: impl Into<String>, role: Role) -> Self {
        Self {
            folder: folder.into(),
            role,
            scale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub extension: String,
    pub categories: Vec<Category>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            extension: "prefab".into(),
            categories: vec![
                Category::new("Roads", Role::Road),
                Category::new("Grasses", Role::Ordinary),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrefabCatalog {
    root: PathBuf,
    extension: String,
    categories: Vec<Category>,
    default_scale: Vec3,
}

impl PrefabCatalog {
    pub fn new(root: impl Into<PathBuf>, config: &CatalogConfig, default_scale: Vec3) -> Self {
        Self {
            root: root.into(),
            extension: config.extension.clone(),
            categories: config.categories.clone(),
            default_scale,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(&self, name: &str) -> String {
        if self.extension.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{}", self.extension)
        }
    }
}

impl Resolver for PrefabCatalog {
    fn resolve(&self, prefix: &str, local_id: u32) -> Option<Resolution> {
        let name = format!("{prefix}{local_id}");
        let file = self.file_name(&name);

        self.categories.iter().find_map(|cat| {
            let path = self.root.join(&cat.folder).join(&file);
            trace!("probing {}", path.display());
            path.is_file().then(|| Resolution {
                asset: if cat.folder.is_empty() {
                    name.clone()
                } else {
                    format!("{}/{}", cat.folder, name)
                },
                role: cat.role,
                scale: cat.scale.unwrap_or(self.default_scale),
            })
        })
    }
}
