//! Map model → ordered placement records.

use serde::Deserialize;
use tracing::{debug, info};

use crate::model::{MapModel, PlacementRecord, Role, Vec3};

/// Outcome of a successful asset lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub asset: String,
    pub role: Role,
    pub scale: Vec3,
}

/// Maps a tileset prefix and a 1-based local tile id to an asset.
///
/// `None` means "nothing to place here" and is never an error.
pub trait Resolver {
    fn resolve(&self, prefix: &str, local_id: u32) -> Option<Resolution>;
}

impl<F> Resolver for F
where
    F: Fn(&str, u32) -> Option<Resolution>,
{
    fn resolve(&self, prefix: &str, local_id: u32) -> Option<Resolution> {
        self(prefix, local_id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    pub default_scale: Vec3,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tile_width: 25.0,
            tile_height: 25.0,
            default_scale: Vec3::splat(25.0),
        }
    }
}

impl PlannerConfig {
    /// World position of a grid cell. Tiles sit one tile width above the
    /// ground plane and rows grow towards -z.
    pub fn position(&self, row: u32, col: u32) -> Vec3 {
        Vec3::new(
            col as f32 * self.tile_width,
            self.tile_width,
            // not `-(row * h)`: row 0 must give +0.0, not -0.0
            0.0 - row as f32 * self.tile_height,
        )
    }
}

/// Walk `model` row-major and emit one record per cell that falls inside a
/// tileset and resolves to an asset.
pub fn plan<R: Resolver + ?Sized>(
    model: &MapModel,
    config: &PlannerConfig,
    resolver: &R,
) -> Vec<PlacementRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row, col, gid) in model.cells() {
        let Some(tileset) = model.tileset_for(gid) else {
            skipped += 1;
            continue;
        };

        let local_id = tileset.local_id(gid);
        let Some(found) = resolver.resolve(&tileset.prefix, local_id) else {
            debug!(
                "no asset for {}{} at ({}, {})",
                tileset.prefix, local_id, col, row
            );
            skipped += 1;
            continue;
        };

        records.push(PlacementRecord {
            column: col,
            row,
            local_id,
            prefix: tileset.prefix.clone(),
            asset: found.asset,
            role: found.role,
            scale: found.scale,
            position: config.position(row, col),
        });
    }

    info!("planned {} placement(s), skipped {} cell(s)", records.len(), skipped);
    records
}
