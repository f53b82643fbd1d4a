use serde::{Deserialize, Serialize};

/// Plain 3-component vector used for world positions and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

/// One `<tileset>` of the map: the contiguous global-id range
/// `first_gid ..= first_gid + tile_count - 1`, named by `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetEntry {
    pub first_gid: u32,
    pub tile_count: u32,
    pub prefix: String,
}

impl TilesetEntry {
    pub fn contains(&self, gid: u32) -> bool {
        gid >= self.first_gid && gid - self.first_gid < self.tile_count
    }

    /// 1-based index of `gid` inside this tileset. Only meaningful when
    /// [`contains`](Self::contains) holds.
    pub fn local_id(&self, gid: u32) -> u32 {
        gid - self.first_gid + 1
    }
}

/// Parsed map, immutable once built.
///
/// `grid[row][col]`, with `row < height` and `col < width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapModel {
    pub width: u32,
    pub height: u32,
    pub grid: Vec<Vec<u32>>,
    pub tilesets: Vec<TilesetEntry>,
}

impl MapModel {
    /// First tileset (document order) whose range holds `gid`.
    pub fn tileset_for(&self, gid: u32) -> Option<&TilesetEntry> {
        self.tilesets.iter().find(|t| t.contains(gid))
    }

    /// Row-major iterator over `(row, col, gid)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, &gid)| (row as u32, col as u32, gid))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Ordinary,
    /// Walkable surface, included in the navigation mesh.
    Road,
}

/// Static editor flags the scene builder is expected to set on a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticFlags {
    pub batching: bool,
    pub navigation: bool,
}

/// One resolved instruction for the external scene builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRecord {
    pub column: u32,
    pub row: u32,
    pub local_id: u32,
    pub prefix: String,
    pub asset: String,
    pub role: Role,
    pub scale: Vec3,
    pub position: Vec3,
}

impl PlacementRecord {
    pub fn static_flags(&self) -> StaticFlags {
        StaticFlags {
            batching: true,
            navigation: self.role == Role::Road,
        }
    }
}

/// Everything a writer needs: the map stem plus the ordered records.
#[derive(Debug, Clone)]
pub struct Plan {
    pub name: String,
    pub records: Vec<PlacementRecord>,
}
