//! Showcase grid: every numbered asset of one folder laid out side by side.
//!
//! Cell `k` of the grid (row-major, 0-based) shows asset `<prefix><k + 1>`.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::planner::{PlannerConfig, Resolver};
use crate::model::PlacementRecord;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub columns: u32,
    pub rows: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self { columns: 15, rows: 8 }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("missing {0} for the showcase assets")]
    MissingSource(&'static str),
    #[error("showcase grid of {rows}x{columns} cells is too large")]
    GridTooLarge { rows: u32, columns: u32 },
}

pub fn plan_showcase<R: Resolver + ?Sized>(
    prefix: &str,
    config: &ShowcaseConfig,
    planner: &PlannerConfig,
    resolver: &R,
) -> Result<Vec<PlacementRecord>, ShowcaseError> {
    if prefix.is_empty() {
        return Err(ShowcaseError::MissingSource("file name prefix"));
    }

    // every cell index, plus the 1-based offset, must fit in a u32
    let cells = config
        .rows
        .checked_mul(config.columns)
        .filter(|&n| n < u32::MAX)
        .ok_or(ShowcaseError::GridTooLarge {
            rows: config.rows,
            columns: config.columns,
        })?;

    let mut records = Vec::new();
    for row in 0..config.rows {
        for col in 0..config.columns {
            let index = row * config.columns + col + 1;
            let Some(found) = resolver.resolve(prefix, index) else {
                continue;
            };

            records.push(PlacementRecord {
                column: col,
                row,
                local_id: index,
                prefix: prefix.to_string(),
                asset: found.asset,
                role: found.role,
                scale: found.scale,
                position: planner.position(row, col),
            });
        }
    }

    info!("showcase: {} of {} cell(s) filled", records.len(), cells);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Vec3};
    use crate::processor::planner::Resolution;

    fn up_to(max: u32) -> impl Fn(&str, u32) -> Option<Resolution> {
        move |prefix: &str, id: u32| {
            (id <= max).then(|| Resolution {
                asset: format!("{prefix}{id}"),
                role: Role::Ordinary,
                scale: Vec3::splat(25.0),
            })
        }
    }

    #[test]
    fn test_grid_indices_are_row_major() {
        let config = ShowcaseConfig { columns: 3, rows: 2 };
        let records =
            plan_showcase("kit_", &config, &PlannerConfig::default(), &up_to(100)).expect("plan");

        let cells: Vec<_> = records
            .iter()
            .map(|r| (r.row, r.column, r.local_id))
            .collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, 1),
                (0, 1, 2),
                (0, 2, 3),
                (1, 0, 4),
                (1, 1, 5),
                (1, 2, 6)
            ]
        );
        assert_eq!(records[4].asset, "kit_5");
        assert_eq!(records[4].position, Vec3::new(25.0, 25.0, -25.0));
    }

    #[test]
    fn test_missing_assets_leave_holes() {
        let config = ShowcaseConfig { columns: 4, rows: 2 };
        let skip_two = |prefix: &str, id: u32| {
            if id == 2 {
                None
            } else {
                up_to(5)(prefix, id)
            }
        };
        let records =
            plan_showcase("kit_", &config, &PlannerConfig::default(), &skip_two).expect("plan");

        let ids: Vec<_> = records.iter().map(|r| r.local_id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(records[1].column, 2);
    }

    #[test]
    fn test_default_grid_size() {
        let records = plan_showcase(
            "kit_",
            &ShowcaseConfig::default(),
            &PlannerConfig::default(),
            &up_to(u32::MAX),
        )
        .expect("plan");
        assert_eq!(records.len(), 15 * 8);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let config = ShowcaseConfig {
            columns: 70_000,
            rows: 70_000,
        };
        let err = plan_showcase("kit_", &config, &PlannerConfig::default(), &up_to(1))
            .unwrap_err();
        assert_eq!(
            err,
            ShowcaseError::GridTooLarge {
                rows: 70_000,
                columns: 70_000
            }
        );

        let config = ShowcaseConfig {
            columns: u32::MAX,
            rows: 1,
        };
        assert!(plan_showcase("kit_", &config, &PlannerConfig::default(), &up_to(1)).is_err());
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let err = plan_showcase(
            "",
            &ShowcaseConfig::default(),
            &PlannerConfig::default(),
            &up_to(1),
        )
        .unwrap_err();
        assert_eq!(err, ShowcaseError::MissingSource("file name prefix"));
    }
}
