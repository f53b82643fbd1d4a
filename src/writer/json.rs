//! Placement plan as `placements.json`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::{PlacementRecord, Plan, StaticFlags};

pub const FILE_NAME: &str = "placements.json";

#[derive(Serialize)]
struct PlanFile<'a> {
    map: &'a str,
    navigation_cells: usize,
    records: Vec<RecordOut<'a>>,
}

#[derive(Serialize)]
struct RecordOut<'a> {
    #[serde(flatten)]
    record: &'a PlacementRecord,
    static_flags: StaticFlags,
}

fn document(plan: &Plan) -> PlanFile<'_> {
    let records: Vec<_> = plan
        .records
        .iter()
        .map(|record| RecordOut {
            record,
            static_flags: record.static_flags(),
        })
        .collect();

    PlanFile {
        map: &plan.name,
        navigation_cells: records.iter().filter(|r| r.static_flags.navigation).count(),
        records,
    }
}

pub fn emit(plan: &Plan, out_dir: &Path) -> io::Result<PathBuf> {
    let path = out_dir.join(FILE_NAME);
    let mut out = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut out, &document(plan))?;
    writeln!(out)?;
    out.flush()?;
    Ok(path)
}
