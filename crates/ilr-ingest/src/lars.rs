//! LARS framework aim CSV loading.
//!
//! Expected columns: `LearnAimRef,ProgType,FworkCode,PwayCode,EffectiveFrom,EffectiveTo`.
//! `EffectiveTo` may be empty for open-ended links.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use ilr_model::{LarsData, LarsFrameworkAim};
use serde::Deserialize;
use tracing::info;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FrameworkAimRow {
    learn_aim_ref: String,
    prog_type: i32,
    fwork_code: i32,
    pway_code: i32,
    effective_from: NaiveDate,
    effective_to: Option<NaiveDate>,
}

impl From<FrameworkAimRow> for LarsFrameworkAim {
    fn from(row: FrameworkAimRow) -> Self {
        Self {
            learn_aim_ref: row.learn_aim_ref.trim().to_string(),
            prog_type: row.prog_type,
            fwork_code: row.fwork_code,
            pway_code: row.pway_code,
            effective_from: row.effective_from,
            effective_to: row.effective_to,
        }
    }
}

/// Load LARS framework aims from a CSV file.
pub fn load_lars(path: &Path) -> Result<LarsData> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_lars(file).map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        framework_aims = data.framework_aim_count(),
        "loaded LARS reference data"
    );
    Ok(data)
}

/// Parse LARS framework aims from any reader.
pub fn parse_lars<R: Read>(reader: R) -> std::result::Result<LarsData, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut data = LarsData::new();
    for row in reader.deserialize::<FrameworkAimRow>() {
        data.insert_framework_aim(row?.into());
    }
    Ok(data)
}
