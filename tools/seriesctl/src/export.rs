//! Observation export
//!
//! Writes the observations ⋈ metrics join as a CSV file with a
//! date-stamped default filename.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use series_store::{list_observations, SqlitePool};

/// Export all observations with their metric names.
///
/// Returns the written path, or `None` when the store holds no
/// observations (no file is created then).
pub async fn export_observations(
    pool: &SqlitePool,
    output: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let rows = list_observations(pool).await?;
    if rows.is_empty() {
        return Ok(None);
    }

    let output = output.unwrap_or_else(|| {
        let stamp = chrono::Local::now().format("%Y%m%d");
        PathBuf::from(format!("series_export_{}.csv", stamp))
    });

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    writer.write_record(["date", "metric_id", "metric_name", "value"])?;

    for row in &rows {
        writer.write_record([
            row.date.to_string(),
            row.metric_id.to_string(),
            row.metric_name.clone(),
            row.value.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    info!("Exported {} observations to {}", rows.len(), output.display());
    Ok(Some(output))
}
