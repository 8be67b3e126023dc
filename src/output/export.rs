use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;

use crate::error::{KinchError, KinchResult};
use crate::events::Event;
use crate::scoring::CompetitorScore;

pub const DEFAULT_OUTPUT_FILE: &str = "kinch.csv";

/// Order rows by KinchRank, highest first.
///
/// The sort is stable: tied competitors keep their input order.
pub fn rank_rows(rows: &[CompetitorScore]) -> Vec<&CompetitorScore> {
    let mut ranked: Vec<&CompetitorScore> = rows.iter().collect();
    ranked.sort_by(|a, b| {
        b.kinch_rank
            .partial_cmp(&a.kinch_rank)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Header row: `Person, KinchRank`, then every event code in column order
pub fn header() -> Vec<&'static str> {
    let mut header = vec!["Person", "KinchRank"];
    header.extend(Event::ALL.iter().map(|e| e.code()));
    header
}

/// Shortest decimal that round-trips, always with a fractional part
/// (`100.0`, `0.0`, `41.94055555555556`).
pub fn format_decimal(value: f64) -> String {
    let formatted = value.to_string();
    if value.is_finite() && !formatted.contains('.') {
        format!("{}.0", formatted)
    } else {
        formatted
    }
}

/// Write the ranked table as CSV.
pub fn write_ranked<W: Write>(rows: &[&CompetitorScore], writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(header())?;

    for row in rows {
        let mut record = Vec::with_capacity(2 + row.scores.len());
        record.push(row.person.clone());
        record.push(format_decimal(row.kinch_rank));
        record.extend(row.scores.iter().map(|s| format_decimal(*s)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the ranked table to `path` atomically, so a failed run never
/// leaves a partial file behind.
pub fn write_ranked_file(path: &Path, rows: &[&CompetitorScore]) -> KinchResult<()> {
    let write_error = |source: std::io::Error| KinchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::open(path).map_err(write_error)?;
    write_ranked(rows, &mut file).map_err(|e| write_error(e.into()))?;
    file.commit().map_err(write_error)?;

    Ok(())
}

/// Fail early if the directory `path` would be written into is missing.
pub fn check_destination(path: &Path) -> KinchResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(KinchError::OutputDestinationInvalid(parent))
    }
}
