use std::fs::File;
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder};

use crate::error::{KinchError, KinchResult};

/// One row of a ranks export: `personId, eventId, best, worldRank, ...`.
///
/// `worldRank == "1"` marks the current world record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow<'a> {
    pub person: &'a str,
    pub event: &'a str,
    pub result: i64,
    pub is_record: bool,
}

impl<'a> ResultRow<'a> {
    /// Parse a raw record. Returns `None` for rows with fewer than four
    /// columns, non UTF-8 text, or a result that is not an integer (which
    /// also covers the header line of an unmodified WCA export).
    pub fn parse(record: &'a ByteRecord) -> Option<Self> {
        if record.len() < 4 {
            return None;
        }
        let field = |i: usize| record.get(i).and_then(|b| std::str::from_utf8(b).ok());

        let person = field(0)?;
        let event = field(1)?;
        let result = field(2)?.trim().parse().ok()?;
        let is_record = field(3)?.trim() == "1";

        Some(Self {
            person,
            event,
            result,
            is_record,
        })
    }
}

/// Open a tab-separated, header-less ranks export.
pub fn open_source(path: &Path) -> KinchResult<Reader<File>> {
    let file = File::open(path).map_err(|source| KinchError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file))
}

/// Visit every well-formed row of `path` in file order.
///
/// Returns `(rows_read, malformed_rows)`.
pub fn for_each_row<F>(path: &Path, mut visit: F) -> KinchResult<(usize, usize)>
where
    F: FnMut(&ResultRow<'_>),
{
    let mut reader = open_source(path)?;
    let mut record = ByteRecord::new();
    let mut rows = 0;
    let mut malformed = 0;

    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|source| KinchError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if !more {
            break;
        }
        rows += 1;

        match ResultRow::parse(&record) {
            Some(row) => visit(&row),
            None => {
                malformed += 1;
                tracing::debug!(
                    path = %path.display(),
                    line = rows,
                    "skipping malformed row"
                );
            }
        }
    }

    Ok((rows, malformed))
}
