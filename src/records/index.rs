use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::KinchResult;
use crate::events::{Event, EVENT_COUNT};

use super::row::for_each_row;

/// In-memory view of one ranks export, built in a single pass.
///
/// Answers the same questions as [`super::lookup_result`] and
/// [`super::lookup_record_holder`] without rescanning the file. Later rows
/// overwrite earlier ones, which keeps last-match-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct ResultsIndex {
    path: PathBuf,
    results: HashMap<String, [i64; EVENT_COUNT]>,
    records: HashMap<Event, i64>,
    rows: usize,
    malformed: usize,
}

impl ResultsIndex {
    /// Read `path` once and index every row for the 18 ranked events.
    /// Rows for other events (e.g. retired ones) are ignored.
    pub fn load(path: &Path) -> KinchResult<Self> {
        Self::load_filtered(path, |_| true)
    }

    /// Like [`ResultsIndex::load`], but only keeps results for `competitors`.
    /// Records are still taken from every row.
    pub fn load_for(path: &Path, competitors: &[String]) -> KinchResult<Self> {
        let wanted: HashSet<&str> = competitors.iter().map(String::as_str).collect();
        Self::load_filtered(path, |person| wanted.contains(person))
    }

    fn load_filtered<F>(path: &Path, keep: F) -> KinchResult<Self>
    where
        F: Fn(&str) -> bool,
    {
        let mut results = HashMap::new();
        let mut records = HashMap::new();

        let (rows, malformed) = for_each_row(path, |row| {
            // Exact match, same as the scans
            let Some(event) = Event::from_code(row.event) else {
                return;
            };
            if keep(row.person) {
                results
                    .entry(row.person.to_string())
                    .or_insert([0; EVENT_COUNT])[event.index()] = row.result;
            }
            if row.is_record {
                records.insert(event, row.result);
            }
        })?;

        if malformed > 0 {
            tracing::warn!(
                path = %path.display(),
                malformed,
                "skipped malformed rows"
            );
        }
        tracing::debug!(
            path = %path.display(),
            rows,
            competitors = results.len(),
            "indexed ranks export"
        );

        Ok(Self {
            path: path.to_path_buf(),
            results,
            records,
            rows,
            malformed,
        })
    }

    /// Raw result of `competitor` in `event`, `0` if none
    pub fn result(&self, competitor: &str, event: Event) -> i64 {
        self.results
            .get(competitor)
            .map(|r| r[event.index()])
            .unwrap_or(0)
    }

    /// Current record for `event`, `0` if none is flagged
    pub fn record(&self, event: Event) -> i64 {
        self.records.get(&event).copied().unwrap_or(0)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn malformed(&self) -> usize {
        self.malformed
    }
}
