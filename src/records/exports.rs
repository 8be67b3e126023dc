use std::path::Path;

use crate::error::KinchResult;
use crate::events::{Event, SourceKind};

use super::ResultsIndex;

pub const DEFAULT_AVERAGES_FILE: &str = "WCA_export_RanksAverage.tsv";
pub const DEFAULT_SINGLES_FILE: &str = "WCA_export_RanksSingle.tsv";

/// The averages and singles exports, each indexed once.
#[derive(Debug, Clone, Default)]
pub struct Exports {
    pub averages: ResultsIndex,
    pub singles: ResultsIndex,
}

impl Exports {
    pub fn load(averages: &Path, singles: &Path) -> KinchResult<Self> {
        Ok(Self {
            averages: ResultsIndex::load(averages)?,
            singles: ResultsIndex::load(singles)?,
        })
    }

    /// Load both exports, keeping results only for `competitors`.
    pub fn load_for(averages: &Path, singles: &Path, competitors: &[String]) -> KinchResult<Self> {
        Ok(Self {
            averages: ResultsIndex::load_for(averages, competitors)?,
            singles: ResultsIndex::load_for(singles, competitors)?,
        })
    }

    /// The export an event is ranked from
    pub fn source(&self, kind: SourceKind) -> &ResultsIndex {
        match kind {
            SourceKind::Average => &self.averages,
            SourceKind::Single => &self.singles,
        }
    }

    pub fn result(&self, competitor: &str, event: Event) -> i64 {
        self.source(event.source()).result(competitor, event)
    }

    pub fn record(&self, event: Event) -> i64 {
        self.source(event.source()).record(event)
    }
}
