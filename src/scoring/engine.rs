use super::aggregate::final_rank;
use super::baseline::{select_baselines, Baselines};
use super::config::BaselineMode;
use super::normalize::score;
use crate::events::{Event, EVENT_COUNT};
use crate::records::Exports;

/// How far the lookup stage has got, reported once per competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.processed as f64 / self.total as f64 * 100.0
        }
    }
}

/// One competitor's row: raw results, per-event scores and KinchRank.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorScore {
    pub person: String,
    pub raw: [i64; EVENT_COUNT],
    pub scores: [f64; EVENT_COUNT],
    pub kinch_rank: f64,
}

impl CompetitorScore {
    pub fn score(&self, event: Event) -> f64 {
        self.scores[event.index()]
    }

    /// Number of events with a recorded result
    pub fn events_done(&self) -> usize {
        self.raw.iter().filter(|r| **r > 0).count()
    }
}

/// Everything computed for one run, rows in input order.
#[derive(Debug, Clone)]
pub struct KinchTable {
    pub mode: BaselineMode,
    pub baselines: Baselines,
    pub rows: Vec<CompetitorScore>,
}

/// Look up, normalize and average every competitor.
///
/// `on_progress` is called after each competitor's 18 lookups.
pub fn compute_rankings<F>(
    competitors: &[String],
    exports: &Exports,
    mode: BaselineMode,
    mut on_progress: F,
) -> KinchTable
where
    F: FnMut(&str, Progress),
{
    let total = competitors.len();
    let raw: Vec<[i64; EVENT_COUNT]> = competitors
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let row = lookup_row(exports, person);
            on_progress(
                person,
                Progress {
                    processed: i + 1,
                    total,
                },
            );
            row
        })
        .collect();

    let baselines = select_baselines(mode, &raw, exports);

    let rows = competitors
        .iter()
        .zip(raw)
        .map(|(person, raw)| score_row(person, raw, &baselines))
        .collect();

    KinchTable {
        mode,
        baselines,
        rows,
    }
}

/// Raw results for all 18 events: averages for the averaged events,
/// singles for the best-of events.
fn lookup_row(exports: &Exports, person: &str) -> [i64; EVENT_COUNT] {
    let mut row = [0; EVENT_COUNT];
    for event in Event::ALL {
        row[event.index()] = exports.result(person, event);
    }
    row
}

pub fn score_row(person: &str, raw: [i64; EVENT_COUNT], baselines: &Baselines) -> CompetitorScore {
    let mut scores = [0.0; EVENT_COUNT];
    for event in Event::ALL {
        scores[event.index()] = score(event, raw[event.index()], baselines.get(event));
    }

    CompetitorScore {
        person: person.to_string(),
        raw,
        scores,
        kinch_rank: final_rank(&scores),
    }
}
