use crate::events::{Event, EVENT_COUNT};
use crate::records::Exports;

use super::config::BaselineMode;
use super::normalize::decode_multi_blind;

/// The value each event is normalized against, chosen once per run.
///
/// Regular events hold the best (lowest) raw result; multi-blind holds the
/// best decoded score. `None` means no baseline could be found, and every
/// competitor scores zero in that event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baselines {
    values: [Option<f64>; EVENT_COUNT],
}

impl Baselines {
    pub fn get(&self, event: Event) -> Option<f64> {
        self.values[event.index()]
    }

    /// Events nobody can be compared against
    pub fn missing(&self) -> impl Iterator<Item = Event> + '_ {
        Event::ALL.into_iter().filter(|e| self.get(*e).is_none())
    }
}

/// Pick baselines for all 18 events with one strategy.
pub fn select_baselines(
    mode: BaselineMode,
    raw: &[[i64; EVENT_COUNT]],
    exports: &Exports,
) -> Baselines {
    let baselines = match mode {
        BaselineMode::Relative => select_relative(raw),
        BaselineMode::Absolute => select_absolute(exports),
    };

    for event in baselines.missing() {
        tracing::warn!(%event, %mode, "no baseline found, event scores zero");
    }
    baselines
}

/// Best result among the competitors in this run.
pub fn select_relative(raw: &[[i64; EVENT_COUNT]]) -> Baselines {
    let mut values = [None; EVENT_COUNT];
    for event in Event::ALL {
        let column = raw.iter().map(|row| row[event.index()]);
        values[event.index()] = if event.is_multi_blind() {
            best_decoded(column)
        } else {
            lowest_result(column).map(|v| v as f64)
        };
    }
    Baselines { values }
}

/// Current world record from the export each event is ranked on.
pub fn select_absolute(exports: &Exports) -> Baselines {
    let mut values = [None; EVENT_COUNT];
    for event in Event::ALL {
        let record = exports.record(event);
        values[event.index()] = if event.is_multi_blind() {
            Some(decode_multi_blind(record)).filter(|v| *v > 0.0)
        } else {
            Some(record).filter(|v| *v > 0).map(|v| v as f64)
        };
    }
    Baselines { values }
}

/// Lowest non-sentinel raw result
fn lowest_result(column: impl Iterator<Item = i64>) -> Option<i64> {
    column.filter(|v| *v > 0).min()
}

/// Highest positive decoded multi-blind score
fn best_decoded(column: impl Iterator<Item = i64>) -> Option<f64> {
    column
        .map(decode_multi_blind)
        .filter(|v| *v > 0.0)
        .fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MultiBlindResult;

    fn row_with(event: Event, value: i64) -> [i64; EVENT_COUNT] {
        let mut row = [0; EVENT_COUNT];
        row[event.index()] = value;
        row
    }

    #[test]
    fn test_relative_ignores_sentinel() {
        let raw = vec![
            row_with(Event::Cube3, 0),
            row_with(Event::Cube3, 30),
            row_with(Event::Cube3, 45),
        ];
        let baselines = select_relative(&raw);
        assert_eq!(baselines.get(Event::Cube3), Some(30.0));
    }

    #[test]
    fn test_relative_nobody_has_result() {
        let raw = vec![row_with(Event::Cube3, 0), row_with(Event::Cube3, 0)];
        let baselines = select_relative(&raw);
        assert_eq!(baselines.get(Event::Cube3), None);
        assert_eq!(baselines.missing().count(), EVENT_COUNT);
    }

    #[test]
    fn test_relative_no_competitors() {
        let baselines = select_relative(&[]);
        assert_eq!(baselines.missing().count(), EVENT_COUNT);
    }

    #[test]
    fn test_relative_multi_blind_picks_highest_decoded() {
        let better = MultiBlindResult {
            points: 20,
            seconds: 3000,
            missed: 0,
        };
        let worse = MultiBlindResult {
            points: 8,
            seconds: 1200,
            missed: 2,
        };
        let raw = vec![
            row_with(Event::MultiBlind, worse.pack()),
            row_with(Event::MultiBlind, 0),
            row_with(Event::MultiBlind, better.pack()),
        ];
        let baselines = select_relative(&raw);
        assert_eq!(baselines.get(Event::MultiBlind), Some(better.score()));
    }

    #[test]
    fn test_relative_multi_blind_without_points_is_missing() {
        let zero_points = MultiBlindResult {
            points: 0,
            seconds: 600,
            missed: 4,
        };
        let raw = vec![row_with(Event::MultiBlind, zero_points.pack())];
        let baselines = select_relative(&raw);
        assert_eq!(baselines.get(Event::MultiBlind), None);
    }

    #[test]
    fn test_relative_columns_are_independent() {
        let mut a = [0; EVENT_COUNT];
        a[Event::Cube2.index()] = 150;
        a[Event::Cube3.index()] = 700;
        let mut b = [0; EVENT_COUNT];
        b[Event::Cube2.index()] = 200;
        b[Event::Cube3.index()] = 600;
        let baselines = select_relative(&[a, b]);
        assert_eq!(baselines.get(Event::Cube2), Some(150.0));
        assert_eq!(baselines.get(Event::Cube3), Some(600.0));
        assert_eq!(baselines.get(Event::Cube4), None);
    }
}
