use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::events::{Event, EVENT_COUNT};
use crate::scoring::{Baselines, CompetitorScore};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two decimals, right-aligned by the caller
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Ranked competitors as a table: index, KinchRank, events done, identifier.
pub fn format_ranked_table(rows: &[&CompetitorScore], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No competitors ranked.".to_string();
    }

    let index_width = rows.len().to_string().len() + 1;
    let score_width = 6;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>width$}", format!("{}.", idx + 1), width = index_width);
            let score_str = format!(
                "{:>width$}",
                format_score(row.kinch_rank),
                width = score_width
            );
            let done = format!("{:>2}/{}", row.events_done(), EVENT_COUNT);

            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index_str.dimmed(),
                    score_str.bold(),
                    done.dimmed(),
                    row.person.cyan()
                )
            } else {
                format!("{} {}  {}  {}", index_str, score_str, done, row.person)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One competitor's per-event breakdown (for verbose mode)
pub fn format_competitor_detail(row: &CompetitorScore, use_colors: bool) -> String {
    let mut lines = vec![if use_colors {
        format!("{}  {}", row.person.bold(), format_score(row.kinch_rank).bold())
    } else {
        format!("{}  {}", row.person, format_score(row.kinch_rank))
    }];

    for event in Event::ALL {
        let raw = row.raw[event.index()];
        if raw == 0 {
            continue;
        }
        lines.push(format!(
            "  {:<7}{:>12}{:>9}",
            event.code(),
            raw,
            format_score(row.score(event))
        ));
    }
    lines.join("\n")
}

/// Baseline per event, `-` where none was found
pub fn format_baselines(baselines: &Baselines) -> String {
    Event::ALL
        .iter()
        .map(|event| match baselines.get(*event) {
            Some(value) if event.is_multi_blind() => format!("{:<7}{:>12.4}", event.code(), value),
            Some(value) => format!("{:<7}{:>12}", event.code(), value),
            None => format!("{:<7}{:>12}", event.code(), "-"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::select_relative;

    fn row(person: &str, kinch_rank: f64) -> CompetitorScore {
        CompetitorScore {
            person: person.to_string(),
            raw: [0; EVENT_COUNT],
            scores: [0.0; EVENT_COUNT],
            kinch_rank,
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(41.94055), "41.94");
        assert_eq!(format_score(100.0), "100.00");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn test_format_ranked_table_empty() {
        assert_eq!(format_ranked_table(&[], false), "No competitors ranked.");
    }

    #[test]
    fn test_format_ranked_table_rows() {
        let mut a = row("2009ZEMD01", 72.346);
        a.raw[1] = 347;
        let b = row("2012PARK03", 5.0);
        let result = format_ranked_table(&[&a, &b], false);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1.  72.35   1/18  2009ZEMD01");
        assert_eq!(lines[1], "2.   5.00   0/18  2012PARK03");
    }

    #[test]
    fn test_format_ranked_table_index_width() {
        let rows: Vec<CompetitorScore> = (0..10).map(|i| row(&format!("P{}", i), 1.0)).collect();
        let refs: Vec<&CompetitorScore> = rows.iter().collect();
        let result = format_ranked_table(&refs, false);
        assert!(result.starts_with(" 1."));
        assert!(result.lines().last().unwrap().starts_with("10."));
    }

    #[test]
    fn test_format_competitor_detail_skips_missing_events() {
        let mut a = row("X", 10.0);
        a.raw[Event::Cube3.index()] = 700;
        a.scores[Event::Cube3.index()] = 50.0;
        let result = format_competitor_detail(&a, false);

        assert!(result.starts_with("X  10.00"));
        assert!(result.contains("333"));
        assert!(result.contains("700"));
        assert!(result.contains("50.00"));
        assert_eq!(result.lines().count(), 2);
    }

    #[test]
    fn test_format_baselines_marks_missing() {
        let mut raw = [0; EVENT_COUNT];
        raw[Event::Cube2.index()] = 150;
        let baselines = select_relative(&[raw]);
        let result = format_baselines(&baselines);

        assert_eq!(result.lines().count(), EVENT_COUNT);
        assert!(result.lines().next().unwrap().ends_with("150"));
        assert!(result.lines().nth(1).unwrap().ends_with("-"));
    }
}
