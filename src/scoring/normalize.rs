use crate::events::Event;

/// A packed multi-blind result.
///
/// The exports store multi-blind as one decimal integer `0DDTTTTTMM`:
/// `99 - DD` is the points (solved minus missed), `TTTTT` the time in
/// seconds (`99999` when unknown) and `MM` the missed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiBlindResult {
    pub points: i64,
    pub seconds: i64,
    pub missed: i64,
}

impl MultiBlindResult {
    pub const UNKNOWN_TIME: i64 = 99_999;
    const HOUR: f64 = 3600.0;

    /// Split a packed value into its fields. `0` means no result.
    pub fn unpack(raw: i64) -> Option<Self> {
        if raw <= 0 {
            return None;
        }
        Some(Self {
            points: 99 - raw / 10_000_000,
            seconds: raw / 100 % 100_000,
            missed: raw % 100,
        })
    }

    pub fn pack(self) -> i64 {
        (99 - self.points) * 10_000_000 + self.seconds * 100 + self.missed
    }

    /// Fraction of the hour left on the clock. Not clamped, so attempts
    /// longer than an hour get a negative bonus; unknown time gets none.
    pub fn hour_bonus(self) -> f64 {
        if self.seconds == Self::UNKNOWN_TIME {
            0.0
        } else {
            (Self::HOUR - self.seconds as f64) / Self::HOUR
        }
    }

    /// Points plus proportion of the hour left; more points always wins.
    pub fn score(self) -> f64 {
        if self.points <= 0 {
            0.0
        } else {
            self.points as f64 + self.hour_bonus()
        }
    }
}

/// Decoded multi-blind score of a packed raw value, `0.0` for no result
pub fn decode_multi_blind(raw: i64) -> f64 {
    MultiBlindResult::unpack(raw).map_or(0.0, MultiBlindResult::score)
}

/// Score a lower-is-better result against its baseline.
pub fn score_regular(raw: i64, baseline: Option<f64>) -> f64 {
    match baseline {
        Some(best) if raw > 0 && best > 0.0 => best / raw as f64 * 100.0,
        _ => 0.0,
    }
}

/// Score a packed multi-blind result against a decoded baseline.
pub fn score_multi_blind(raw: i64, baseline: Option<f64>) -> f64 {
    match baseline {
        Some(best) if best > 0.0 => decode_multi_blind(raw) / best * 100.0,
        _ => 0.0,
    }
}

/// Score `raw` in `event`. `baseline` is `None` when no one has a result
/// to compare against, which scores the event as zero.
pub fn score(event: Event, raw: i64, baseline: Option<f64>) -> f64 {
    if event.is_multi_blind() {
        score_multi_blind(raw, baseline)
    } else {
        score_regular(raw, baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sentinel_scores_zero() {
        assert_eq!(score_regular(0, Some(50.0)), 0.0);
        assert_eq!(score_regular(0, None), 0.0);
        assert_eq!(score_multi_blind(0, Some(41.0)), 0.0);
    }

    #[test]
    fn test_equal_to_baseline_is_hundred() {
        assert_eq!(score_regular(50, Some(50.0)), 100.0);
    }

    #[test]
    fn test_double_baseline_is_fifty() {
        assert_eq!(score_regular(100, Some(50.0)), 50.0);
    }

    #[test]
    fn test_missing_or_non_positive_baseline() {
        assert_eq!(score_regular(100, None), 0.0);
        assert_eq!(score_regular(100, Some(0.0)), 0.0);
        assert_eq!(score_regular(100, Some(-5.0)), 0.0);
        assert_eq!(score_multi_blind(580021400, None), 0.0);
        assert_eq!(score_multi_blind(580021400, Some(0.0)), 0.0);
    }

    #[test]
    fn test_decode_zero() {
        assert_eq!(decode_multi_blind(0), 0.0);
    }

    #[test]
    fn test_decode_41_points_214_seconds() {
        // DD=58, TTTTT=00214, MM=00
        let decoded = decode_multi_blind(580021400);
        assert_relative_eq!(decoded, 41.0 + (3600.0 - 214.0) / 3600.0);
        assert_relative_eq!(decoded, 41.9406, epsilon = 1e-4);
    }

    #[test]
    fn test_decode_fields() {
        let result = MultiBlindResult::unpack(580325401).unwrap();
        assert_eq!(result.points, 41);
        assert_eq!(result.seconds, 3254);
        assert_eq!(result.missed, 1);
    }

    #[test]
    fn test_decode_no_points() {
        // 99 - 99 = 0 points
        assert_eq!(decode_multi_blind(990360002), 0.0);
    }

    #[test]
    fn test_decode_over_an_hour_is_not_clamped() {
        let result = MultiBlindResult {
            points: 2,
            seconds: 5400,
            missed: 0,
        };
        assert_relative_eq!(decode_multi_blind(result.pack()), 1.5);
    }

    #[test]
    fn test_decode_unknown_time() {
        let result = MultiBlindResult {
            points: 5,
            seconds: MultiBlindResult::UNKNOWN_TIME,
            missed: 1,
        };
        assert_eq!(decode_multi_blind(result.pack()), 5.0);
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let original = MultiBlindResult {
            points: 11,
            seconds: 45 * 60,
            missed: 3,
        };
        let decoded = MultiBlindResult::unpack(original.pack()).unwrap();
        assert_eq!(decoded, original);
        assert_relative_eq!(decoded.score(), 11.25);
    }

    #[test]
    fn test_multi_blind_score_against_record() {
        // 11 points in 45:00 against 41/41 in 54:14
        let record = MultiBlindResult {
            points: 41,
            seconds: 54 * 60 + 14,
            missed: 0,
        };
        let attempt = MultiBlindResult {
            points: 11,
            seconds: 45 * 60,
            missed: 0,
        };
        let score = score_multi_blind(attempt.pack(), Some(record.score()));
        assert_relative_eq!(score, 11.25 / record.score() * 100.0);
        assert_relative_eq!(score, 27.37, epsilon = 0.01);
    }

    #[test]
    fn test_score_dispatches_on_event() {
        assert_eq!(score(Event::Cube3, 100, Some(50.0)), 50.0);
        let packed = MultiBlindResult {
            points: 10,
            seconds: 3600,
            missed: 0,
        }
        .pack();
        assert_eq!(score(Event::MultiBlind, packed, Some(20.0)), 50.0);
    }
}
