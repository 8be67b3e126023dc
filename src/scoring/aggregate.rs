use crate::events::EVENT_COUNT;

/// KinchRank of one competitor: the mean of all 18 event scores.
///
/// Events the competitor has not done count as zero.
pub fn final_rank(scores: &[f64; EVENT_COUNT]) -> f64 {
    scores.iter().sum::<f64>() / EVENT_COUNT as f64
}
