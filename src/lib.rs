//! KinchRanks: one number for how good a speedcuber is across every WCA event.
//!
//! Each of the 18 events is scored 0–100 against a baseline (the best result
//! among the ranked competitors, or the world record) and the KinchRank is
//! the mean of those scores.

pub mod competitors;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod output;
pub mod records;
pub mod scoring;

pub use error::{KinchError, KinchResult};
pub use events::{Event, EVENT_COUNT};
