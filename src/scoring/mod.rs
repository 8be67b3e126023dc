pub mod aggregate;
pub mod baseline;
pub mod config;
pub mod engine;
pub mod normalize;

pub use aggregate::final_rank;
pub use baseline::{select_absolute, select_baselines, select_relative, Baselines};
pub use config::BaselineMode;
pub use engine::{compute_rankings, score_row, CompetitorScore, KinchTable, Progress};
pub use normalize::{decode_multi_blind, score, score_multi_blind, score_regular, MultiBlindResult};
