pub mod exports;
pub mod index;
pub mod row;
pub mod scan;

pub use exports::{Exports, DEFAULT_AVERAGES_FILE, DEFAULT_SINGLES_FILE};
pub use index::ResultsIndex;
pub use row::ResultRow;
pub use scan::{lookup_record_holder, lookup_result};
