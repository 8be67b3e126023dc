pub mod export;
pub mod formatter;

pub use export::{
    check_destination, format_decimal, header, rank_rows, write_ranked, write_ranked_file,
    DEFAULT_OUTPUT_FILE,
};
pub use formatter::{
    format_baselines, format_competitor_detail, format_ranked_table, format_score,
    should_use_colors,
};
