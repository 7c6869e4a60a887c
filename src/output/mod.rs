pub mod formatter;

pub use formatter::{
    format_finish_order, format_json, format_qualifiers, format_standings, format_team_scores,
    format_tsv, should_use_colors,
};
