pub mod parser;
pub mod types;

pub use parser::{parse_results, parse_results_with_stats, ParseStats};
pub use types::Finisher;
