use super::types::Finisher;

/// Field separator used by results sites when a table is copied to the clipboard.
const FIELD_SEPARATOR: char = '\t';

/// Minimum number of fields a line needs to yield a finisher.
const MIN_FIELDS: usize = 5;

const NAME_FIELD: usize = 1;
const TEAM_FIELD: usize = 3;
const TIME_FIELD: usize = 4;

/// Counts collected while parsing, reported in verbose mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub kept: usize,
    pub dropped: usize,
}

/// Parse pasted results text into the finish-order list.
///
/// Each line is split on tabs. Lines with fewer than five fields are dropped
/// silently; everything else becomes a finisher built from fields 1 (name),
/// 3 (team) and 4 (time), trimmed. Output order equals input line order.
pub fn parse_results(text: &str) -> Vec<Finisher> {
    parse_results_with_stats(text).0
}

/// Same as [`parse_results`], also returning how many lines were kept and dropped.
pub fn parse_results_with_stats(text: &str) -> (Vec<Finisher>, ParseStats) {
    let mut stats = ParseStats::default();
    let finishers: Vec<Finisher> = text
        .split('\n')
        .filter_map(|line| {
            let finisher = parse_line(line);
            if finisher.is_some() {
                stats.kept += 1;
            } else {
                stats.dropped += 1;
            }
            finisher
        })
        .collect();
    (finishers, stats)
}

fn parse_line(line: &str) -> Option<Finisher> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < MIN_FIELDS {
        return None;
    }
    Some(Finisher {
        name: parts[NAME_FIELD].trim().to_string(),
        team: parts[TEAM_FIELD].trim().to_string(),
        time: parts[TIME_FIELD].trim().to_string(),
    })
}
