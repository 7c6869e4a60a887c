use serde::{Deserialize, Serialize};

/// A single runner from a results paste.
///
/// A finisher's place is never stored here: it is implied by the finisher's
/// index in the finish-order list (place = index + 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finisher {
    pub name: String,
    pub team: String,
    pub time: String, // Display only, never compared
}

impl Finisher {
    pub fn new(name: impl Into<String>, team: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            time: time.into(),
        }
    }
}
