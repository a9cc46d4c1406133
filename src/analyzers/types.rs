//! Result types returned by the query operations.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A `name -> value` list that serializes as a JSON object, keeping list order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedScores<V>(Vec<(String, V)>);

impl<V> OrderedScores<V> {
    pub fn new(entries: Vec<(String, V)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Serialize> Serialize for OrderedScores<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Top faculties by overall score, best first.
pub type Leaderboard = OrderedScores<f64>;

/// Per-faculty summary served by `/faculty/{fid}`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FacultyDetails {
    pub faculty_id: String,
    pub subject: String,
    /// Rounded mean per rating column. `None` when the faculty has no value
    /// in that column.
    pub average_scores: OrderedScores<Option<f64>>,
    pub sample_comments: Vec<String>,
}

/// Rating columns a faculty should work on.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FacultySuggestions {
    pub faculty_id: String,
    pub overall_score: Option<f64>,
    pub weak_columns: Vec<String>,
    pub suggestions: Vec<String>,
}
