use crate::analyzers::aggregate::{column_means, overall_score};
use crate::analyzers::types::FacultySuggestions;
use crate::analyzers::utility::round2;
use crate::dataset::{Dataset, FeedbackRecord};
use crate::error::QueryError;

/// Rating columns averaging below this value need improvement.
pub const WEAK_THRESHOLD: f64 = 3.0;

const NOTHING_TO_IMPROVE: &str = "No improvement required";

/// Returns `true` when a rounded column average falls below [`WEAK_THRESHOLD`].
///
/// A column with no values is never weak.
pub fn is_weak(average: Option<f64>) -> bool {
    matches!(average, Some(avg) if avg < WEAK_THRESHOLD)
}

/// Lists the rating columns a faculty scores weakly on, with one suggestion
/// per column.
#[tracing::instrument(skip(dataset))]
pub fn faculty_suggestions(
    dataset: &Dataset,
    faculty_id: &str,
) -> Result<FacultySuggestions, QueryError> {
    let faculty_id = QueryError::check_faculty_id(faculty_id)?;
    let rows: Vec<&FeedbackRecord> = dataset.rows_for(faculty_id).collect();
    if rows.is_empty() {
        return Err(QueryError::FacultyNotFound(faculty_id.to_string()));
    }

    let means = column_means(dataset.columns().len(), rows.iter().copied());

    let weak_columns: Vec<String> = dataset
        .columns()
        .iter()
        .zip(&means)
        .filter(|(_, m)| is_weak(m.map(round2)))
        .map(|(name, _)| name.to_string())
        .collect();

    let suggestions = if weak_columns.is_empty() {
        vec![NOTHING_TO_IMPROVE.to_string()]
    } else {
        weak_columns
            .iter()
            .map(|c| format!("{} needs improvement", c.replace('_', " ")))
            .collect()
    };

    Ok(FacultySuggestions {
        faculty_id: faculty_id.to_string(),
        overall_score: overall_score(&means).map(round2),
        weak_columns,
        suggestions,
    })
}
