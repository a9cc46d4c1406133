use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::analyzers::aggregate::column_means;
use crate::analyzers::types::{FacultyDetails, OrderedScores};
use crate::analyzers::utility::round2;
use crate::dataset::{Dataset, FeedbackRecord};
use crate::error::QueryError;

/// Number of comments returned with a faculty summary.
pub const SAMPLE_COMMENTS: usize = 5;

/// Builds the summary for one faculty.
///
/// Comments are drawn without replacement. When the faculty has fewer than
/// [`SAMPLE_COMMENTS`] rows, all of its comments are returned.
#[tracing::instrument(skip(dataset, rng))]
pub fn faculty_details<R: Rng + ?Sized>(
    dataset: &Dataset,
    faculty_id: &str,
    rng: &mut R,
) -> Result<FacultyDetails, QueryError> {
    let faculty_id = QueryError::check_faculty_id(faculty_id)?;
    let rows: Vec<&FeedbackRecord> = dataset.rows_for(faculty_id).collect();

    let Some(first) = rows.first() else {
        return Err(QueryError::FacultyNotFound(faculty_id.to_string()));
    };

    let means = column_means(dataset.columns().len(), rows.iter().copied());
    let average_scores = OrderedScores::new(
        dataset
            .columns()
            .iter()
            .zip(means)
            .map(|(name, m)| (name.to_string(), m.map(round2)))
            .collect(),
    );

    let sample_comments: Vec<String> = rows
        .choose_multiple(rng, SAMPLE_COMMENTS)
        .map(|r| r.feedback_comment.clone())
        .collect();

    if sample_comments.len() < SAMPLE_COMMENTS {
        debug!(
            available = sample_comments.len(),
            "Fewer comments than the sample size"
        );
    }

    Ok(FacultyDetails {
        faculty_id: faculty_id.to_string(),
        subject: first.subject.clone(),
        average_scores,
        sample_comments,
    })
}
