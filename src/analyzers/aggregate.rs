//! Grouping and two-step averaging shared by the query operations.

use crate::analyzers::utility::mean;
use crate::dataset::{Dataset, FeedbackRecord};

/// Mean of each rating column over `rows`, in column order.
pub fn column_means<'a, I>(column_count: usize, rows: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
    I::IntoIter: Clone,
{
    let rows = rows.into_iter();
    (0..column_count)
        .map(|col| mean(rows.clone().map(|r| r.ratings[col])))
        .collect()
}

/// Collapses per-column means into one score: the mean of the column means.
pub fn overall_score(column_means: &[Option<f64>]) -> Option<f64> {
    mean(column_means.iter().copied())
}

/// Groups rows by faculty, in the order each faculty first appears.
pub fn group_by_faculty(dataset: &Dataset) -> Vec<(&str, Vec<&FeedbackRecord>)> {
    let mut groups: Vec<(&str, Vec<&FeedbackRecord>)> = Vec::new();
    let mut index = std::collections::HashMap::new();

    for record in dataset.records() {
        let slot = *index.entry(record.faculty_id.as_str()).or_insert_with(|| {
            groups.push((record.faculty_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
}
