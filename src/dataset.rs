//! CSV loader for the faculty feedback table.
//!
//! The file is read once at startup. `faculty_id`, `subject` and
//! `feedback_comment` are found by header name; every column from position 3
//! up to (but excluding) the last one is a rating column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use thiserror::Error;
use tracing::{debug, info};

/// Header position of the first rating column.
const FIRST_RATING_COLUMN: usize = 3;

/// Errors raised while loading the dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("header has {0} columns, need at least {min} to hold a rating column", min = FIRST_RATING_COLUMN + 2)]
    NoRatingColumns(usize),

    #[error("row {row}: empty faculty_id")]
    EmptyFacultyId { row: usize },

    #[error("row {row}: column `{column}` is not numeric: {value:?}")]
    InvalidRating {
        row: usize,
        column: String,
        value: String,
    },
}

/// One feedback row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub faculty_id: String,
    pub subject: String,
    /// One entry per rating column, in column order. `None` is an empty cell.
    pub ratings: Vec<Option<f64>>,
    pub feedback_comment: String,
}

/// Names of the rating columns, resolved from the header at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingColumns(Vec<String>);

impl RatingColumns {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The immutable feedback table.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: RatingColumns,
    records: Vec<FeedbackRecord>,
}

/// Header indexes of the named columns.
struct Layout {
    faculty_id: usize,
    subject: usize,
    comment: usize,
    ratings: std::ops::Range<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        if headers.len() < FIRST_RATING_COLUMN + 2 {
            return Err(DatasetError::NoRatingColumns(headers.len()));
        }

        Ok(Self {
            faculty_id: find("faculty_id")?,
            subject: find("subject")?,
            comment: find("feedback_comment")?,
            ratings: FIRST_RATING_COLUMN..headers.len() - 1,
        })
    }
}

impl Dataset {
    /// Builds a dataset directly from records. Every record must carry one
    /// rating per column.
    #[cfg(test)]
    pub(crate) fn new(columns: RatingColumns, records: Vec<FeedbackRecord>) -> Self {
        debug_assert!(records.iter().all(|r| r.ratings.len() == columns.len()));
        Self { columns, records }
    }

    /// Loads the dataset from a CSV file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;

        info!(
            rows = dataset.len(),
            faculties = dataset.faculty_count(),
            rating_columns = dataset.columns.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let layout = Layout::from_headers(&headers)?;

        let columns = RatingColumns::new(
            layout
                .ratings
                .clone()
                .map(|i| headers[i].trim().to_string())
                .collect(),
        );
        debug!(?columns, "Resolved rating columns");

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = result?;
            records.push(parse_record(&record, &layout, &columns, row)?);
        }

        Ok(Self { columns, records })
    }

    pub fn columns(&self) -> &RatingColumns {
        &self.columns
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for one faculty, in load order.
    pub fn rows_for<'a>(&'a self, faculty_id: &'a str) -> impl Iterator<Item = &'a FeedbackRecord> {
        self.records.iter().filter(move |r| r.faculty_id == faculty_id)
    }

    fn faculty_count(&self) -> usize {
        let mut ids: Vec<&str> = self.records.iter().map(|r| r.faculty_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

fn parse_record(
    record: &StringRecord,
    layout: &Layout,
    columns: &RatingColumns,
    row: usize,
) -> Result<FeedbackRecord, DatasetError> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let faculty_id = field(layout.faculty_id);
    if faculty_id.trim().is_empty() {
        return Err(DatasetError::EmptyFacultyId { row });
    }

    let ratings = layout
        .ratings
        .clone()
        .zip(columns.iter())
        .map(|(i, column)| {
            let value = field(i).trim();
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| DatasetError::InvalidRating {
                    row,
                    column: column.to_string(),
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeedbackRecord {
        faculty_id: faculty_id.to_string(),
        subject: field(layout.subject).to_string(),
        ratings,
        feedback_comment: field(layout.comment).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
feedback_id,faculty_id,subject,clarity,pace,feedback_comment
1,F100,Python,4,5,Great teacher
2,F101,AI,3,,Too fast
3,F100,Python,3,4,Clear examples
";

    #[test]
    fn test_from_reader_resolves_rating_columns() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        let cols: Vec<_> = ds.columns().iter().collect();
        assert_eq!(cols, vec!["clarity", "pace"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_from_reader_parses_fields() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let first = &ds.records()[0];

        assert_eq!(first.faculty_id, "F100");
        assert_eq!(first.subject, "Python");
        assert_eq!(first.ratings, vec![Some(4.0), Some(5.0)]);
        assert_eq!(first.feedback_comment, "Great teacher");
    }

    #[test]
    fn test_empty_rating_cell_is_missing() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.records()[1].ratings, vec![Some(3.0), None]);
    }

    #[test]
    fn test_rows_for_keeps_load_order() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let comments: Vec<_> = ds
            .rows_for("F100")
            .map(|r| r.feedback_comment.as_str())
            .collect();

        assert_eq!(comments, vec!["Great teacher", "Clear examples"]);
        assert_eq!(ds.rows_for("F999").count(), 0);
    }

    #[test]
    fn test_missing_comment_column() {
        let csv = "feedback_id,faculty_id,subject,clarity,pace,notes\n1,F1,AI,3,4,x\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("feedback_comment")));
    }

    #[test]
    fn test_header_without_rating_columns() {
        let csv = "feedback_id,faculty_id,subject,feedback_comment\n1,F1,AI,ok\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::NoRatingColumns(4)));
    }

    #[test]
    fn test_non_numeric_rating() {
        let csv = "feedback_id,faculty_id,subject,clarity,feedback_comment\n1,F1,AI,good,ok\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            DatasetError::InvalidRating { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "clarity");
                assert_eq!(value, "good");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_faculty_id() {
        let csv = "feedback_id,faculty_id,subject,clarity,feedback_comment\n1,F1,AI,3,ok\n2,,AI,4,ok\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyFacultyId { row: 2 }));
    }

    #[test]
    fn test_faculty_id_kept_verbatim() {
        let csv = "feedback_id,faculty_id,subject,clarity,feedback_comment\n1, F1 ,AI,3,ok\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(ds.records()[0].faculty_id, " F1 ");
        assert_eq!(ds.rows_for("F1").count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("/nonexistent/faculty_feedback.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }
}
