use tracing::debug;

use crate::analyzers::aggregate::{column_means, group_by_faculty, overall_score};
use crate::analyzers::types::{Leaderboard, OrderedScores};
use crate::analyzers::utility::round2;
use crate::dataset::Dataset;

/// Number of faculties on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;

/// Ranks faculties by overall score, best first, and keeps the top
/// [`LEADERBOARD_SIZE`].
///
/// The sort is stable, so equal scores keep the order in which the faculties
/// first appear in the dataset. Faculties without any rating value are not
/// ranked.
#[tracing::instrument(skip(dataset))]
pub fn leaderboard(dataset: &Dataset) -> Leaderboard {
    let columns = dataset.columns().len();

    let mut scored: Vec<(&str, f64)> = group_by_faculty(dataset)
        .into_iter()
        .filter_map(|(faculty_id, rows)| {
            let means = column_means(columns, rows.iter().copied());
            let score = overall_score(&means);
            if score.is_none() {
                debug!(faculty_id, "No rating values, skipping");
            }
            score.map(|s| (faculty_id, s))
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    OrderedScores::new(
        scored
            .into_iter()
            .take(LEADERBOARD_SIZE)
            .map(|(faculty_id, score)| (faculty_id.to_string(), round2(score)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_top_five_descending() {
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,pace,feedback_comment
1,F1,A,1,1,x
2,F2,B,2,2,x
3,F3,C,3,3,x
4,F4,D,4,4,x
5,F5,E,5,5,x
6,F6,F,4.5,4.5,x
7,F1,A,2,2,x
",
        );

        let board = leaderboard(&ds);
        let entries: Vec<_> = board.iter().map(|(k, v)| (k, *v)).collect();

        assert_eq!(
            entries,
            vec![("F5", 5.0), ("F6", 4.5), ("F4", 4.0), ("F3", 3.0), ("F2", 2.0)]
        );
    }

    #[test]
    fn test_fewer_faculties_than_board_size() {
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,feedback_comment
1,F1,A,3,x
2,F2,B,4,x
3,F3,C,2,x
4,F4,D,5,x
",
        );

        let board = leaderboard(&ds);
        assert_eq!(board.len(), 4);
        let ids: Vec<_> = board.keys().collect();
        assert_eq!(ids, vec!["F4", "F2", "F1", "F3"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,feedback_comment
1,F9,A,4,x
2,F1,B,4,x
3,F5,C,4,x
",
        );

        let ids: Vec<_> = leaderboard(&ds).keys().map(str::to_string).collect();
        assert_eq!(ids, vec!["F9", "F1", "F5"]);
    }

    #[test]
    fn test_two_step_mean_and_rounding() {
        // clarity mean 3.0, pace mean (4+5+5)/3; overall (3 + 14/3) / 2 = 3.8333
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,pace,feedback_comment
1,F1,A,3,4,x
2,F1,A,,5,x
3,F1,A,,5,x
",
        );

        assert_eq!(leaderboard(&ds).get("F1"), Some(&3.83));
    }

    #[test]
    fn test_faculty_without_ratings_is_not_ranked() {
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,feedback_comment
1,F1,A,,x
2,F2,B,3,x
",
        );

        let board = leaderboard(&ds);
        assert_eq!(board.len(), 1);
        assert!(board.get("F1").is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let ds = dataset(
            "\
feedback_id,faculty_id,subject,clarity,feedback_comment
1,F1,A,3,x
2,F2,B,3,x
3,F3,C,4,x
",
        );

        assert_eq!(leaderboard(&ds), leaderboard(&ds));
    }
}
