use crate::dataset::Dataset;

/// Distinct faculty ids, sorted ascending.
pub fn list_faculties(dataset: &Dataset) -> Vec<String> {
    let mut ids: Vec<&str> = dataset
        .records()
        .iter()
        .map(|r| r.faculty_id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_faculties_sorted_and_distinct() {
        let csv = "\
feedback_id,faculty_id,subject,clarity,feedback_comment
1,F102,ML,3,a
2,F100,Python,4,b
3,F102,ML,5,c
4,F101,AI,2,d
";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(list_faculties(&ds), vec!["F100", "F101", "F102"]);
    }

    #[test]
    fn test_list_faculties_empty_dataset() {
        let csv = "feedback_id,faculty_id,subject,clarity,feedback_comment\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert!(list_faculties(&ds).is_empty());
    }
}
