//! Turns raw CSV records into a [`ProblemSet`].
//!
//! Rows without exactly two fields are dropped rather than kept as blank
//! placeholders, so every problem shown to the user has a question and an
//! expected answer.

use crate::model::{Problem, ProblemSet, RawRecord};

/// Build problems from records, skipping rows that are not `question,answer`.
pub fn build_problems(records: Vec<RawRecord>) -> ProblemSet {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let field_count = record.len();
            let problem = Problem::from_record(record);
            if problem.is_none() {
                tracing::warn!(
                    "skipping row {}: expected 2 fields, found {}",
                    index + 1,
                    field_count
                );
            }
            problem
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> RawRecord {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn builds_problems_in_order() {
        let records = vec![
            record(&["5+5", "10"]),
            record(&["1+1", "2"]),
            record(&["8+3", "11"]),
            record(&["1+2", "3"]),
        ];

        let problems = build_problems(records);

        let questions: Vec<&str> = problems.iter().map(Problem::question).collect();
        let answers: Vec<&str> = problems.iter().map(Problem::answer).collect();
        assert_eq!(questions, vec!["5+5", "1+1", "8+3", "1+2"]);
        assert_eq!(answers, vec!["10", "2", "11", "3"]);
    }

    #[test]
    fn drops_malformed_rows() {
        let records = vec![
            record(&["5+5", "10"]),
            record(&["orphan"]),
            record(&["a", "b", "c"]),
            record(&["1+1", "2"]),
        ];

        let problems = build_problems(records);

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0], Problem::new("5+5", "10"));
        assert_eq!(problems[1], Problem::new("1+1", "2"));
    }

    #[test]
    fn keeps_text_exactly() {
        let problems = build_problems(vec![record(&["  spaced ", " Answer "])]);
        assert_eq!(problems[0].question(), "  spaced ");
        assert_eq!(problems[0].answer(), " Answer ");
    }

    #[test]
    fn empty_input_builds_empty_set() {
        assert!(build_problems(Vec::new()).is_empty());
    }
}
