//! Lesson Search
//!
//! Case-insensitive substring filtering over a derived text haystack. The
//! matching is deliberately plain: no tokenization, no fuzzy scoring, no
//! ranking. Existing clients rely on exact substring semantics.

use crate::models::Lesson;

/// Filter lessons by a free-text query.
///
/// An empty query returns the input unchanged (the query is not trimmed, so
/// `" "` is a real one-character search). Otherwise a lesson is kept iff the
/// lowercased query appears as a substring of its haystack
/// `"{subject} {location} {price} {spaces}"`, also lowercased. The filter is
/// stable: result order equals input order.
pub fn filter_lessons(lessons: Vec<Lesson>, query: &str) -> Vec<Lesson> {
    if query.is_empty() {
        return lessons;
    }
    let needle = query.to_lowercase();
    lessons
        .into_iter()
        .filter(|lesson| haystack(lesson).contains(&needle))
        .collect()
}

/// The searchable text of a lesson. Numeric fields use their display form,
/// so "95" matches a price of 95.0 and "5" matches five remaining spaces.
fn haystack(lesson: &Lesson) -> String {
    format!(
        "{} {} {} {}",
        lesson.subject, lesson.location, lesson.price, lesson.spaces
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, subject: &str, location: &str, price: f64, spaces: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            subject: subject.to_string(),
            location: location.to_string(),
            price,
            spaces,
            description: String::new(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<Lesson> {
        vec![
            lesson("1", "Math", "North London", 95.0, 5),
            lesson("2", "English", "West London", 80.0, 5),
            lesson("3", "Chemistry", "Hendon", 19.5, 3),
        ]
    }

    #[test]
    fn empty_query_returns_everything_unchanged() {
        let lessons = sample();
        let result = filter_lessons(lessons.clone(), "");
        assert_eq!(result, lessons);
    }

    #[test]
    fn matches_location_case_insensitively() {
        let result = filter_lessons(sample(), "north");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].subject, "Math");

        let shouting = filter_lessons(sample(), "NORTH");
        assert_eq!(shouting.len(), 1);
        assert_eq!(shouting[0].id, "1");
    }

    #[test]
    fn matches_partial_subject() {
        let result = filter_lessons(sample(), "chem");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].subject, "Chemistry");
    }

    #[test]
    fn matches_numeric_price_and_spaces() {
        let by_price = filter_lessons(sample(), "19.5");
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].id, "3");

        // spaces 3 appears only in the Chemistry haystack
        let by_spaces = filter_lessons(sample(), " 3");
        assert_eq!(by_spaces.len(), 1);
        assert_eq!(by_spaces[0].id, "3");
    }

    #[test]
    fn shared_substring_matches_multiple_lessons() {
        let result = filter_lessons(sample(), "london");
        assert_eq!(result.len(), 2);
        // stable: input order preserved
        assert_eq!(result[0].id, "1");
        assert_eq!(result[1].id, "2");
    }

    #[test]
    fn no_match_yields_empty_result() {
        assert!(filter_lessons(sample(), "piano").is_empty());
    }

    #[test]
    fn results_are_always_a_subset_of_the_input() {
        let lessons = sample();
        for query in ["", "o", "london", "95", "zzz", " "] {
            let result = filter_lessons(lessons.clone(), query);
            assert!(result.iter().all(|found| lessons.contains(found)));
        }
    }
}
