//! Fallback seed data
//!
//! The fixed lesson set loaded by the in-memory backend, and inserted into an
//! empty lesson table on first connected startup.

use crate::models::Lesson;

/// 示例课程 - 十门课，每门五个名额
pub fn sample_lessons() -> Vec<Lesson> {
    vec![
        lesson(
            "1",
            "Math",
            "North London",
            95.0,
            "Algebra and geometry foundations for ages 11 to 16",
            "images/math.png",
        ),
        lesson(
            "2",
            "English",
            "West London",
            80.0,
            "Reading comprehension and essay writing practice",
            "images/english.png",
        ),
        lesson(
            "3",
            "Chemistry",
            "Hendon",
            90.0,
            "GCSE chemistry with weekly lab-style exercises",
            "images/chemistry.png",
        ),
        lesson(
            "4",
            "Physics",
            "Colindale",
            65.0,
            "Mechanics and electricity, exam board aligned",
            "images/physics.png",
        ),
        lesson(
            "5",
            "Biology",
            "East London",
            50.0,
            "Cell biology and ecology in small groups",
            "images/biology.png",
        ),
        lesson(
            "6",
            "French",
            "Golders Green",
            70.0,
            "Conversational French with a native speaker",
            "images/french.png",
        ),
        lesson(
            "7",
            "Spanish",
            "South London",
            85.0,
            "Beginner to intermediate Spanish",
            "images/spanish.png",
        ),
        lesson(
            "8",
            "Music",
            "Kingsbury",
            60.0,
            "Piano and music theory up to grade five",
            "images/music.png",
        ),
        lesson(
            "9",
            "Art",
            "Harrow",
            45.0,
            "Drawing and painting fundamentals",
            "images/art.png",
        ),
        lesson(
            "10",
            "Computing",
            "Brent Cross",
            75.0,
            "Programming basics and computational thinking",
            "images/computing.png",
        ),
    ]
}

fn lesson(
    id: &str,
    subject: &str,
    location: &str,
    price: f64,
    description: &str,
    image: &str,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        subject: subject.to_string(),
        location: location.to_string(),
        price,
        spaces: 5,
        description: description.to_string(),
        image: image.to_string(),
    }
}
