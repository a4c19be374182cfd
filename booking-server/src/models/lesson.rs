//! Lesson Model

use serde::{Deserialize, Serialize};

/// 课程 - 可预订的辅导课
///
/// `id` 是存储标识符的标准化字符串形式：Connected 模式下为 "lesson:key"，
/// Fallback 模式下为种子数据的固定编号 (如 "1")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub subject: String,
    pub location: String,
    pub price: f64,
    /// 剩余可订名额，永远不为负
    pub spaces: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Sparse update for the six mutable lesson fields.
///
/// Unknown JSON fields are ignored on deserialization; a patch carrying no
/// recognized field is rejected before it reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spaces: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LessonUpdate {
    /// True when no recognized field is present
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.location.is_none()
            && self.price.is_none()
            && self.spaces.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }

    /// Apply the provided fields to a lesson, leaving the rest untouched.
    /// Used by the in-memory backend; the connected backend merges the same
    /// fields store-side.
    pub fn apply_to(&self, lesson: &mut Lesson) {
        if let Some(subject) = &self.subject {
            lesson.subject = subject.clone();
        }
        if let Some(location) = &self.location {
            lesson.location = location.clone();
        }
        if let Some(price) = self.price {
            lesson.price = price;
        }
        if let Some(spaces) = self.spaces {
            lesson.spaces = spaces;
        }
        if let Some(description) = &self.description {
            lesson.description = description.clone();
        }
        if let Some(image) = &self.image {
            lesson.image = image.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson {
            id: "1".to_string(),
            subject: "Math".to_string(),
            location: "North London".to_string(),
            price: 95.0,
            spaces: 5,
            description: "Algebra and geometry".to_string(),
            image: "images/math.png".to_string(),
        }
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(LessonUpdate::default().is_empty());
        let update = LessonUpdate {
            spaces: Some(10),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let update: LessonUpdate =
            serde_json::from_str(r#"{"spaces": 10, "instructor": "nobody"}"#).unwrap();
        assert_eq!(update.spaces, Some(10));
        assert!(update.subject.is_none());
    }

    #[test]
    fn apply_to_leaves_absent_fields_untouched() {
        let mut target = lesson();
        let update = LessonUpdate {
            spaces: Some(10),
            price: Some(80.0),
            ..Default::default()
        };
        update.apply_to(&mut target);
        assert_eq!(target.spaces, 10);
        assert_eq!(target.price, 80.0);
        assert_eq!(target.subject, "Math");
        assert_eq!(target.location, "North London");
    }
}
