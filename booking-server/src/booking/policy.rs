//! Availability policy
//!
//! The single source of the reservation rule. The pre-check here and the
//! store-side conditional decrement enforce the same condition; changing one
//! without the other breaks the all-or-nothing guarantee.

use crate::models::Lesson;

/// A reservation may proceed iff the quantity is positive and does not
/// exceed the remaining spaces.
pub fn can_reserve(lesson: &Lesson, quantity: u32) -> bool {
    quantity > 0 && quantity <= lesson.spaces
}
