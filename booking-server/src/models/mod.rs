//! Wire-facing Data Models
//!
//! JSON shapes shared by the HTTP API and the booking service. Store-native
//! records live in [`crate::db::models`].

pub mod lesson;
pub mod order;

pub use lesson::{Lesson, LessonUpdate};
pub use order::{Order, OrderCreate, OrderItem, OrderReceipt, PlaceOrderRequest};
