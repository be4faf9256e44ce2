//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent entity take its ID up front,
//! and the `helpers` module wires whole hierarchies together.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::create_student(&db).await?;
//!     let (category, course) = factory::helpers::create_course_with_category(&db).await?;
//!
//!     // Customise through the builder
//!     let lesson = factory::lesson::LessonFactory::new(&db, course.id)
//!         .title("Ownership")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `category` / `sub_category` - Catalogue entities
//! - `course` / `lesson` - Course content
//! - `student` - Students
//! - `enrollment` / `lesson_completion` - Participation and progress
//! - `payment` - Payments with their detail rows
//! - `review` / `report` - Student feedback
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod lesson;
pub mod lesson_completion;
pub mod payment;
pub mod report;
pub mod review;
pub mod student;
pub mod sub_category;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use course::create_course;
pub use enrollment::create_enrollment;
pub use lesson::{create_lesson, create_lessons};
pub use lesson_completion::create_lesson_completion;
pub use payment::create_approved_payment;
pub use report::create_report;
pub use review::create_review;
pub use student::create_student;
pub use sub_category::create_sub_category;
