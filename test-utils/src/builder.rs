use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Category, Course};
///
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(Course)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run once all tables exist.
    ///
    /// # Arguments
    /// - `index` - Index statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the category, sub-category, course and lesson tables.
    ///
    /// Use this when testing catalogue functionality that doesn't involve students.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalogue_tables(self) -> Self {
        self.with_table(Category)
            .with_table(SubCategory)
            .with_table(Course)
            .with_table(Lesson)
    }

    /// Adds every table of the schema along with the composite unique indexes.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Category, SubCategory, Course, Lesson
    /// - Student
    /// - Enrollment, LessonCompletion
    /// - Payment, PaymentDetail
    /// - Review, Report
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_course_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_course_tables(self) -> Self {
        self.with_catalogue_tables()
            .with_table(Student)
            .with_table(Enrollment)
            .with_table(LessonCompletion)
            .with_table(Payment)
            .with_table(PaymentDetail)
            .with_table(Review)
            .with_table(Report)
            .with_index(
                Index::create()
                    .name("idx_enrollment_student_course")
                    .table(Enrollment)
                    .col(entity::enrollment::Column::StudentId)
                    .col(entity::enrollment::Column::CourseId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_lesson_completion_enrollment_lesson")
                    .table(LessonCompletion)
                    .col(entity::lesson_completion::Column::EnrollmentId)
                    .col(entity::lesson_completion::Column::LessonId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_review_student_course")
                    .table(Review)
                    .col(entity::review::Column::StudentId)
                    .col(entity::review::Column::CourseId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
