pub use super::category::Entity as Category;
pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_completion::Entity as LessonCompletion;
pub use super::payment::Entity as Payment;
pub use super::payment_detail::Entity as PaymentDetail;
pub use super::report::Entity as Report;
pub use super::review::Entity as Review;
pub use super::student::Entity as Student;
pub use super::sub_category::Entity as SubCategory;
