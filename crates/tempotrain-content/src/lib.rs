//! tempotrain-content — Built-in content.
//!
//! Everything the tool ships with out of the box: the quiz catalog and its
//! practice questions, the timed exam, the advisor roster with canned
//! replies, the seeded ticket board, and the dashboard figures. All of it is
//! static, in-memory data; nothing is persisted between runs.

pub mod advisors;
pub mod board;
pub mod dashboard;
pub mod exam;
pub mod knowledge;
pub mod quizzes;
