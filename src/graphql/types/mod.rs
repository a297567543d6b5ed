pub mod course;
pub mod grade;
pub mod student;

pub use course::*;
pub use grade::*;
pub use student::*;
