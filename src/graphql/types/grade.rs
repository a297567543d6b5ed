use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Course, Student};
use crate::store;

/// Represents a grade a student received in a course
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Grade {
    pub id: i32,
    #[graphql(name = "courseId")]
    pub course_id: i32,
    #[graphql(name = "studentId")]
    pub student_id: i32,
    pub grade: f64,
}

impl From<store::Grade> for Grade {
    fn from(record: store::Grade) -> Self {
        Self {
            id: record.id,
            course_id: record.course_id,
            student_id: record.student_id,
            grade: record.grade,
        }
    }
}

#[ComplexObject]
impl Grade {
    /// The course this grade was given in, or null if `courseId` no longer
    /// matches a course
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store.course(self.course_id).cloned().map(Course::from))
    }

    /// The student this grade belongs to, or null if `studentId` no longer
    /// matches a student
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store.student(self.student_id).cloned().map(Student::from))
    }
}
