use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Student;

#[derive(Default)]
pub struct StudentMutation;

#[Object]
impl StudentMutation {
    /// Create a student. `courseId` is not checked against the course
    /// collection.
    async fn create_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        #[graphql(name = "courseId")] course_id: i32,
    ) -> Result<Student> {
        let context = ctx.data::<GraphQLContext>()?;
        let student = context
            .store
            .write()
            .create_student(name, lastname, course_id);
        Ok(Student::from(student))
    }

    /// Delete a student with their assigned grades and return the remaining
    /// students
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let remaining = context.store.write().delete_student(id);
        Ok(remaining.into_iter().map(Student::from).collect())
    }
}
