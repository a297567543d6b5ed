use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Course;

#[derive(Default)]
pub struct CourseMutation;

#[Object]
impl CourseMutation {
    /// Create a course
    async fn create_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<Course> {
        let context = ctx.data::<GraphQLContext>()?;
        let course = context.store.write().create_course(name, description);
        Ok(Course::from(course))
    }

    /// Delete a course and return the remaining courses. Students and grades
    /// referencing it are left in place with a dangling `courseId`.
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let remaining = context.store.write().delete_course(id);
        Ok(remaining.into_iter().map(Course::from).collect())
    }
}
