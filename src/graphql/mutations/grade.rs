use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Grade;

#[derive(Default)]
pub struct GradeMutation;

#[Object]
impl GradeMutation {
    /// Post a grade. Neither reference nor the value range is validated.
    async fn create_grade(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "courseId")] course_id: i32,
        #[graphql(name = "studentId")] student_id: i32,
        grade: f64,
    ) -> Result<Grade> {
        let context = ctx.data::<GraphQLContext>()?;
        let grade = context
            .store
            .write()
            .create_grade(course_id, student_id, grade);
        Ok(Grade::from(grade))
    }

    /// Delete a grade and return the remaining grades
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Grade>> {
        let context = ctx.data::<GraphQLContext>()?;
        let remaining = context.store.write().delete_grade(id);
        Ok(remaining.into_iter().map(Grade::from).collect())
    }
}
