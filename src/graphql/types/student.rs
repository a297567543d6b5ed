use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Course;
use crate::store;

/// Represents a student enrolled in a course
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    #[graphql(name = "courseId")]
    pub course_id: i32,
}

impl From<store::Student> for Student {
    fn from(record: store::Student) -> Self {
        Self {
            id: record.id,
            name: record.name,
            lastname: record.lastname,
            course_id: record.course_id,
        }
    }
}

#[ComplexObject]
impl Student {
    /// The course this student is enrolled in, or null if `courseId` no
    /// longer matches a course
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store.course(self.course_id).cloned().map(Course::from))
    }
}
