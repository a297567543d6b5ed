use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Course, Grade, Student};

pub struct Query;

#[Object]
impl Query {
    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store.courses().iter().cloned().map(Course::from).collect())
    }

    /// List of all students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store
            .students()
            .iter()
            .cloned()
            .map(Student::from)
            .collect())
    }

    /// List of all grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<Grade>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(store.grades().iter().cloned().map(Grade::from).collect())
    }

    /// A specific course by id
    async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(id
            .and_then(|id| store.course(id))
            .cloned()
            .map(Course::from))
    }

    /// A specific student by id
    async fn student(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(id
            .and_then(|id| store.student(id))
            .cloned()
            .map(Student::from))
    }

    /// A specific grade by id
    async fn grade(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Grade>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read();
        Ok(id.and_then(|id| store.grade(id)).cloned().map(Grade::from))
    }
}
