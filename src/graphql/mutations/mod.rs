mod course;
mod grade;
mod student;

use async_graphql::*;

/// Mutation root combining the per-entity mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub course::CourseMutation,
    pub student::StudentMutation,
    pub grade::GradeMutation,
);
