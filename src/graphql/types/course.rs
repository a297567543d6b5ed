use async_graphql::*;

use crate::store;

/// Represents a course offered to students
#[derive(SimpleObject, Clone, Debug)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<store::Course> for Course {
    fn from(record: store::Course) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}
