use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(context: GraphQLContext) -> GraphQLSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(context)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::store::{self, SharedStore, Store};

    fn schema_with(fixtures: FixtureSet) -> GraphQLSchema {
        build_schema(GraphQLContext::new(SharedStore::new(Store::new(fixtures))))
    }

    #[test]
    fn sdl_exposes_the_entity_types_and_operations() {
        let sdl = schema_with(FixtureSet::default()).sdl();
        assert!(sdl.contains("type Course"));
        assert!(sdl.contains("type Student"));
        assert!(sdl.contains("type Grade"));
        assert!(sdl.contains("createCourse"));
        assert!(sdl.contains("deleteStudent"));
        assert!(sdl.contains("courseId: Int!"));
    }

    #[test]
    fn executes_a_lookup_against_the_store() {
        let fixtures = FixtureSet {
            courses: vec![store::Course {
                id: 1,
                name: "Math".to_string(),
                description: "Numbers".to_string(),
            }],
            ..Default::default()
        };
        let schema = schema_with(fixtures);

        let response = tokio_test::block_on(schema.execute("{ course(id: 1) { name } }"));
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().expect("data serializes");
        assert_eq!(data["course"]["name"], "Math");
    }
}
