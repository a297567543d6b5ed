use crate::store::SharedStore;

/// Per-schema context handed to every resolver. The store handle is the only
/// access path to the collections; resolvers never touch ambient state.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: SharedStore,
}

impl GraphQLContext {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}
