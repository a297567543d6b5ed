pub mod fixtures;
pub mod graphql;
pub mod server;
pub mod store;
