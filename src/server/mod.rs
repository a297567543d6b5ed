pub mod app;
pub mod handlers;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::fixtures::FixtureSet;
use crate::store::{SharedStore, Store};

pub async fn start_server(
    port: u16,
    fixtures_dir: Option<&Path>,
    cors_origin: Option<&str>,
) -> Result<()> {
    let fixtures = match fixtures_dir {
        Some(dir) => FixtureSet::from_dir(dir)?,
        None => FixtureSet::embedded()?,
    };
    info!(
        "Fixtures loaded: {} courses, {} students, {} grades",
        fixtures.courses.len(),
        fixtures.students.len(),
        fixtures.grades.len()
    );

    let store = SharedStore::new(Store::new(fixtures));
    let app = app::create_app(store, cors_origin)?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health   - Health check");
    info!("  /graphql  - GraphQL API & Playground");
}
