use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gradebook::fixtures::FixtureSet;
use gradebook::graphql::{build_schema, GraphQLContext};
use gradebook::server;
use gradebook::store::{SharedStore, Store};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(short, long, default_value = "3000")]
    port: u16,
    /// Directory with courses.json, students.json and grades.json, replacing
    /// the embedded fixtures
    #[clap(short, long)]
    fixtures: Option<PathBuf>,
    #[clap(long)]
    cors_origin: Option<String>,
    /// Print the GraphQL schema in SDL form and exit
    #[clap(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(&args.log_level);

    if args.print_schema {
        let store = SharedStore::new(Store::new(FixtureSet::default()));
        let schema = build_schema(GraphQLContext::new(store));
        println!("{}", schema.sdl());
        return Ok(());
    }

    info!("Starting server on port {}", args.port);
    server::start_server(
        args.port,
        args.fixtures.as_deref(),
        args.cors_origin.as_deref(),
    )
    .await?;

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .without_time()
        .init();
}
