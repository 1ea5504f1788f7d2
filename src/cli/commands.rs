use crate::config::IdMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cars")]
#[command(
    author,
    version,
    about = "A small in-memory car registry served over GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (uses ./cars.toml when present)
    #[arg(long, global = true, env = "CARS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// How new car ids are assigned: sequential or length
    #[arg(long, global = true)]
    pub id_mode: Option<IdMode>,

    /// Start with an empty registry instead of the demo cars
    #[arg(long, global = true)]
    pub no_seed: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "CARS_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "CARS_PORT")]
        port: Option<u16>,

        /// Send permissive CORS headers
        #[arg(long)]
        cors: bool,

        /// Do not serve the GraphiQL explorer on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a fresh registry
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
