use anyhow::{Context, Result};
use clap::Parser;

use cars::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use cars::cli::{Cli, Commands};
use cars::config::CarsConfig;
use cars::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    let mut config = CarsConfig::discover(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(mode) = cli.id_mode {
        config.registry.id_mode = mode;
    }
    if cli.no_seed {
        config.registry.seed = false;
    }
    tracing::debug!(
        id_mode = %config.registry.id_mode,
        seed = config.registry.seed,
        "configuration loaded"
    );

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors,
            no_graphiql,
        } => handle_serve(ctx, host, port, cors, no_graphiql),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(&ctx),
    }
}
