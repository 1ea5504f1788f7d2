use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
    no_graphiql: bool,
) -> Result<()> {
    let settings = &mut ctx.config.server;
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    if cors {
        settings.cors = true;
    }
    if no_graphiql {
        settings.graphiql = false;
    }

    let schema = ctx.schema();
    let settings = &ctx.config.server;

    println!(
        "{} http://{}:{}{}",
        "Starting GraphQL server on".green(),
        settings.host,
        settings.port,
        GRAPHQL_PATH
    );

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, settings))
        .with_context(|| format!("Server on {}:{} failed", settings.host, settings.port))?;
    Ok(())
}
