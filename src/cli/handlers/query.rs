use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let response = execute(&ctx, &query, variables)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Runs `document` against a fresh schema on a one-off runtime.
pub(super) fn execute(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let schema = ctx.schema();

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid variables JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}
