use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: &CommandContext) -> Result<()> {
    print!("{}", ctx.schema().sdl());
    Ok(())
}
