use tracing::warn;

use crate::{Context, Error, config::Config};

/// Allowlist check attached to every command.
/// Runs before the command body; a `false` here ends the interaction with the denial notice.
pub async fn is_allowed(ctx: Context<'_>) -> Result<bool, Error> {
    let user_id = ctx.author().id.get();
    let allowed = caller_allowed(&ctx.data().config, user_id);

    if !allowed {
        warn!(user_id, command = %ctx.command().name, "caller not on allowlist");
    }

    Ok(allowed)
}

pub fn caller_allowed(config: &Config, user_id: u64) -> bool {
    config.allowed_users.is_allowed(user_id)
}
