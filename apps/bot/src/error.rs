use std::path::PathBuf;

use poise::{CreateReply, FrameworkError};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{Context, Data, Error};

pub const DENIED: &str = "❌ You are not authorized to use this command.";
pub const UNEXPECTED: &str = "⚠️ An unexpected error occurred.";
pub const BALANCE_UNAVAILABLE: &str = "❌ Failed to fetch balance.";
pub const UPI_QR_NOT_FOUND: &str = "❌ UPI QR code image not found.";

/// Failures a command expects and answers with a specific message.
/// Everything else reaching the error hook is reported as [`UNEXPECTED`].
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    ValidationFailed(String),

    #[error("balance lookup unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("{} not found", .0.display())]
    ResourceNotFound(PathBuf),
}

/// The single message sent back for a failed interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub ephemeral: bool,
}

impl Notice {
    fn new(text: impl Into<String>, ephemeral: bool) -> Self {
        Self {
            text: text.into(),
            ephemeral,
        }
    }

    pub fn denied() -> Self {
        Self::new(DENIED, true)
    }

    pub fn unexpected() -> Self {
        Self::new(UNEXPECTED, true)
    }

    /// `None` means the allowlist said no; `Some` means the check itself failed.
    pub fn for_check_failure(error: Option<&Error>) -> Self {
        match error {
            None => Self::denied(),
            Some(_) => Self::unexpected(),
        }
    }

    pub fn for_error(error: &Error) -> Self {
        match error.downcast_ref::<CommandError>() {
            Some(CommandError::ValidationFailed(msg)) => Self::new(msg.as_str(), true),
            Some(CommandError::UpstreamUnavailable(_)) => Self::new(BALANCE_UNAVAILABLE, false),
            Some(CommandError::ResourceNotFound(_)) => Self::new(UPI_QR_NOT_FOUND, false),
            None => Self::unexpected(),
        }
    }

    fn into_reply(self) -> CreateReply {
        CreateReply::default()
            .content(self.text)
            .ephemeral(self.ephemeral)
    }
}

async fn send_notice(ctx: Context<'_>, notice: Notice) {
    if let Err(e) = ctx.send(notice.into_reply()).await {
        error!(command = %ctx.command().name, error = ?e, "failed to send error notice");
    }
}

pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::Setup { error, .. } => {
            error!(error = ?error, "framework setup failed");
        }
        FrameworkError::CommandCheckFailed {
            error: None, ctx, ..
        } => {
            info!(
                command = %ctx.command().name,
                user_id = ctx.author().id.get(),
                "denied"
            );
            send_notice(ctx, Notice::for_check_failure(None)).await;
        }
        FrameworkError::CommandCheckFailed {
            error: Some(error),
            ctx,
            ..
        } => {
            error!(command = %ctx.command().name, error = ?error, "command check errored");
            send_notice(ctx, Notice::for_check_failure(Some(&error))).await;
        }
        FrameworkError::Command { error, ctx, .. } => {
            let notice = Notice::for_error(&error);
            if error.downcast_ref::<CommandError>().is_some() {
                warn!(command = %ctx.command().name, error = %error, "command failed");
            } else {
                error!(command = %ctx.command().name, error = ?error, "unhandled command error");
            }
            send_notice(ctx, notice).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = ?e, "error while handling error");
            }
        }
    }
}
