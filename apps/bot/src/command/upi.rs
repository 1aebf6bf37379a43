use std::{io::ErrorKind, path::Path};

use poise::CreateReply;
use serenity::all::CreateAttachment;
use tracing::info;

use crate::{Context, Error, command::gate::is_allowed, error::CommandError};

const FALLBACK_FILENAME: &str = "upi_qr.png";

/// Send UPI QR and ID
#[poise::command(slash_command, check = "is_allowed")]
pub async fn upi(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let config = &ctx.data().config;

    info!(user_id, path = %config.upi_qr_path.display(), "upi: invoked");

    let (bytes, filename) = read_upi_qr(&config.upi_qr_path).await?;

    ctx.send(
        CreateReply::default()
            .content(upi_caption(&config.upi_id))
            .attachment(CreateAttachment::bytes(bytes, filename)),
    )
    .await?;

    Ok(())
}

pub fn upi_caption(upi_id: &str) -> String {
    format!("📎 My UPI ID: `{upi_id}`")
}

/// Read the configured QR image. A missing file becomes [`CommandError::ResourceNotFound`];
/// other I/O failures are passed through untouched.
pub async fn read_upi_qr(path: &Path) -> Result<(Vec<u8>, String), Error> {
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CommandError::ResourceNotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_FILENAME)
        .to_string();

    Ok((bytes, filename))
}
