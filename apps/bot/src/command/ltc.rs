use poise::CreateReply;
use serenity::all::CreateAttachment;
use shop::{make_qr_png, payment_uri};
use tracing::{debug, info};

use crate::{Context, Error, command::gate::is_allowed, error::CommandError};

pub const INVALID_AMOUNT: &str = "⚠️ Please specify a valid positive amount for the QR.";
const QR_FILENAME: &str = "ltc_qr.png";

#[derive(Debug)]
pub enum LtcReply {
    Address(String),
    Qr { uri: String, png: Vec<u8> },
}

/// Get LTC address or QR
#[poise::command(slash_command, check = "is_allowed")]
pub async fn ltc(
    ctx: Context<'_>,
    #[description = "Type 'qr' for QR code"] option: Option<String>,
    #[description = "Amount (for QR)"] amount: Option<f64>,
) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let amount = amount.unwrap_or(0.0);

    info!(user_id, option = ?option, amount, "ltc: invoked");

    let address = ctx.data().config.ltc_address.clone();
    let reply = tokio::task::spawn_blocking(move || {
        ltc_reply(&address, option.as_deref(), amount)
    })
    .await??;

    match reply {
        LtcReply::Address(text) => {
            ctx.say(text).await?;
        }
        LtcReply::Qr { uri, png } => {
            debug!(user_id, uri = %uri, bytes = png.len(), "ltc: qr generated");
            ctx.send(CreateReply::default().attachment(CreateAttachment::bytes(png, QR_FILENAME)))
                .await?;
        }
    }

    Ok(())
}

/// Address text by default; a payment QR when `option` is `qr` and `amount` is positive.
pub fn ltc_reply(address: &str, option: Option<&str>, amount: f64) -> Result<LtcReply, Error> {
    if option != Some("qr") {
        return Ok(LtcReply::Address(format!("My LTC Address: `{address}`")));
    }

    if amount.is_nan() || amount <= 0.0 {
        return Err(CommandError::ValidationFailed(INVALID_AMOUNT.to_string()).into());
    }

    let uri = payment_uri(address, amount);
    let png = make_qr_png(&uri)?;

    Ok(LtcReply::Qr { uri, png })
}
