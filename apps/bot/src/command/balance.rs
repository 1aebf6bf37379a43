use poise::CreateReply;
use serenity::all::CreateEmbed;
use shop::{BalanceError, BalanceSnapshot};
use tracing::info;

use crate::{Context, Error, command::gate::is_allowed, error::CommandError};

/// Check your LTC wallet balance
#[poise::command(slash_command, check = "is_allowed")]
pub async fn mybal(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let address = ctx.data().config.ltc_address.as_str();

    info!(user_id, address, "mybal: invoked");
    ctx.defer().await?;

    let snapshot = ctx
        .data()
        .balance_client
        .fetch_balance(address)
        .await
        .map_err(lookup_error)?;

    ctx.send(CreateReply::default().embed(balance_embed(&snapshot)))
        .await?;

    info!(user_id, "mybal: completed");
    Ok(())
}

/// A non-200 answer becomes [`CommandError::UpstreamUnavailable`]; transport and
/// decode failures stay unhandled and are logged by the error hook.
pub fn lookup_error(error: BalanceError) -> Error {
    match error {
        BalanceError::UpstreamUnavailable { status } => {
            CommandError::UpstreamUnavailable(status.to_string()).into()
        }
        other => other.into(),
    }
}

pub fn balance_embed(snapshot: &BalanceSnapshot) -> CreateEmbed {
    CreateEmbed::default()
        .title("📊 LTC Balance Checker | My_Bal")
        .field(
            "Confirmed Balance",
            format!("{} LTC", snapshot.confirmed),
            true,
        )
        .field(
            "Unconfirmed Balance",
            format!("{} LTC", snapshot.unconfirmed),
            true,
        )
        .field(
            "Total Received",
            format!("{} LTC", snapshot.total_received),
            true,
        )
        .field("Last Transaction", snapshot.latest_tx_or_placeholder(), false)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::error::{BALANCE_UNAVAILABLE, Notice, UNEXPECTED};

    fn fields(embed: &CreateEmbed) -> Vec<Value> {
        let value = serde_json::to_value(embed).unwrap();
        value["fields"].as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn renders_balance_summary() {
        let snapshot = BalanceSnapshot::from_json(
            br#"{"balance":150000000,"unconfirmed_balance":0,"total_received":300000000,"txrefs":[{"tx_hash":"abc"}]}"#,
        )
        .unwrap();

        let embed = balance_embed(&snapshot);
        let value = serde_json::to_value(&embed).unwrap();
        assert_eq!(value["title"], "📊 LTC Balance Checker | My_Bal");

        assert_eq!(
            fields(&embed),
            [
                json!({"name": "Confirmed Balance", "value": "1.50000000 LTC", "inline": true}),
                json!({"name": "Unconfirmed Balance", "value": "0.00000000 LTC", "inline": true}),
                json!({"name": "Total Received", "value": "3.00000000 LTC", "inline": true}),
                json!({"name": "Last Transaction", "value": "abc", "inline": false}),
            ]
        );
    }

    #[test]
    fn renders_placeholder_without_history() {
        let snapshot = BalanceSnapshot::from_json(br#"{"txrefs":[]}"#).unwrap();
        let fields = fields(&balance_embed(&snapshot));
        assert_eq!(fields[3]["value"], "No transactions yet");
    }

    #[test]
    fn non_200_lookup_sends_fixed_failure_text() {
        let err = lookup_error(BalanceError::UpstreamUnavailable {
            status: shop::StatusCode::SERVICE_UNAVAILABLE,
        });

        let notice = Notice::for_error(&err);
        assert_eq!(notice.text, BALANCE_UNAVAILABLE);
        assert!(!notice.ephemeral);
    }

    #[test]
    fn malformed_lookup_is_unexpected() {
        let decode = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = lookup_error(BalanceError::Decode(decode));

        assert_eq!(Notice::for_error(&err).text, UNEXPECTED);
    }
}
