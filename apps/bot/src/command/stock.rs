use poise::CreateReply;
use serenity::all::{CreateEmbed, CreateEmbedFooter};
use shop::StockCounts;
use tracing::info;

use crate::{Context, Error, command::gate::is_allowed};

pub const STOCK_UPDATED: &str = "✅ Stock updated.";

/// Show stock details
#[poise::command(slash_command, check = "is_allowed")]
pub async fn stock(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let counts = ctx.data().stock_store.get().await;

    info!(
        user_id,
        kitsune = counts.kitsune,
        dragon_west = counts.dragon_west,
        "stock: invoked"
    );

    ctx.send(CreateReply::default().embed(stock_embed(counts)))
        .await?;

    Ok(())
}

/// Admin only: Add stock counts
#[poise::command(slash_command, check = "is_allowed")]
pub async fn stock_add(
    ctx: Context<'_>,
    #[description = "Number of Kitsune"] kitsune: i64,
    #[description = "Number of Dragon West"] dragon_west: i64,
) -> Result<(), Error> {
    let user_id = ctx.author().id.get();

    ctx.data().stock_store.set(kitsune, dragon_west).await;
    info!(user_id, kitsune, dragon_west, "stock_add: updated");

    ctx.say(STOCK_UPDATED).await?;

    Ok(())
}

pub fn stock_embed(counts: StockCounts) -> CreateEmbed {
    CreateEmbed::default()
        .title("📦 Stock")
        .field("🐉 Dragon West", counts.dragon_west.to_string(), true)
        .field("🦊 Kitsune", counts.kitsune.to_string(), true)
        .footer(CreateEmbedFooter::new("Made with ❤️ for Members."))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use shop::StockStore;

    use super::*;

    fn field_values(embed: &CreateEmbed) -> Vec<(String, String)> {
        let value: Value = serde_json::to_value(embed).unwrap();
        value["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| {
                (
                    f["name"].as_str().unwrap().to_string(),
                    f["value"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn summary_reflects_last_update() {
        let store = StockStore::new();

        store.set(5, 3).await;
        assert_eq!(
            field_values(&stock_embed(store.get().await)),
            [
                ("🐉 Dragon West".to_string(), "3".to_string()),
                ("🦊 Kitsune".to_string(), "5".to_string()),
            ]
        );

        store.set(0, 0).await;
        assert_eq!(
            field_values(&stock_embed(store.get().await)),
            [
                ("🐉 Dragon West".to_string(), "0".to_string()),
                ("🦊 Kitsune".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn embed_has_title_and_footer() {
        let value = serde_json::to_value(stock_embed(StockCounts::default())).unwrap();
        assert_eq!(value["title"], "📦 Stock");
        assert_eq!(value["footer"]["text"], "Made with ❤️ for Members.");
    }
}
