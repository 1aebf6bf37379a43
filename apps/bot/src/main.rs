use std::sync::Arc;

use anyhow::Result;
use bot::{Data, command, config::Config, error::on_error};
use poise::{Framework, FrameworkOptions};
use serenity::all::{ClientBuilder, GatewayIntents};
use shop::{BalanceClient, StockStore};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    if config.allowed_users.is_empty() {
        warn!("ALLOWED_USER_IDS is empty; every command will be denied");
    }

    let balance_client = Arc::new(BalanceClient::new(config.balance_api.clone())?);
    let stock_store = Arc::new(StockStore::new());

    info!(
        allowed_users = config.allowed_users.len(),
        balance_api = balance_client.base_api(),
        "configuration loaded"
    );

    let intents = GatewayIntents::non_privileged();

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: command::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup({
            let config = Arc::clone(&config);

            move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(
                        "{} [{}] connected successfully!",
                        ready.user.name, ready.user.id
                    );

                    // poise runs setup once per process, so this registers exactly once
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!(
                        commands = framework.options().commands.len(),
                        "commands registered globally"
                    );

                    Ok(Data {
                        config,
                        balance_client,
                        stock_store,
                    })
                })
            }
        })
        .build();

    let mut client = ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(why) = client.start().await {
            error!("Client error: {why:?}");
        }
    });

    shutdown_signal().await;
    shard_manager.shutdown_all().await;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::{
            select,
            signal::unix::{SignalKind, signal},
        };
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
        select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
