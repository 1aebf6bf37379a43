use std::sync::Arc;

use shop::{BalanceClient, StockStore};

pub mod command;
pub mod config;
pub mod error;

pub struct Data {
    pub config: Arc<config::Config>,
    pub balance_client: Arc<BalanceClient>,
    pub stock_store: Arc<StockStore>,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;
