use std::{env::var, path::PathBuf};

use anyhow::{Context, Result};
use shop::{Allowlist, DEFAULT_BASE_API};

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub ltc_address: String,
    pub upi_qr_path: PathBuf,
    pub upi_id: String,
    pub allowed_users: Allowlist,
    pub balance_api: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_BOT_TOKEN not set")?;

        Ok(Self {
            discord_token,
            ltc_address: lookup("LTC_ADDRESS").unwrap_or_default(),
            upi_qr_path: lookup("UPI_QR_PATH").unwrap_or_default().into(),
            upi_id: lookup("UPI_ID").unwrap_or_default(),
            allowed_users: Allowlist::parse(&lookup("ALLOWED_USER_IDS").unwrap_or_default()),
            balance_api: lookup("BALANCE_API_BASE")
                .unwrap_or_else(|| DEFAULT_BASE_API.to_string()),
        })
    }
}
