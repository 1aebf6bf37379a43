use std::fmt;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BASE_API: &str = "https://api.blockcypher.com/v1/ltc/main";

/// Shown in place of a transaction hash when the address has no history.
pub const NO_TRANSACTIONS: &str = "No transactions yet";

const UNITS_PER_LTC: u64 = 100_000_000;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("balance lookup returned {status}")]
    UpstreamUnavailable { status: StatusCode },

    #[error("balance lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("balance lookup returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct BalanceClient {
    client: Client,
    base_api: String,
}

impl BalanceClient {
    pub fn new(base_api: impl Into<String>) -> Result<Self, BalanceError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_api: base_api.into(),
        })
    }

    pub fn base_api(&self) -> &str {
        &self.base_api
    }

    fn address_url(&self, address: &str) -> String {
        format!("{}/addrs/{}", self.base_api.trim_end_matches('/'), address)
    }

    /// Look up the balance of a single address.
    ///
    /// Any status other than 200 is reported as [`BalanceError::UpstreamUnavailable`];
    /// the caller decides what to tell the user. There is no retry.
    #[instrument(name = "fetch_balance", skip(self))]
    pub async fn fetch_balance(&self, address: &str) -> Result<BalanceSnapshot, BalanceError> {
        let res = self.client.get(self.address_url(address)).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%status, "balance lookup rejected");
            return Err(BalanceError::UpstreamUnavailable { status });
        }

        let body = res.bytes().await?;
        let snapshot = BalanceSnapshot::from_json(&body)?;
        debug!(
            confirmed = %snapshot.confirmed,
            unconfirmed = %snapshot.unconfirmed,
            "balance fetched"
        );

        Ok(snapshot)
    }
}

//
// Subset of the BlockCypher address endpoint
// https://www.blockcypher.com/dev/litecoin/#address-endpoint
//
#[derive(Debug, Deserialize)]
struct AddressResponse {
    #[serde(default)]
    balance: i64,

    #[serde(default)]
    unconfirmed_balance: i64,

    #[serde(default)]
    total_received: i64,

    #[serde(default)]
    txrefs: Vec<TxRef>,
}

#[derive(Debug, Deserialize)]
struct TxRef {
    tx_hash: String,
}

/// An amount in litoshi, displayed as LTC with eight fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ltc(pub i64);

impl Ltc {
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / UNITS_PER_LTC as f64
    }
}

impl fmt::Display for Ltc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:08}", abs / UNITS_PER_LTC, abs % UNITS_PER_LTC)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub confirmed: Ltc,
    pub unconfirmed: Ltc,
    pub total_received: Ltc,
    pub latest_tx: Option<String>,
}

impl BalanceSnapshot {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<AddressResponse>(body).map(Self::from_response)
    }

    pub fn latest_tx_or_placeholder(&self) -> &str {
        self.latest_tx.as_deref().unwrap_or(NO_TRANSACTIONS)
    }

    fn from_response(res: AddressResponse) -> Self {
        Self {
            confirmed: Ltc(res.balance),
            unconfirmed: Ltc(res.unconfirmed_balance),
            total_received: Ltc(res.total_received),
            latest_tx: res.txrefs.into_iter().next().map(|tx| tx.tx_hash),
        }
    }
}
