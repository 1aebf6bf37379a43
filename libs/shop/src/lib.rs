mod allowlist;
mod balance_client;
mod payment_qr;
mod stock_store;

pub use allowlist::Allowlist;
pub use balance_client::{
    BalanceClient, BalanceError, BalanceSnapshot, DEFAULT_BASE_API, Ltc, NO_TRANSACTIONS,
};
pub use payment_qr::{QrError, make_qr_png, payment_uri};
pub use stock_store::{StockCounts, StockStore};
pub use reqwest::StatusCode;
