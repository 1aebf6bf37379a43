mod balance;
mod gate;
mod ltc;
mod stock;
mod upi;

pub use balance::{balance_embed, lookup_error, mybal};
pub use gate::{caller_allowed, is_allowed};
pub use ltc::{LtcReply, ltc, ltc_reply};
pub use stock::{stock, stock_add, stock_embed};
pub use upi::{read_upi_qr, upi, upi_caption};

use crate::{Data, Error};

/// Every slash command the bot registers, in registration order.
/// Each one carries the allowlist check.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![mybal(), ltc(), upi(), stock(), stock_add()]
}
