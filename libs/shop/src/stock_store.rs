use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockCounts {
    pub kitsune: i64,
    pub dragon_west: i64,
}

/// In-memory stock counts for the two listed items.
///
/// Counts start at zero and live for the lifetime of the process. Writes
/// replace both counts at once; the last writer wins.
#[derive(Debug, Default)]
pub struct StockStore {
    counts: RwLock<StockCounts>,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counts
    pub async fn get(&self) -> StockCounts {
        *self.counts.read().await
    }

    /// Overwrite both counts. Returns the previous counts.
    pub async fn set(&self, kitsune: i64, dragon_west: i64) -> StockCounts {
        let mut counts = self.counts.write().await;
        let previous = *counts;
        *counts = StockCounts {
            kitsune,
            dragon_west,
        };

        debug!(
            kitsune,
            dragon_west,
            previous_kitsune = previous.kitsune,
            previous_dragon_west = previous.dragon_west,
            "stock overwritten"
        );

        previous
    }
}
