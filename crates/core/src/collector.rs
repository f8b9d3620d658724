//! Metric collector trait

use crate::error::CollectionError;
use lcd_sens_types::{MetricKey, MetricSnapshot, MetricValue};

/// Trait for the collect-by-key capability
///
/// Implementations produce one formatted string per [`MetricKey`]. The
/// provided methods turn failures into [`MetricValue::Unavailable`], so a
/// caller holding a snapshot never sees a collection error.
#[allow(async_fn_in_trait)]
pub trait MetricCollector {
    /// Collect and format a single metric
    async fn collect(&self, key: MetricKey) -> Result<String, CollectionError>;

    /// Collect a metric, degrading any failure to the placeholder
    async fn collect_value(&self, key: MetricKey) -> MetricValue {
        match self.collect(key).await {
            Ok(text) if text.trim().is_empty() => {
                log::debug!("Metric {} returned an empty value", key);
                MetricValue::Unavailable
            }
            Ok(text) => MetricValue::Text(text),
            Err(e) => {
                log::warn!("Failed to collect {}: {}", key, e);
                MetricValue::Unavailable
            }
        }
    }

    /// Collect every key, finishing all of them before returning
    async fn snapshot(&self, keys: &[MetricKey]) -> MetricSnapshot {
        let mut snapshot = MetricSnapshot::new();
        for &key in keys {
            let value = self.collect_value(key).await;
            snapshot.insert(key, value);
        }
        snapshot
    }
}
