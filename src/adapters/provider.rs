use crate::core::{DataProvider, Record};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// In-memory provider. `fetch` hands back a fixed record after a simulated
/// delay; `save` only logs the record.
#[derive(Debug, Clone)]
pub struct SampleProvider {
    record: Record,
    delay: Duration,
}

impl SampleProvider {
    pub fn new(record: Record, delay: Duration) -> Self {
        Self { record, delay }
    }
}

impl Default for SampleProvider {
    fn default() -> Self {
        Self::new(Record::sample(), Duration::ZERO)
    }
}

#[async_trait]
impl DataProvider for SampleProvider {
    async fn fetch(&self) -> Result<Record> {
        tracing::debug!("Fetching record (simulated latency {:?})", self.delay);

        // 模擬網路延遲，只會觸發一次
        tokio::time::sleep(self.delay).await;

        Ok(self.record.clone())
    }

    async fn save(&self, record: &Record) -> Result<()> {
        tracing::info!("Saving record to the database...");
        let json = serde_json::to_string(record)?;
        tracing::info!("{}", json);

        // 實際的持久化由真正的儲存後端負責
        Ok(())
    }
}
