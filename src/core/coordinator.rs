use crate::core::{DataPresenter, DataProvider, Record};
use crate::utils::error::Result;

/// Sequences provider and presenter calls. Both collaborators are injected,
/// so either can be swapped without touching this type.
pub struct Coordinator<P: DataProvider, D: DataPresenter> {
    provider: P,
    presenter: D,
}

impl<P: DataProvider, D: DataPresenter> Coordinator<P, D> {
    pub fn new(provider: P, presenter: D) -> Self {
        Self {
            provider,
            presenter,
        }
    }

    /// Fetch one record and hand it to the presenter.
    pub async fn initialize(&self) -> Result<()> {
        tracing::debug!("Fetching record...");
        let record = self.provider.fetch().await?;
        tracing::debug!("Fetched record for {}", record.name);

        self.presenter.display(&record);
        Ok(())
    }

    /// Save `record` through the provider. The presenter is not involved.
    pub async fn persist(&self, record: &Record) -> Result<()> {
        tracing::debug!("Persisting record for {}", record.name);
        self.provider.save(record).await
    }

    /// The injected provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The injected presenter.
    pub fn presenter(&self) -> &D {
        &self.presenter
    }
}
