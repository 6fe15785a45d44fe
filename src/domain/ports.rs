use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies records and accepts records for saving.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch(&self) -> Result<Record>;
    async fn save(&self, record: &Record) -> Result<()>;
}

/// Renders a record to some output. Implementations write exactly two lines:
/// the name first, then the contact.
pub trait DataPresenter: Send + Sync {
    fn display(&self, record: &Record);
}

#[async_trait]
impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    async fn fetch(&self) -> Result<Record> {
        (**self).fetch().await
    }

    async fn save(&self, record: &Record) -> Result<()> {
        (**self).save(record).await
    }
}

impl<D: DataPresenter + ?Sized> DataPresenter for Box<D> {
    fn display(&self, record: &Record) {
        (**self).display(record)
    }
}
