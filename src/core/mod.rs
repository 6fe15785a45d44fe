pub mod coordinator;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{DataPresenter, DataProvider};
pub use crate::utils::error::Result;
