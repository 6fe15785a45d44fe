// Adapters layer: concrete providers and presenters behind the domain ports.

pub mod presenter;
pub mod provider;

pub use presenter::{LogPresenter, WriterPresenter};
pub use provider::SampleProvider;
